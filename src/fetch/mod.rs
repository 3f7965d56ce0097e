//! HTTP fetch module for the directory exports.
//!
//! This module provides the `Fetcher` for streaming a remote directory
//! export straight into a local cache file, reporting progress through
//! an injected observer as the body arrives.

pub mod client;
pub mod error;

pub use client::Fetcher;
pub use error::FetchError;
