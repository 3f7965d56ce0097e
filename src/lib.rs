//! dmrdir - a local cache of the DMR user and repeater directories.
//!
//! Two datasets from RadioID (users and repeaters) are mirrored as
//! plain JSON files and refreshed on a weekly time-to-live: missing or
//! week-old files are streamed down again, anything younger is used
//! as-is. On top of the cache sit point lookups by DMR ID: callsigns
//! and alias strings for radios that resolve IDs to names.
//!
//! - [`cache`] - freshness checks and the refresh decision
//! - [`fetch`] - the streaming HTTP downloader
//! - [`progress`] - byte counting and progress observers
//! - [`lookup`] - keyed queries into the cached documents
//! - [`config`] - file locations and source URLs

pub mod cache;
pub mod config;
pub mod fetch;
pub mod lookup;
pub mod progress;

pub use cache::{RefreshOutcome, Refresher};
pub use fetch::{FetchError, Fetcher};
pub use lookup::Directory;
