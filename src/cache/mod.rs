//! Local cache of the directory exports.
//!
//! Each dataset is one file on disk, refreshed on a time-to-live basis:
//! missing or week-old files are downloaded again, anything younger is
//! served as-is. The filesystem is the sole source of truth - no
//! freshness record is kept in memory between calls, so externally
//! touched or deleted files are picked up on the next check.

pub mod freshness;
pub mod refresh;

pub use freshness::{check, Freshness};
pub use refresh::{RefreshOutcome, Refresher};
