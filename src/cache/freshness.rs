use std::fs;
use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

/// Consider a cached export stale after 168 hours (7 days).
/// The upstream dumps are regenerated on roughly that cadence, so a
/// weekly refresh keeps lookups current without hammering the source.
pub const STALE_AFTER_HOURS: i64 = 168;

/// The state of one cache file, derived from filesystem metadata at
/// check time. Nothing is retained between checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// No usable file: missing, a directory, or metadata unreadable.
    Absent,
    /// Present and younger than the staleness threshold.
    Fresh { modified: DateTime<Utc> },
    /// Present but older than the staleness threshold.
    Stale { modified: DateTime<Utc> },
}

impl Freshness {
    /// Classify a modification time against `now`.
    pub fn classify(modified: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if now - modified > Duration::hours(STALE_AFTER_HOURS) {
            Freshness::Stale { modified }
        } else {
            Freshness::Fresh { modified }
        }
    }

    /// True when the file must be (re)downloaded.
    pub fn needs_refresh(&self) -> bool {
        !matches!(self, Freshness::Fresh { .. })
    }
}

/// Check the cache file at `path`.
///
/// A failed metadata lookup is reported as [`Freshness::Absent`] rather
/// than an error: either way the file cannot be served and has to be
/// fetched. Read-only; never touches the file itself.
pub fn check(path: &Path) -> Freshness {
    let meta = match fs::metadata(path) {
        Ok(meta) if meta.is_file() => meta,
        Ok(_) => {
            debug!(path = %path.display(), "Path is not a regular file, treating as absent");
            return Freshness::Absent;
        }
        Err(e) => {
            debug!(path = %path.display(), error = %e, "Stat failed, treating as absent");
            return Freshness::Absent;
        }
    };

    match meta.modified() {
        Ok(mtime) => Freshness::classify(mtime.into(), Utc::now()),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "No modification time, treating as absent");
            Freshness::Absent
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_within_threshold_is_fresh() {
        let now = Utc::now();
        let modified = now - Duration::hours(1);
        assert_eq!(
            Freshness::classify(modified, now),
            Freshness::Fresh { modified }
        );
        assert!(!Freshness::classify(modified, now).needs_refresh());
    }

    #[test]
    fn test_classify_boundary() {
        let now = Utc::now();

        // Exactly 168h is still fresh; the threshold is strictly "older than".
        let at_limit = now - Duration::hours(STALE_AFTER_HOURS);
        assert_eq!(
            Freshness::classify(at_limit, now),
            Freshness::Fresh { modified: at_limit }
        );

        let past_limit = now - Duration::hours(STALE_AFTER_HOURS) - Duration::seconds(1);
        assert_eq!(
            Freshness::classify(past_limit, now),
            Freshness::Stale {
                modified: past_limit
            }
        );
    }

    #[test]
    fn test_classify_eight_days_is_stale() {
        let now = Utc::now();
        let modified = now - Duration::days(8);
        let freshness = Freshness::classify(modified, now);
        assert_eq!(freshness, Freshness::Stale { modified });
        assert!(freshness.needs_refresh());
    }

    #[test]
    fn test_check_missing_path_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-file.json");
        assert_eq!(check(&path), Freshness::Absent);
        assert!(check(&path).needs_refresh());
    }

    #[test]
    fn test_check_directory_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(check(dir.path()), Freshness::Absent);
    }

    #[test]
    fn test_check_new_file_is_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        std::fs::write(&path, "{}").unwrap();
        assert!(matches!(check(&path), Freshness::Fresh { .. }));
    }
}
