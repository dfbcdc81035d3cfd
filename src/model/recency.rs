use serde::{Deserialize, Serialize};

/// How many open events the tracker keeps. Oldest beyond the cap are evicted.
pub const RECENCY_CAP: usize = 10;

/// One recorded folder-open event. The persisted sequence is most recent
/// first and unique by path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecencyRecord {
    pub path: String,
    /// Millis since epoch.
    pub timestamp: i64,
}

const HOUR_MS: i64 = 60 * 60 * 1000;

/// Bucket elapsed time since last open into boost keywords.
/// Boundaries are strict: an age of exactly 1h falls into the 6h tier.
pub fn age_tags(last_open: i64, now: i64) -> &'static [&'static str] {
    let age = now - last_open;
    if age < HOUR_MS {
        &["hot", "recent", "opened"]
    } else if age < 6 * HOUR_MS {
        &["recent", "opened"]
    } else if age < 24 * HOUR_MS {
        &["recent"]
    } else if age < 72 * HOUR_MS {
        &["opened"]
    } else {
        &[]
    }
}

/// Whether an open at `last_open` counts as "recently opened" (under an hour).
pub fn is_recent(last_open: i64, now: i64) -> bool {
    now - last_open < HOUR_MS
}
