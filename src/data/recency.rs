use std::collections::HashMap;

use chrono::Utc;

use crate::data::store::StateStore;
use crate::model::recency::{RecencyRecord, RECENCY_CAP};

const STORE_KEY: &str = "recent-folders";

/// Keeps the ordered, capped log of folder-open events. The injected store
/// is the only persistence; the tracker holds no state between calls.
pub struct RecencyTracker {
    store: Box<dyn StateStore>,
}

impl RecencyTracker {
    pub fn new(store: Box<dyn StateStore>) -> Self {
        Self { store }
    }

    /// Record that `path` was opened now. Any existing record for the path
    /// moves to the front with a fresh timestamp; the log is then truncated
    /// to the cap. Safe to call repeatedly in quick succession.
    pub fn record_open(&mut self, path: &str) {
        self.record_open_at(path, Utc::now().timestamp_millis());
    }

    fn record_open_at(&mut self, path: &str, now: i64) {
        let mut records = self.load();
        records.retain(|r| r.path != path);
        records.insert(
            0,
            RecencyRecord {
                path: path.to_string(),
                timestamp: now,
            },
        );
        records.truncate(RECENCY_CAP);

        if let Ok(blob) = serde_json::to_string(&records) {
            self.store.set(STORE_KEY, blob);
        }
    }

    /// Current path → last-open-millis table. Missing or corrupt storage
    /// yields an empty map, never an error.
    pub fn get_all(&self) -> HashMap<String, i64> {
        self.load()
            .into_iter()
            .map(|r| (r.path, r.timestamp))
            .collect()
    }

    fn load(&self) -> Vec<RecencyRecord> {
        self.store
            .get(STORE_KEY)
            .and_then(|blob| serde_json::from_str(&blob).ok())
            .unwrap_or_default()
    }
}
