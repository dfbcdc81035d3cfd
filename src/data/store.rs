use std::path::PathBuf;

/// String-keyed blob storage for the little state the app persists.
/// Injected into the recency tracker so tests can swap in a memory fake.
pub trait StateStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
}

/// File-backed store: one JSON file per key under the app home directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl StateStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: String) {
        // Losing a recency write is harmless; never surface storage errors.
        let _ = std::fs::create_dir_all(&self.dir);
        let _ = std::fs::write(self.path_for(key), value);
    }
}

/// In-memory store for tests.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    map: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.map.insert(key.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_round_trips_and_creates_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(tmp.path().join("state"));
        assert_eq!(store.get("recents"), None);

        store.set("recents", "[1,2]".to_string());
        assert_eq!(store.get("recents").as_deref(), Some("[1,2]"));
    }
}
