use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::ProjectRecord;

/// Storage entry holding the full project list. The name is kept for
/// backward compatibility with previously saved data.
pub const STORAGE_KEY: &str = "userProjects_v1";

/// Backend-level failures. These never escape [`ProjectStore`]; they exist so
/// backends can report precisely what went wrong before the store logs and
/// swallows it.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage io: {0}")]
    Io(#[from] io::Error),
    #[error("storage serialization: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Key-value persistence seam. The store only ever needs whole-entry get and
/// set, so any layer that can hold one string per key qualifies.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Non-persistent backend for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Resolve the default data directory (`~/.folio/`).
pub fn data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".folio")
}

/// File-per-key backend rooted at a data directory.
#[derive(Debug)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Backend rooted at the default data directory.
    pub fn in_home() -> Self {
        Self::new(data_dir())
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.entry_path(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Atomic write (temp file + rename) so a crash mid-write never leaves a
    /// truncated entry behind.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        let path = self.entry_path(key);
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

/// Ordered project list persisted wholesale under [`STORAGE_KEY`].
///
/// Every operation fails soft: backend and parse failures are logged and
/// reported as "no data" (reads) or dropped (writes). `append` is a whole-list
/// read-modify-write with no atomicity across concurrent writers; the last
/// writer wins on the full list.
#[derive(Debug)]
pub struct ProjectStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> ProjectStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Read every stored record, in insertion order. Absent entry yields an
    /// empty list; unreadable or non-list data is logged and yields an empty
    /// list.
    pub fn load_all(&self) -> Vec<ProjectRecord> {
        let raw = match self.backend.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("could not read saved projects: {e}");
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<ProjectRecord>>(&raw) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("saved projects data invalid: {e}");
                Vec::new()
            }
        }
    }

    /// Append one record to the end of the stored list. A failed write is
    /// logged and swallowed; the caller's already-rendered UI stays as is.
    pub fn append(&mut self, record: ProjectRecord) {
        let mut records = self.load_all();
        records.push(record);
        let json = match serde_json::to_string(&records) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("could not serialize project list: {e}");
                return;
            }
        };
        if let Err(e) = self.backend.set(STORAGE_KEY, &json) {
            tracing::warn!("could not save project: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> ProjectRecord {
        ProjectRecord {
            name: name.to_string(),
            url: "http://x".to_string(),
            img: "http://y.png".to_string(),
            desc: "Bar".to_string(),
        }
    }

    #[test]
    fn load_all_on_empty_storage_is_empty() {
        let store = ProjectStore::new(MemoryBackend::new());
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn append_then_load_round_trips() {
        let mut store = ProjectStore::new(MemoryBackend::new());
        store.append(record("Foo"));
        assert_eq!(store.load_all(), vec![record("Foo")]);
    }

    #[test]
    fn appends_preserve_insertion_order() {
        let mut store = ProjectStore::new(MemoryBackend::new());
        store.append(record("first"));
        store.append(record("second"));
        let names: Vec<_> = store.load_all().into_iter().map(|r| r.name).collect();
        assert_eq!(names, ["first", "second"]);
    }

    #[test]
    fn non_list_entry_reads_as_empty() {
        for bad in ["5", "{}", "\"projects\"", "not json at all"] {
            let mut backend = MemoryBackend::new();
            backend.set(STORAGE_KEY, bad).unwrap();
            let store = ProjectStore::new(backend);
            assert!(store.load_all().is_empty(), "entry {bad:?} should read as empty");
        }
    }

    #[test]
    fn append_after_bad_entry_starts_fresh() {
        let mut backend = MemoryBackend::new();
        backend.set(STORAGE_KEY, "{\"oops\":1}").unwrap();
        let mut store = ProjectStore::new(backend);
        store.append(record("Foo"));
        assert_eq!(store.load_all(), vec![record("Foo")]);
    }

    struct WriteFailBackend;

    impl StorageBackend for WriteFailBackend {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "quota exceeded",
            )))
        }
    }

    #[test]
    fn failed_write_is_logged_and_swallowed() {
        let mut store = ProjectStore::new(WriteFailBackend);
        // Must return normally; the error stays inside the store.
        store.append(record("Foo"));
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn file_backend_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ProjectStore::new(FileBackend::new(dir.path()));
        store.append(record("Foo"));
        store.append(record("Baz"));

        // A second store over the same directory sees the same list.
        let reopened = ProjectStore::new(FileBackend::new(dir.path()));
        let names: Vec<_> = reopened.load_all().into_iter().map(|r| r.name).collect();
        assert_eq!(names, ["Foo", "Baz"]);
    }

    #[test]
    fn file_backend_missing_dir_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path().join("never-created"));
        assert!(backend.get(STORAGE_KEY).unwrap().is_none());
    }

    #[test]
    fn file_backend_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::new(dir.path());
        backend.set(STORAGE_KEY, "[]").unwrap();
        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, [format!("{STORAGE_KEY}.json")]);
    }
}
