//! String key-value stores backing player progress.

use std::{
    collections::BTreeMap,
    ffi::OsString,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, warn};

/// Failure raised by a durable store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("failed to access store file {path}")]
    Io {
        /// File that could not be accessed.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// A progress value could not be encoded for storage.
    #[error("failed to encode value for key {key}")]
    Encode {
        /// Key the value was destined for.
        key: &'static str,
        /// Underlying encode failure.
        #[source]
        source: serde_json::Error,
    },
}

/// Minimal string key-value persistence used for progress.
pub trait KeyValueStore {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;
}

/// Volatile store for tests and ephemeral sessions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Reports whether nothing has been stored yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        let _ = self.entries.insert(key.to_owned(), value);
        Ok(())
    }
}

/// Store persisted as a single JSON object, rewritten on every write.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store at `path`.
    ///
    /// A missing file starts out empty, and so does a file whose contents are
    /// not a JSON object of strings. Only I/O failures are reported.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries: BTreeMap<String, String> = match fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => BTreeMap::new(),
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|error| {
                warn!(path = %path.display(), %error, "discarding malformed progress store");
                BTreeMap::new()
            }),
            Err(error) if error.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        debug!(path = %path.display(), keys = entries.len(), "opened progress store");
        Ok(Self { path, entries })
    }

    /// File backing the store.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map_or_else(|| OsString::from("progress"), OsString::from);
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Replaces the file with the current entries. The new contents land
    /// under a sibling name first, so the file is never left half written.
    fn flush(&self) -> Result<(), StoreError> {
        let io_error = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        let contents = serde_json::to_string_pretty(&self.entries)
            .map_err(|source| io_error(source.into()))?;
        let staging = self.staging_path();
        fs::write(&staging, contents).map_err(io_error)?;
        fs::rename(&staging, &self.path).map_err(io_error)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        let _ = self.entries.insert(key.to_owned(), value);
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_overwrites_values() {
        let mut store = MemoryStore::new();
        store.set("dailyWon", "false".to_owned()).expect("memory write");
        store.set("dailyWon", "true".to_owned()).expect("memory write");
        assert_eq!(store.get("dailyWon").as_deref(), Some("true"));
        assert_eq!(store.len(), 1);
        assert!(store.get("missing").is_none());
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("progress.json");

        let mut store = FileStore::open(&path).expect("open missing file");
        store
            .set("unlockedLevels", "[0,1]".to_owned())
            .expect("write store");

        let reopened = FileStore::open(&path).expect("reopen store");
        assert_eq!(reopened.get("unlockedLevels").as_deref(), Some("[0,1]"));

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).expect("read file")).expect("json");
        assert_eq!(raw["unlockedLevels"], "[0,1]");
    }

    #[test]
    fn truncated_file_falls_back_to_an_empty_store() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("progress.json");
        fs::write(&path, r#"{"unlockedLevels": "[0,1]", "dailyWo"#).expect("seed file");

        let mut store = FileStore::open(&path).expect("truncated store must still open");
        assert!(store.get("unlockedLevels").is_none());

        store
            .set("unlockedLevels", "[0]".to_owned())
            .expect("rewrite store");
        let reopened = FileStore::open(&path).expect("reopen store");
        assert_eq!(reopened.get("unlockedLevels").as_deref(), Some("[0]"));
    }

    #[test]
    fn non_object_contents_fall_back_to_an_empty_store() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("progress.json");
        fs::write(&path, "[1, 2, 3]").expect("seed file");

        let store = FileStore::open(&path).expect("array contents must still open");
        assert!(store.get("unlockedLevels").is_none());
    }

    #[test]
    fn writes_leave_no_staging_file_behind() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("progress.json");

        let mut store = FileStore::open(&path).expect("open missing file");
        store.set("dailyWon", "true".to_owned()).expect("write store");

        let names: Vec<_> = fs::read_dir(dir.path())
            .expect("list dir")
            .map(|entry| entry.expect("dir entry").file_name())
            .collect();
        assert_eq!(names, vec![OsString::from("progress.json")]);
    }
}
