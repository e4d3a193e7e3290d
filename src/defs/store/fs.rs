use super::DataStore;
use crate::error::{DefsError, Result};
use crate::model::Entry;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use tracing::debug;

const EMPTY_STORE: &[u8] = b"[]";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[cfg(any(test, feature = "test_utils"))]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Creates the store file holding an empty list, unless it already
    /// exists. Uses an exclusive create so a concurrent bootstrap never
    /// truncates a file someone else just wrote.
    fn ensure_exists(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(DefsError::Io)?;
        }

        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(mut file) => {
                file.write_all(EMPTY_STORE).map_err(DefsError::Io)?;
                debug!(path = %self.path.display(), "created empty store");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
            Err(e) => Err(DefsError::Io(e)),
        }
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Entry>> {
        self.ensure_exists()?;

        let content = fs::read_to_string(&self.path).map_err(DefsError::Io)?;
        let entries: Vec<Entry> =
            serde_json::from_str(&content).map_err(|source| DefsError::CorruptStore {
                path: self.path.clone(),
                source,
            })?;

        debug!(path = %self.path.display(), count = entries.len(), "loaded store");
        Ok(entries)
    }

    fn save(&mut self, entries: &[Entry]) -> Result<()> {
        let content = serde_json::to_string(entries).map_err(DefsError::Serialization)?;
        fs::write(&self.path, content).map_err(DefsError::Io)?;
        debug!(path = %self.path.display(), count = entries.len(), "saved store");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileStore {
        FileStore::new(dir.path().join("definitions.json"))
    }

    #[test]
    fn load_bootstraps_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(!store.path().exists());

        let entries = store.load().unwrap();
        assert!(entries.is_empty());
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "[]");
    }

    #[test]
    fn load_creates_missing_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested/deeper/definitions.json"));
        assert!(store.load().unwrap().is_empty());
        assert!(store.path().exists());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        let entries = vec![
            Entry::new("NASA", "National Aeronautics and Space Administration"),
            Entry::new("CLI", "Command Line Interface").with_details(
                "A text interface",
                "ls -la",
                "",
            ),
            Entry::new("", ""),
        ];

        store.save(&entries).unwrap();
        assert_eq!(store.load().unwrap(), entries);
    }

    #[test]
    fn save_preserves_order_and_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        let entries = vec![
            Entry::new("ABC", "second meaning"),
            Entry::new("ABC", "first meaning"),
        ];
        store.save(&entries).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded[0].expansion, "second meaning");
        assert_eq!(loaded[1].expansion, "first meaning");
    }

    #[test]
    fn unknown_fields_survive_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        let raw = json!([{"term": "GUI", "expansion": "Graphical User Interface", "seen": 3}]);
        fs::write(store.path(), raw.to_string()).unwrap();

        let entries = store.load().unwrap();
        store.save(&entries).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(written, raw);
    }

    #[test]
    fn legacy_headword_key_is_written_back() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        let raw = json!([{"definitions": "IETF", "expansion": "x"}]);
        fs::write(store.path(), raw.to_string()).unwrap();

        let mut entries = store.load().unwrap();
        assert_eq!(entries[0].term, "IETF");
        entries.push(Entry::new("NASA", "y"));
        store.save(&entries).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(
            written,
            json!([
                {"definitions": "IETF", "expansion": "x"},
                {"term": "NASA", "expansion": "y"},
            ])
        );
    }

    #[test]
    fn null_optional_field_survives_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        let raw = json!([{"term": "A", "expansion": "x", "description": null}]);
        fs::write(store.path(), raw.to_string()).unwrap();

        let entries = store.load().unwrap();
        assert_eq!(entries[0].description, None);
        store.save(&entries).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(written, raw);
    }

    #[test]
    fn malformed_document_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "[{\"term\": ").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, DefsError::CorruptStore { .. }));
    }

    #[test]
    fn non_array_document_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{\"term\": \"ABC\"}").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, DefsError::CorruptStore { .. }));
    }

    #[test]
    fn existing_file_is_not_overwritten_by_bootstrap() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"[{"term":"ABC","expansion":"x"}]"#).unwrap();

        assert_eq!(store.load().unwrap().len(), 1);
    }
}
