//! Persistence slot implementations.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::BlobError;
use crate::traits::BlobStore;

/// In-process slot. Contents are lost when dropped.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: RefCell<HashMap<String, String>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a key with raw contents, bypassing any serialization.
    pub fn with_blob(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.blobs.borrow_mut().insert(key.into(), value.into());
        self
    }

    /// Raw contents currently stored under `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.blobs.borrow().get(key).cloned()
    }
}

impl BlobStore for MemoryBlobStore {
    fn read_blob(&self, key: &str) -> Result<Option<String>, BlobError> {
        Ok(self.blobs.borrow().get(key).cloned())
    }

    fn write_blob(&self, key: &str, value: &str) -> Result<(), BlobError> {
        self.blobs
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One JSON file per key under a data directory.
///
/// Writes go to a sibling temp file which is then renamed over the target,
/// so readers see either the old or the new blob.
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    data_dir: PathBuf,
}

impl FileBlobStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, BlobError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
            && !key.starts_with('.');
        if !valid {
            return Err(BlobError::InvalidKey(key.to_string()));
        }
        Ok(self.data_dir.join(format!("{key}.json")))
    }
}

impl BlobStore for FileBlobStore {
    fn read_blob(&self, key: &str) -> Result<Option<String>, BlobError> {
        let path = self.path_for(key)?;
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(BlobError::Io {
                    key: key.to_string(),
                    source,
                });
            }
        };

        debug!(path = %path.display(), bytes = bytes.len(), "read blob");
        let contents = String::from_utf8(bytes).map_err(|source| BlobError::NotUtf8 {
            key: key.to_string(),
            source,
        })?;
        Ok(Some(contents))
    }

    fn write_blob(&self, key: &str, value: &str) -> Result<(), BlobError> {
        let path = self.path_for(key)?;
        let io_err = |source: io::Error| BlobError::Io {
            key: key.to_string(),
            source,
        };

        fs::create_dir_all(&self.data_dir).map_err(io_err)?;

        let tmp_path = path.with_extension("json.tmp");
        let written = fs::File::create(&tmp_path).and_then(|mut file| {
            file.write_all(value.as_bytes())?;
            file.sync_all()
        });
        if let Err(err) = written.and_then(|()| fs::rename(&tmp_path, &path)) {
            let _ = fs::remove_file(&tmp_path);
            return Err(io_err(err));
        }

        debug!(path = %path.display(), bytes = value.len(), "wrote blob");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_absent_then_present() {
        let store = MemoryBlobStore::new();
        assert_eq!(store.read_blob("k").unwrap(), None);
        store.write_blob("k", "[]").unwrap();
        assert_eq!(store.read_blob("k").unwrap().as_deref(), Some("[]"));
        store.write_blob("k", "[1]").unwrap();
        assert_eq!(store.raw("k").as_deref(), Some("[1]"));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileBlobStore::new(dir.path().join("nested"));

        assert_eq!(store.read_blob("myMapLocations").unwrap(), None);
        store.write_blob("myMapLocations", "[]").unwrap();
        store.write_blob("myMapLocations", "[{}]").unwrap();

        assert_eq!(
            store.read_blob("myMapLocations").unwrap().as_deref(),
            Some("[{}]")
        );
        assert!(!dir.path().join("nested/myMapLocations.json.tmp").exists());
    }

    #[test]
    fn test_file_non_utf8_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("myMapLocations.json"), [0xff, 0xfe, 0x5b]).unwrap();
        let store = FileBlobStore::new(dir.path());

        assert!(matches!(
            store.read_blob("myMapLocations"),
            Err(BlobError::NotUtf8 { .. })
        ));
    }

    #[test]
    fn test_failed_write_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        // A directory at the target path makes the final rename fail.
        fs::create_dir(dir.path().join("myMapLocations.json")).unwrap();
        fs::write(dir.path().join("myMapLocations.json").join("keep"), "x").unwrap();
        let store = FileBlobStore::new(dir.path());

        let err = store.write_blob("myMapLocations", "[]").unwrap_err();

        assert!(matches!(err, BlobError::Io { .. }));
        assert!(!dir.path().join("myMapLocations.json.tmp").exists());
    }

    #[test]
    fn test_file_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileBlobStore::new(dir.path());

        for key in ["", "../escape", "a/b", ".hidden"] {
            assert!(
                matches!(store.read_blob(key), Err(BlobError::InvalidKey(_))),
                "key {key:?} should be rejected"
            );
        }
    }
}
