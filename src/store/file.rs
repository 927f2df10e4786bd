use super::backend::{StateStore, StoreKey};
use crate::error::StoreError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Persists each entry as `<key>.json` inside a directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// The directory is created lazily on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: StoreKey) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl StateStore for JsonFileStore {
    fn read(&self, key: StoreKey) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Read {
                key: key.to_string(),
                message: format!("'{}': {}", path.display(), e),
            }),
        }
    }

    /// Writes through a temp file and a rename, so readers never see a
    /// half-written entry.
    fn write(&mut self, key: StoreKey, value: &str) -> Result<(), StoreError> {
        let write_err = |message: String| StoreError::Write {
            key: key.to_string(),
            message,
        };
        fs::create_dir_all(&self.dir).map_err(|e| {
            write_err(format!(
                "Could not create directory '{}': {}",
                self.dir.display(),
                e
            ))
        })?;
        let tmp = self.dir.join(format!(".{}.json.tmp", key));
        let path = self.path_for(key);
        fs::write(&tmp, value)
            .map_err(|e| write_err(format!("Could not write '{}': {}", tmp.display(), e)))?;
        fs::rename(&tmp, &path)
            .map_err(|e| write_err(format!("Could not replace '{}': {}", path.display(), e)))?;
        log::info!("Persisted '{}' to '{}'", key, path.display());
        Ok(())
    }
}
