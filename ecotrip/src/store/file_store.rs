use ecotrip_core::persistence::{KeyValueStore, PersistenceError, StorageKey};
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

/// key-value store keeping each blob in `<directory>/<key>.json`. writes go
/// to a sibling temporary file which is then renamed over the target, so a
/// reader sees either the old blob or the new one.
#[derive(Clone, Debug)]
pub struct FileStore {
    directory: PathBuf,
}

impl FileStore {
    /// opens a store in `directory`, creating it if missing
    pub fn new(directory: &Path) -> Result<FileStore, PersistenceError> {
        fs::create_dir_all(directory).map_err(|e| {
            PersistenceError::Unavailable(format!(
                "cannot create data directory '{}': {e}",
                directory.display()
            ))
        })?;
        Ok(FileStore {
            directory: directory.to_path_buf(),
        })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn path(&self, key: StorageKey) -> PathBuf {
        self.directory.join(format!("{}.json", key.as_str()))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: StorageKey) -> Result<Option<String>, PersistenceError> {
        match fs::read_to_string(self.path(key)) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PersistenceError::ReadError {
                key,
                message: e.to_string(),
            }),
        }
    }

    fn set(&self, key: StorageKey, blob: &str) -> Result<(), PersistenceError> {
        let target = self.path(key);
        let tmp = target.with_extension("json.tmp");
        let write_error = |e: std::io::Error| PersistenceError::WriteError {
            key,
            message: e.to_string(),
        };
        fs::write(&tmp, blob).map_err(write_error)?;
        fs::rename(&tmp, &target).map_err(write_error)
    }

    fn remove(&self, key: StorageKey) -> Result<(), PersistenceError> {
        match fs::remove_file(self.path(key)) {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PersistenceError::WriteError {
                key,
                message: e.to_string(),
            }),
        }
    }
}
