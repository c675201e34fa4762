//! File-backed session storage adapter.
//!
//! Each key maps to `<key>.json` inside one directory opened through
//! `cap_std`, so the adapter cannot touch paths outside it.

use std::io;
use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use tracing::debug;

use crate::domain::ports::{SessionStorage, SessionStorageError};

/// Directory-scoped key/value store.
#[derive(Debug)]
pub struct FileSessionStorage {
    directory: Dir,
    root: PathBuf,
}

impl FileSessionStorage {
    /// Open `root`, creating it when missing.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the directory cannot be created or opened.
    pub fn open(root: impl AsRef<Path>) -> io::Result<Self> {
        let root = root.as_ref();
        Dir::create_ambient_dir_all(root, ambient_authority())?;
        let directory = Dir::open_ambient_dir(root, ambient_authority())?;
        debug!(path = %root.display(), "opened session storage directory");
        Ok(Self {
            directory,
            root: root.to_path_buf(),
        })
    }

    /// Directory backing this store.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn file_name(key: &str) -> Option<PathBuf> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.'))
        && !key.starts_with('.');
    valid.then(|| PathBuf::from(format!("{key}.json")))
}

impl SessionStorage for FileSessionStorage {
    fn read(&self, key: &str) -> Result<Option<String>, SessionStorageError> {
        let path = file_name(key)
            .ok_or_else(|| SessionStorageError::read(format!("invalid storage key {key:?}")))?;
        match self.directory.read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(SessionStorageError::read(format!(
                "read '{}': {error}",
                path.display()
            ))),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SessionStorageError> {
        let path = file_name(key)
            .ok_or_else(|| SessionStorageError::write(format!("invalid storage key {key:?}")))?;
        self.directory.write(&path, value).map_err(|error| {
            SessionStorageError::write(format!("write '{}': {error}", path.display()))
        })
    }

    fn remove(&self, key: &str) -> Result<(), SessionStorageError> {
        let path = file_name(key)
            .ok_or_else(|| SessionStorageError::write(format!("invalid storage key {key:?}")))?;
        match self.directory.remove_file(&path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(SessionStorageError::write(format!(
                "remove '{}': {error}",
                path.display()
            ))),
        }
    }
}
