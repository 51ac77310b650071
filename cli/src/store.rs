//! Session storage backed by a small JSON file.
//!
//! The file holds a flat string-to-string map, mirroring the browser's
//! `localStorage` shape so the same keys work in both hosts. A missing file
//! reads as an empty map.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use signin::{SessionStore, StorageError};

#[derive(Debug, thiserror::Error)]
pub enum SessionFileError {
    #[error("{}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("{}: not a session file: {source}", path.display())]
    Parse { path: PathBuf, source: serde_json::Error },
}

#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every stored item.
    ///
    /// # Errors
    ///
    /// Fails if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<BTreeMap<String, String>, SessionFileError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => return Err(self.io_error(source)),
        };
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&raw).map_err(|source| SessionFileError::Parse { path: self.path.clone(), source })
    }

    /// # Errors
    ///
    /// See [`FileSessionStore::load`].
    pub fn get_item(&self, key: &str) -> Result<Option<String>, SessionFileError> {
        Ok(self.load()?.remove(key))
    }

    /// Delete the session file. Returns whether there was one to delete.
    ///
    /// # Errors
    ///
    /// Fails if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<bool, SessionFileError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(self.io_error(source)),
        }
    }

    fn save(&self, items: &BTreeMap<String, String>) -> Result<(), SessionFileError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }
        let rendered = serde_json::to_string_pretty(items)
            .map_err(|source| SessionFileError::Parse { path: self.path.clone(), source })?;

        let mut file = open_private(&self.path).map_err(|source| self.io_error(source))?;
        file.write_all(rendered.as_bytes()).map_err(|source| self.io_error(source))?;
        file.write_all(b"\n").map_err(|source| self.io_error(source))
    }

    fn io_error(&self, source: io::Error) -> SessionFileError {
        SessionFileError::Io { path: self.path.clone(), source }
    }
}

impl SessionStore for FileSessionStore {
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.load().map_err(|e| StorageError(e.to_string()))?;
        items.insert(key.to_owned(), value.to_owned());
        self.save(&items).map_err(|e| StorageError(e.to_string()))?;
        tracing::debug!(key, path = %self.path.display(), "session item written");
        Ok(())
    }
}

// The file holds a bearer token; keep it owner-only where the platform allows.
#[cfg(unix)]
fn open_private(path: &Path) -> io::Result<fs::File> {
    use std::os::unix::fs::OpenOptionsExt;

    fs::OpenOptions::new().write(true).create(true).truncate(true).mode(0o600).open(path)
}

#[cfg(not(unix))]
fn open_private(path: &Path) -> io::Result<fs::File> {
    fs::OpenOptions::new().write(true).create(true).truncate(true).open(path)
}
