//! JSON persistence with atomic writes and tolerant loading.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{info, warn};

/// Errors while saving or loading a persisted collection.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("corrupt data file {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Writes `value` as pretty-printed JSON to `path` atomically.
///
/// Missing parent directories are created. The data is written to a
/// temporary file in the same directory and renamed over `path`, so a
/// failed save never leaves a half-written file behind.
///
/// # Errors
///
/// Returns `PersistError::Io` if the directory or temporary file cannot be
/// created or written, and `PersistError::AtomicWrite` if the final rename
/// fails.
pub fn save<T: Serialize>(path: &Path, value: &T) -> Result<(), PersistError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(|e| PersistError::Io {
        path: parent.into(),
        source: e,
    })?;

    let json = serde_json::to_string_pretty(value).map_err(|e| PersistError::Encode {
        path: path.into(),
        source: e,
    })?;

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| PersistError::Io {
        path: path.into(),
        source: e,
    })?;
    temp.write_all(json.as_bytes())
        .and_then(|()| temp.write_all(b"\n"))
        .map_err(|e| PersistError::Io {
            path: path.into(),
            source: e,
        })?;

    temp.persist(path).map_err(|e| PersistError::AtomicWrite {
        path: path.into(),
        source: e.error,
    })?;

    info!(path = %path.display(), "saved");
    Ok(())
}

/// Reads a value previously written by [`save`].
///
/// Returns `Ok(None)` when the file does not exist.
///
/// # Errors
///
/// Returns `PersistError::Corrupt` if the content cannot be decoded, and
/// `PersistError::Io` for any other read failure.
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, PersistError> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(PersistError::Io {
                path: path.into(),
                source: e,
            });
        }
    };

    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|e| PersistError::Corrupt {
            path: path.into(),
            source: e,
        })
}

/// Loads a value, falling back to `T::default()` on any failure.
///
/// A missing file is the normal first-run case. Any other failure means the
/// previous contents are unusable; the error is logged and an empty value is
/// returned, so the next save replaces the damaged file.
pub fn load_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    match load(path) {
        Ok(Some(value)) => {
            info!(path = %path.display(), "restored");
            value
        }
        Ok(None) => {
            info!(path = %path.display(), "file not found, starting empty");
            T::default()
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                error = %err,
                "could not load data, starting empty; existing contents will be overwritten on next save"
            );
            T::default()
        }
    }
}
