//! Durable-storage contract for the entity store.
//!
//! Persistence is an external, synchronous side effect triggered by the
//! [`crate::App`] facade after every mutation. A failed save never
//! invalidates the in-memory store.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::{debug, warn};

use crate::errors::ServiceError;
use crate::store::Store;

/// Load/save contract for the full store document.
pub trait StatePersister {
    /// Returns the last-saved store, or `None` when nothing usable exists.
    fn load(&self) -> Result<Option<Store>, ServiceError>;

    /// Durably writes the full current store.
    fn save(&self, store: &Store) -> Result<(), ServiceError>;
}

/// File-backed persister storing the document as JSON.
///
/// An absent file loads as `None`; a corrupt file is logged and also loads
/// as `None` so the caller falls back to a fresh store rather than seeing
/// partial data.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl StatePersister for JsonFileStore {
    fn load(&self) -> Result<Option<Store>, ServiceError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no data file; starting fresh");
                return Ok(None);
            }
            Err(e) => {
                return Err(ServiceError::PersistenceError(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        match serde_json::from_str::<Store>(&raw) {
            Ok(store) => Ok(Some(store)),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "data file is corrupt; falling back to a fresh store");
                Ok(None)
            }
        }
    }

    fn save(&self, store: &Store) -> Result<(), ServiceError> {
        let json = serde_json::to_string(store)?;
        fs::write(&self.path, json).map_err(|e| {
            ServiceError::PersistenceError(format!(
                "Failed to write {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

/// In-memory persister for tests and demos.
#[derive(Default)]
pub struct InMemoryStore {
    saved: Mutex<Option<Store>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StatePersister for InMemoryStore {
    fn load(&self) -> Result<Option<Store>, ServiceError> {
        Ok(self.saved.lock().ok().and_then(|guard| guard.clone()))
    }

    fn save(&self, store: &Store) -> Result<(), ServiceError> {
        if let Ok(mut guard) = self.saved.lock() {
            *guard = Some(store.clone());
        }
        Ok(())
    }
}
