//! Draft Persistence
//!
//! One JSON record under a fixed key. Writes always replace the whole draft.

use std::sync::{Arc, Mutex};

use thiserror::Error;
use tracing::{debug, warn};

use super::Draft;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("failed to encode draft: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to write draft: {0}")]
    Write(String),
}

/// Backend holding the serialized draft
pub trait DraftStorage {
    /// Raw persisted payload, if any
    fn read(&self) -> Option<String>;

    /// Replace the persisted payload
    fn write(&self, payload: &str) -> Result<(), StorageError>;

    /// Remove the persisted payload
    fn remove(&self);
}

/// `window.localStorage` under a fixed key
#[derive(Debug, Clone)]
pub struct BrowserStorage {
    key: String,
}

impl BrowserStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl DraftStorage for BrowserStorage {
    fn read(&self) -> Option<String> {
        Self::storage()?.get_item(&self.key).ok().flatten()
    }

    fn write(&self, payload: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(&self.key, payload)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }

    fn remove(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(&self.key);
        }
    }
}

/// Process-local backend. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_payload(payload: &str) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(payload.to_string()))),
        }
    }
}

impl DraftStorage for MemoryStorage {
    fn read(&self) -> Option<String> {
        self.slot.lock().ok()?.clone()
    }

    fn write(&self, payload: &str) -> Result<(), StorageError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|e| StorageError::Write(e.to_string()))?;
        *slot = Some(payload.to_string());
        Ok(())
    }

    fn remove(&self) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
    }
}

/// Load/save/clear for the single draft record
#[derive(Debug, Clone)]
pub struct DraftStore<S> {
    backend: S,
}

impl<S: DraftStorage> DraftStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Persisted draft, or an empty one when nothing readable is stored
    pub fn load(&self) -> Draft {
        let Some(raw) = self.backend.read() else {
            return Draft::default();
        };
        match serde_json::from_str(&raw) {
            Ok(draft) => draft,
            Err(e) => {
                warn!(error = %e, "discarding unreadable draft");
                Draft::default()
            }
        }
    }

    pub fn save(&self, draft: &Draft) -> Result<(), StorageError> {
        let payload = serde_json::to_string(draft)?;
        self.backend.write(&payload)?;
        debug!(bytes = payload.len(), "draft saved");
        Ok(())
    }

    pub fn clear(&self) {
        self.backend.remove();
        debug!("draft cleared");
    }
}
