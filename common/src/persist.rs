//! Persistence of [`BusinessState`] to a key/value string store.
//!
//! The browser build backs [`StateStore`] with `window.localStorage`; native
//! code and tests use [`MemoryStore`].

use std::collections::HashMap;

use crate::state::BusinessState;

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read {key}: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to decode saved state: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("failed to encode state: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("saved state is invalid: {0}")]
    Invalid(String),
}

/// String key/value storage with the same shape as the Web Storage API.
pub trait StateStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, PersistError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), PersistError>;
}

/// In-process store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail, like a full or locked-down localStorage.
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    pub fn with_item(mut self, key: &str, value: &str) -> Self {
        self.items.insert(key.into(), value.into());
        self
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }
}

impl StateStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, PersistError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), PersistError> {
        if self.read_only {
            return Err(PersistError::Write {
                key: key.into(),
                reason: "quota exceeded".into(),
            });
        }
        self.items.insert(key.into(), value.into());
        Ok(())
    }
}

/// Decode and validate a saved state blob.
pub fn decode_state(raw: &str) -> Result<BusinessState, PersistError> {
    let state: BusinessState = serde_json::from_str(raw).map_err(PersistError::Decode)?;
    state.validate().map_err(PersistError::Invalid)?;
    Ok(state)
}

pub fn encode_state(state: &BusinessState) -> Result<String, PersistError> {
    serde_json::to_string(state).map_err(PersistError::Encode)
}

/// Load the saved state under `key`. `Ok(None)` means nothing was saved.
pub fn load_state<S: StateStore + ?Sized>(
    store: &S,
    key: &str,
) -> Result<Option<BusinessState>, PersistError> {
    match store.get_item(key)? {
        Some(raw) if !raw.is_empty() => decode_state(&raw).map(Some),
        _ => Ok(None),
    }
}

pub fn save_state<S: StateStore + ?Sized>(
    store: &mut S,
    key: &str,
    state: &BusinessState,
) -> Result<(), PersistError> {
    let raw = encode_state(state)?;
    store.set_item(key, &raw)
}
