use portal_common::persist::{PersistError, StateStore};

/// [`StateStore`] backed by `window.localStorage`.
///
/// Outside the browser the slot lives in memory for the session.
#[derive(Default)]
pub struct BrowserStore {
    #[cfg(not(target_family = "wasm"))]
    memory: portal_common::persist::MemoryStore,
}

impl BrowserStore {
    pub fn open() -> Self {
        Self::default()
    }
}

#[cfg(target_family = "wasm")]
fn local_storage() -> Result<web_sys::Storage, PersistError> {
    let window = web_sys::window().ok_or_else(|| PersistError::Unavailable("no window".into()))?;
    window
        .local_storage()
        .map_err(|e| PersistError::Unavailable(format!("{e:?}")))?
        .ok_or_else(|| PersistError::Unavailable("localStorage disabled".into()))
}

#[cfg(target_family = "wasm")]
impl StateStore for BrowserStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, PersistError> {
        local_storage()?
            .get_item(key)
            .map_err(|e| PersistError::Read {
                key: key.into(),
                reason: format!("{e:?}"),
            })
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), PersistError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| PersistError::Write {
                key: key.into(),
                reason: format!("{e:?}"),
            })
    }
}

#[cfg(not(target_family = "wasm"))]
impl StateStore for BrowserStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, PersistError> {
        self.memory.get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), PersistError> {
        self.memory.set_item(key, value)
    }
}

/// Path of the page's current location, e.g. `/portal/messages.html`.
pub fn current_path() -> String {
    #[cfg(target_family = "wasm")]
    {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default()
    }
    #[cfg(not(target_family = "wasm"))]
    {
        String::from("/")
    }
}
