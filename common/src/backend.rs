use crate::state::BusinessState;

/// Requests the portal would send to a business API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendAction {
    /// Push the online/offline flag.
    UpdateStatus { is_online: bool },
    /// Pull the authoritative business state.
    FetchState,
}

/// Sink for backend requests.
pub trait PortalBackend {
    fn send(&mut self, action: BackendAction);

    /// Latest state from the server, if any has arrived.
    fn fetched_state(&mut self) -> Option<BusinessState> {
        None
    }
}

/// No server is wired up yet: actions are logged and dropped.
#[derive(Debug, Clone, Default)]
pub struct OfflineBackend {
    sent: Vec<BackendAction>,
}

impl OfflineBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Actions received so far, oldest first.
    pub fn sent(&self) -> &[BackendAction] {
        &self.sent
    }
}

impl PortalBackend for OfflineBackend {
    fn send(&mut self, action: BackendAction) {
        tracing::debug!("Backend action (offline mode): {:?}", action);
        self.sent.push(action);
    }
}
