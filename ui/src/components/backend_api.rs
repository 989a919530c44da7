use dioxus::prelude::*;

use portal_common::backend::{BackendAction, PortalBackend};

/// Forwards backend actions to the coroutine started by [`use_backend_coroutine`].
pub struct CoroutineBackend {
    handle: Coroutine<BackendAction>,
}

impl CoroutineBackend {
    pub fn new(handle: Coroutine<BackendAction>) -> Self {
        Self { handle }
    }
}

impl PortalBackend for CoroutineBackend {
    fn send(&mut self, action: BackendAction) {
        self.handle.send(action);
    }
}

/// Start the backend coroutine.
///
/// There is no business API yet, so this is a sink that logs each action.
pub fn use_backend_coroutine() -> Coroutine<BackendAction> {
    use_coroutine(|mut rx: UnboundedReceiver<BackendAction>| async move {
        use futures::StreamExt;
        while let Some(action) = rx.next().await {
            match action {
                BackendAction::UpdateStatus { is_online } => {
                    tracing::debug!("Updating backend status (offline mode): {is_online}");
                }
                BackendAction::FetchState => {
                    tracing::debug!("Fetching business state (offline mode)");
                }
            }
        }
    })
}
