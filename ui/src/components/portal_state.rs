use std::time::Duration;

use dioxus::prelude::*;

use portal_common::controller::PortalController;

use super::backend_api::CoroutineBackend;
use super::local_storage::BrowserStore;

/// The page controller as held by the UI.
pub type Portal = PortalController<BrowserStore, CoroutineBackend>;

pub fn use_portal() -> Signal<Portal> {
    use_context::<Signal<Portal>>()
}

/// Run a controller operation from an event handler and schedule dismissal
/// of whatever toast it showed.
pub fn dispatch<R>(mut portal: Signal<Portal>, op: impl FnOnce(&mut Portal) -> R) -> R {
    let (result, pending) = {
        let mut p = portal.write();
        let result = op(&mut *p);
        (result, p.pending_dismissal())
    };
    if let Some((generation, duration)) = pending {
        spawn(async move {
            sleep(duration).await;
            portal.write().dismiss_toast(generation);
        });
    }
    result
}

pub async fn sleep(duration: Duration) {
    #[cfg(target_family = "wasm")]
    gloo_timers::future::TimeoutFuture::new(
        u32::try_from(duration.as_millis()).unwrap_or(u32::MAX),
    )
    .await;
    // Only the web target is built; native builds just type-check.
    #[cfg(not(target_family = "wasm"))]
    {
        let _ = duration;
        std::future::pending::<()>().await;
    }
}
