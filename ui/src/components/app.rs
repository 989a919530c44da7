use dioxus::prelude::*;
use rand::Rng;

use portal_common::config::PortalConfig;
use portal_common::controller::PortalController;
use portal_common::greeting::local_hour;

use super::backend_api::{use_backend_coroutine, CoroutineBackend};
use super::local_storage::{current_path, BrowserStore};
use super::message_list::MessageList;
use super::nav_bar::NavBar;
use super::portal_state::{sleep, use_portal, Portal};
use super::stats_panel::StatsPanel;
use super::status_toggle::StatusToggle;
use super::toast_view::ToastView;

#[component]
pub fn App() -> Element {
    let backend = use_backend_coroutine();
    use_context_provider(|| {
        let mut portal: Portal = PortalController::new(
            PortalConfig::from_env(),
            BrowserStore::open(),
            CoroutineBackend::new(backend),
        );
        portal.initialize(local_hour());
        portal.set_active_navigation_by_path(&current_path());
        Signal::new(portal)
    });
    use_greeting_refresh();
    use_view_simulation();

    rsx! { PortalLayout {} }
}

#[component]
fn PortalLayout() -> Element {
    let portal = use_portal();
    let greeting = portal.read().greeting();

    rsx! {
        div { class: "portal-app",
            header { class: "app-header",
                h1 { id: "greeting", "{greeting}" }
                StatusToggle {}
            }
            main {
                StatsPanel {}
                MessageList {}
            }
            NavBar {}
            ToastView {}
        }
    }
}

/// Re-evaluate the greeting on the configured interval.
fn use_greeting_refresh() {
    let mut portal = use_portal();
    let _refresh = use_coroutine(move |_rx: UnboundedReceiver<()>| async move {
        let interval = portal.peek().config().greeting_refresh;
        loop {
            sleep(interval).await;
            portal.write().refresh_greeting(local_hour());
        }
    });
}

/// Demo ticker that bumps the view counter, enabled by `PORTAL_SIMULATE_UPDATES`.
fn use_view_simulation() {
    let mut portal = use_portal();
    let _ticker = use_coroutine(move |_rx: UnboundedReceiver<u32>| async move {
        let (enabled, interval) = {
            let p = portal.peek();
            (p.config().simulate_updates, p.config().simulate_interval)
        };
        if !enabled {
            return;
        }
        tracing::info!("Simulating view updates every {}s", interval.as_secs());
        loop {
            sleep(interval).await;
            let views = rand::thread_rng().gen_range(0..5);
            portal.write().record_views(views);
        }
    });
}
