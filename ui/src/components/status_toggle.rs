use dioxus::prelude::*;

use super::portal_state::{dispatch, use_portal};

/// Online/offline switch with its status line.
#[component]
pub fn StatusToggle() -> Element {
    let portal = use_portal();
    let p = portal.read();
    let is_online = p.state().is_online;
    let status = p.status_message();
    drop(p);

    let toggle_class = if is_online { "toggle" } else { "toggle off" };

    rsx! {
        div { class: "status-card",
            div {
                id: "businessToggle",
                class: "{toggle_class}",
                onclick: move |_| {
                    dispatch(portal, |p| p.toggle_status());
                },
                div { class: "toggle-knob" }
            }
            p { id: "statusMessage", class: "status-message", "{status}" }
        }
    }
}
