use dioxus::prelude::*;

use super::portal_state::{dispatch, use_portal};

/// Recent customer messages, newest first as stored.
#[component]
pub fn MessageList() -> Element {
    let portal = use_portal();
    let messages = portal.read().state().messages.clone();

    rsx! {
        div { class: "dashboard-section",
            h3 { "Recent Messages" }
            if messages.is_empty() {
                p { class: "empty-state", "No messages yet." }
            }
            for (index, message) in messages.into_iter().enumerate() {
                div {
                    key: "{index}",
                    class: if message.unread { "message-item unread" } else { "message-item" },
                    onclick: move |_| {
                        dispatch(portal, |p| p.open_message(index));
                    },
                    div { class: "message-header",
                        span { class: "message-name", "{message.name}" }
                        span { class: "message-time", "{message.time}" }
                    }
                    p { class: "message-preview", "{message.preview}" }
                }
            }
        }
    }
}
