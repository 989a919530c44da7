use dioxus::prelude::*;

use super::portal_state::use_portal;

#[component]
pub fn StatsPanel() -> Element {
    let portal = use_portal();
    let stats = portal.read().state().stats.clone();

    rsx! {
        div { class: "stats-grid",
            div { class: "stat-card",
                span { id: "viewsCount", class: "stat-value", "{stats.views}" }
                span { class: "stat-label", "Profile views" }
            }
            div { class: "stat-card",
                span { id: "messagesCount", class: "stat-value", "{stats.messages}" }
                span { class: "stat-label", "Messages" }
                if stats.unread_messages > 0 {
                    span { class: "stat-badge", "{stats.unread_messages} unread" }
                }
            }
        }
    }
}
