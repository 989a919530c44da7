use dioxus::prelude::*;

use super::portal_state::use_portal;

#[component]
pub fn ToastView() -> Element {
    let portal = use_portal();
    let message = portal
        .read()
        .toast()
        .current()
        .map(|t| t.message.clone());
    let visible = message.is_some();
    let text = message.unwrap_or_default();

    rsx! {
        div {
            id: "toast",
            class: if visible { "toast show" } else { "toast" },
            "{text}"
        }
    }
}
