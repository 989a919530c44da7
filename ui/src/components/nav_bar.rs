use dioxus::prelude::*;

use portal_common::nav::Page;

use super::portal_state::{dispatch, use_portal};

#[component]
pub fn NavBar() -> Element {
    let portal = use_portal();
    let p = portal.read();
    let active: Vec<bool> = Page::all().iter().map(|page| p.is_active(page.key())).collect();
    drop(p);

    rsx! {
        nav { class: "bottom-nav",
            for (page, is_active) in Page::all().iter().copied().zip(active) {
                div {
                    key: "{page.key()}",
                    class: if is_active { "nav-item active" } else { "nav-item" },
                    "data-page": "{page.key()}",
                    onclick: move |_| {
                        let target = dispatch(portal, |p| p.set_active_navigation(page.key(), page.label()));
                        tracing::debug!("Resolved navigation target {target}");
                    },
                    span { class: "nav-label", "{page.label()}" }
                }
            }
        }
    }
}
