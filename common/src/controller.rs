//! The portal page controller.
//!
//! Owns the [`BusinessState`] for the lifetime of a page session along with the
//! storage it is persisted to, the backend it reports to, and the view-only
//! bits (greeting, active navigation entry, toast). The UI renders from the
//! accessors here and routes every user event through one of the operations.

use crate::backend::{BackendAction, PortalBackend};
use crate::config::PortalConfig;
use crate::greeting::Greeting;
use crate::nav::{resolve_target, target_display, Page};
use crate::persist::{load_state, save_state, StateStore};
use crate::state::BusinessState;
use crate::toast::ToastSlot;

pub struct PortalController<S, B> {
    config: PortalConfig,
    state: BusinessState,
    store: S,
    backend: B,
    greeting: Greeting,
    active_nav: Option<String>,
    toast: ToastSlot,
}

impl<S: StateStore, B: PortalBackend> PortalController<S, B> {
    /// A controller on default state. Call [`PortalController::initialize`] before use.
    pub fn new(config: PortalConfig, store: S, backend: B) -> Self {
        Self {
            config,
            state: BusinessState::default(),
            store,
            backend,
            greeting: Greeting::Morning,
            active_nav: None,
            toast: ToastSlot::attached(),
        }
    }

    /// Replace the toast slot, e.g. with [`ToastSlot::detached`] for a page
    /// without a toast element.
    pub fn with_toast_slot(mut self, toast: ToastSlot) -> Self {
        self.toast = toast;
        self
    }

    /// Set the greeting for `hour` and restore any saved state.
    pub fn initialize(&mut self, hour: u32) {
        self.refresh_greeting(hour);
        self.restore();
    }

    pub fn refresh_greeting(&mut self, hour: u32) {
        self.greeting = Greeting::for_hour(hour);
    }

    /// Load saved state, keeping defaults when nothing usable is stored.
    /// Returns `true` if saved state was applied.
    pub fn restore(&mut self) -> bool {
        match load_state(&self.store, &self.config.storage_key) {
            Ok(Some(state)) => {
                if state.unread_in_list() != state.stats.unread_messages {
                    tracing::warn!(
                        "Saved unread count {} differs from {} unread messages in list",
                        state.stats.unread_messages,
                        state.unread_in_list()
                    );
                }
                self.state = state;
                tracing::info!("Restored business state from {}", self.config.storage_key);
                true
            }
            Ok(None) => {
                tracing::debug!("No saved business state, using defaults");
                false
            }
            Err(e) => {
                tracing::error!("Error loading saved state: {e}");
                false
            }
        }
    }

    /// Save the full state. Failures are logged and in-memory state is kept.
    pub fn persist(&mut self) -> bool {
        match save_state(&mut self.store, &self.config.storage_key, &self.state) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Error saving state: {e}");
                false
            }
        }
    }

    /// Flip online/offline, notify, report to the backend and save.
    pub fn toggle_status(&mut self) -> bool {
        let is_online = self.state.toggle_online();
        if is_online {
            self.show_toast("Business is now online");
        } else {
            self.show_toast("Business is now offline");
        }
        self.backend.send(BackendAction::UpdateStatus { is_online });
        self.persist();
        is_online
    }

    /// Mark the navigation entry for `key` active and resolve its target.
    ///
    /// Navigation itself is not performed; the resolved target is returned.
    pub fn set_active_navigation(&mut self, key: &str, label: &str) -> String {
        self.active_nav = Some(key.to_string());
        self.show_toast(format!("Navigating to {label}"));

        let target = resolve_target(key);
        tracing::debug!("Navigating to: {key} ({target})");
        self.show_toast(format!("Opening {}", target_display(&target)));
        target
    }

    /// Mark the entry matching the current location path active, if any.
    pub fn set_active_navigation_by_path(&mut self, path: &str) -> Option<Page> {
        let page = Page::from_path(path);
        self.active_nav = page.map(|p| p.key().to_string());
        page
    }

    /// Notify, then mark the message at `index` read if it was unread.
    pub fn open_message(&mut self, index: usize) -> bool {
        let Some(name) = self.state.messages.get(index).map(|m| m.name.clone()) else {
            tracing::warn!("No message at index {index}");
            return false;
        };
        self.show_toast(format!("Opening message from {name}"));
        let changed = self.state.mark_read(index);
        if changed {
            self.persist();
        }
        changed
    }

    /// Show `message` in the toast slot. Returns the generation to dismiss
    /// after [`PortalConfig::toast_duration`], or `None` if nothing is shown.
    pub fn show_toast(&mut self, message: impl Into<String>) -> Option<u64> {
        self.toast.show(message)
    }

    pub fn dismiss_toast(&mut self, generation: u64) -> bool {
        self.toast.dismiss(generation)
    }

    /// Generation of the visible toast and how long until it should be dismissed.
    pub fn pending_dismissal(&self) -> Option<(u64, std::time::Duration)> {
        self.toast
            .current()
            .map(|t| (t.generation, self.config.toast_duration))
    }

    /// Demo ticker: bump the view counter and save.
    pub fn record_views(&mut self, count: u32) {
        self.state.add_views(count);
        self.persist();
    }

    /// Ask the backend for fresh state and adopt it if one arrives.
    pub fn fetch_state(&mut self) -> bool {
        self.backend.send(BackendAction::FetchState);
        let Some(state) = self.backend.fetched_state() else {
            return false;
        };
        if let Err(e) = state.validate() {
            tracing::error!("Error fetching business state: {e}");
            return false;
        }
        self.state = state;
        self.persist();
        true
    }

    pub fn state(&self) -> &BusinessState {
        &self.state
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    pub fn greeting(&self) -> Greeting {
        self.greeting
    }

    pub fn status_message(&self) -> &'static str {
        self.state.status_message()
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active_nav.as_deref() == Some(key)
    }

    pub fn toast(&self) -> &ToastSlot {
        &self.toast
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::OfflineBackend;
    use crate::persist::MemoryStore;
    use crate::state::{BusinessState, OFFLINE_STATUS, ONLINE_STATUS};

    type Controller = PortalController<MemoryStore, OfflineBackend>;

    fn controller(store: MemoryStore) -> Controller {
        let mut c = PortalController::new(PortalConfig::default(), store, OfflineBackend::new());
        c.initialize(9);
        c
    }

    fn saved(c: &Controller) -> BusinessState {
        let raw = c.store().raw("businessState").expect("state should be saved");
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn initialize_without_saved_state_uses_defaults() {
        let c = controller(MemoryStore::new());
        assert_eq!(c.state(), &BusinessState::default());
        assert_eq!(c.greeting().text(), "Good morning");
        assert!(!c.toast().is_visible());
    }

    #[test]
    fn initialize_merges_saved_online_flag() {
        let store = MemoryStore::new().with_item("businessState", r#"{"isOnline":false}"#);
        let c = controller(store);
        assert!(!c.state().is_online);
        assert_eq!(c.status_message(), OFFLINE_STATUS);
        assert_eq!(c.state().stats.views, 247);
        assert_eq!(c.state().messages.len(), 3);
    }

    #[test]
    fn corrupt_saved_state_falls_back_to_defaults() {
        let store = MemoryStore::new().with_item("businessState", "][");
        let c = controller(store);
        assert_eq!(c.state(), &BusinessState::default());
    }

    #[test]
    fn toggle_twice_round_trips() {
        let mut c = controller(MemoryStore::new());
        assert!(!c.toggle_status());
        assert_eq!(c.status_message(), OFFLINE_STATUS);
        assert_eq!(c.toast().current().unwrap().message, "Business is now offline");
        assert!(!saved(&c).is_online);

        assert!(c.toggle_status());
        assert_eq!(c.status_message(), ONLINE_STATUS);
        assert_eq!(c.toast().current().unwrap().message, "Business is now online");
        assert!(saved(&c).is_online);

        assert_eq!(
            c.backend().sent(),
            &[
                BackendAction::UpdateStatus { is_online: false },
                BackendAction::UpdateStatus { is_online: true },
            ]
        );
    }

    #[test]
    fn open_unread_message_once() {
        let mut c = controller(MemoryStore::new());
        assert!(c.open_message(1));
        assert_eq!(c.state().stats.unread_messages, 1);
        assert!(!c.state().messages[1].unread);
        assert_eq!(saved(&c).stats.unread_messages, 1);
        assert_eq!(
            c.toast().current().unwrap().message,
            "Opening message from Mike Johnson"
        );

        assert!(!c.open_message(1));
        assert_eq!(c.state().stats.unread_messages, 1);
    }

    #[test]
    fn open_message_marks_the_clicked_duplicate_sender() {
        let raw = serde_json::json!({
            "stats": { "messages": 2, "unreadMessages": 2 },
            "messages": [
                { "name": "Sarah Chen", "time": "2m ago", "preview": "Table for two?", "unread": true },
                { "name": "Sarah Chen", "time": "5m ago", "preview": "Any vegan options?", "unread": true }
            ]
        })
        .to_string();
        let mut c = controller(MemoryStore::new().with_item("businessState", &raw));

        assert!(c.open_message(1));
        assert!(c.state().messages[0].unread);
        assert!(!c.state().messages[1].unread);
        assert_eq!(c.state().stats.unread_messages, 1);

        assert!(!c.open_message(1));
        assert!(c.open_message(0));
        assert_eq!(c.state().stats.unread_messages, 0);
        assert_eq!(saved(&c).unread_in_list(), 0);
    }

    #[test]
    fn open_message_out_of_range_is_ignored() {
        let mut c = controller(MemoryStore::new());
        assert!(!c.open_message(7));
        assert!(!c.toast().is_visible());
        assert_eq!(c.state().stats.unread_messages, 2);
    }

    #[test]
    fn opening_read_message_does_not_save() {
        let mut c = controller(MemoryStore::new());
        assert!(!c.open_message(2));
        assert!(c.store().raw("businessState").is_none());
    }

    #[test]
    fn navigation_marks_single_active_entry() {
        let mut c = controller(MemoryStore::new());
        assert_eq!(c.set_active_navigation("messages", "Messages"), "messages.html");
        assert!(c.is_active("messages"));

        assert_eq!(c.set_active_navigation("reviews", "Reviews"), "reviews.html");
        assert!(c.is_active("reviews"));
        assert!(!c.is_active("messages"));
        assert_eq!(c.toast().current().unwrap().message, "Opening REVIEWS");
    }

    #[test]
    fn dismissal_targets_last_toast_after_two_seconds() {
        let mut c = controller(MemoryStore::new());
        assert_eq!(c.pending_dismissal(), None);

        c.set_active_navigation("photos", "Photos");
        let (generation, after) = c.pending_dismissal().unwrap();
        assert_eq!(after, std::time::Duration::from_secs(2));
        assert_eq!(c.toast().current().unwrap().message, "Opening PHOTOS");

        assert!(!c.dismiss_toast(generation - 1));
        assert!(c.dismiss_toast(generation));
        assert_eq!(c.pending_dismissal(), None);
    }

    #[test]
    fn navigation_to_unmapped_key() {
        let mut c = controller(MemoryStore::new());
        assert_eq!(c.set_active_navigation("orders", "Orders"), "orders");
        assert_eq!(c.toast().current().unwrap().message, "Opening ORDERS");
    }

    #[test]
    fn navigation_by_path() {
        let mut c = controller(MemoryStore::new());
        assert_eq!(c.set_active_navigation_by_path("/"), Some(Page::Home));
        assert!(c.is_active("home"));
        assert_eq!(c.set_active_navigation_by_path("/checkout.html"), None);
        assert!(!c.is_active("home"));
    }

    #[test]
    fn detached_toast_slot_ignores_notifications() {
        let mut c = controller(MemoryStore::new()).with_toast_slot(ToastSlot::detached());
        c.toggle_status();
        assert!(!c.toast().is_visible());
        assert!(!saved(&c).is_online);
    }

    #[test]
    fn failed_write_keeps_memory_state() {
        let mut c = controller(MemoryStore::read_only());
        assert!(!c.toggle_status());
        assert!(!c.state().is_online);
        assert!(!c.persist());
    }

    #[test]
    fn persist_then_restore_reproduces_state() {
        let mut c = controller(MemoryStore::new());
        c.toggle_status();
        c.open_message(0);
        c.record_views(3);
        let expected = c.state().clone();

        let mut fresh = PortalController::new(
            PortalConfig::default(),
            c.store().clone(),
            OfflineBackend::new(),
        );
        assert!(fresh.restore());
        assert_eq!(fresh.state(), &expected);
        assert_eq!(fresh.state().stats.views, 250);
    }

    #[test]
    fn offline_fetch_changes_nothing() {
        let mut c = controller(MemoryStore::new());
        assert!(!c.fetch_state());
        assert_eq!(c.state(), &BusinessState::default());
        assert_eq!(c.backend().sent(), &[BackendAction::FetchState]);
    }

    struct CannedBackend(Option<BusinessState>);

    impl PortalBackend for CannedBackend {
        fn send(&mut self, _action: BackendAction) {}

        fn fetched_state(&mut self) -> Option<BusinessState> {
            self.0.take()
        }
    }

    #[test]
    fn fetched_state_is_adopted_and_saved() {
        let mut remote = BusinessState::default();
        remote.stats.views = 9_000;
        let mut c = PortalController::new(
            PortalConfig::default(),
            MemoryStore::new(),
            CannedBackend(Some(remote.clone())),
        );
        assert!(c.fetch_state());
        assert_eq!(c.state(), &remote);
        let raw = c.store().raw("businessState").unwrap();
        assert_eq!(serde_json::from_str::<BusinessState>(raw).unwrap(), remote);
    }
}
