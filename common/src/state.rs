use serde::{Deserialize, Serialize};

/// Counters shown on the portal dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Stats {
    pub views: u32,
    pub messages: u32,
    pub unread_messages: u32,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            views: 247,
            messages: 18,
            unread_messages: 2,
        }
    }
}

/// A customer message preview in the inbox list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomerMessage {
    pub name: String,
    /// Relative display time, e.g. "2m ago". Never parsed.
    pub time: String,
    pub preview: String,
    #[serde(default)]
    pub unread: bool,
}

impl CustomerMessage {
    pub fn new(name: &str, time: &str, preview: &str, unread: bool) -> Self {
        Self {
            name: name.into(),
            time: time.into(),
            preview: preview.into(),
            unread,
        }
    }
}

/// Everything the portal page knows about the business.
///
/// Missing fields take their sample values when deserialized, unknown fields
/// are rejected. Call [`BusinessState::validate`] after decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct BusinessState {
    pub is_online: bool,
    pub stats: Stats,
    pub messages: Vec<CustomerMessage>,
}

impl Default for BusinessState {
    fn default() -> Self {
        Self {
            is_online: true,
            stats: Stats::default(),
            messages: sample_messages(),
        }
    }
}

fn sample_messages() -> Vec<CustomerMessage> {
    vec![
        CustomerMessage::new(
            "Sarah Chen",
            "2m ago",
            "Do you have tables available for tonight?",
            true,
        ),
        CustomerMessage::new("Mike Johnson", "15m ago", "What time is happy hour today?", true),
        CustomerMessage::new("Emma Wilson", "1h ago", "Thanks for the quick response!", false),
    ]
}

/// Status line shown under the toggle.
pub const ONLINE_STATUS: &str = "Currently accepting orders";
pub const OFFLINE_STATUS: &str = "Currently offline";

impl BusinessState {
    /// Check the counter invariant. Returns a description of the first violation.
    pub fn validate(&self) -> Result<(), String> {
        if self.stats.unread_messages > self.stats.messages {
            return Err(format!(
                "unreadMessages ({}) exceeds messages ({})",
                self.stats.unread_messages, self.stats.messages
            ));
        }
        Ok(())
    }

    pub fn status_message(&self) -> &'static str {
        if self.is_online {
            ONLINE_STATUS
        } else {
            OFFLINE_STATUS
        }
    }

    /// Flip online/offline and return the new value.
    pub fn toggle_online(&mut self) -> bool {
        self.is_online = !self.is_online;
        self.is_online
    }

    /// Mark the message at `index` in the list as read.
    ///
    /// Returns `true` only if it was unread; the unread counter is decremented
    /// in that case and left alone otherwise.
    pub fn mark_read(&mut self, index: usize) -> bool {
        let Some(message) = self.messages.get_mut(index) else {
            return false;
        };
        if !message.unread {
            return false;
        }
        message.unread = false;
        self.stats.unread_messages = self.stats.unread_messages.saturating_sub(1);
        true
    }

    /// Count of unread entries in the list, independent of `stats`.
    pub fn unread_in_list(&self) -> u32 {
        self.messages.iter().filter(|m| m.unread).count() as u32
    }

    pub fn add_views(&mut self, count: u32) {
        self.stats.views = self.stats.views.saturating_add(count);
    }
}
