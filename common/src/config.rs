use std::time::Duration;

/// Storage slot the business state is persisted under.
pub const DEFAULT_STORAGE_KEY: &str = "businessState";

/// Runtime settings for the portal page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    pub storage_key: String,
    pub toast_duration: Duration,
    pub greeting_refresh: Duration,
    /// Interval for the demo view-count ticker.
    pub simulate_interval: Duration,
    pub simulate_updates: bool,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.into(),
            toast_duration: Duration::from_secs(2),
            greeting_refresh: Duration::from_secs(60),
            simulate_interval: Duration::from_secs(30),
            simulate_updates: false,
        }
    }
}

impl PortalConfig {
    /// Defaults with compile-time overrides from `PORTAL_STORAGE_KEY` and
    /// `PORTAL_SIMULATE_UPDATES` (`1` or `true` enables the ticker).
    pub fn from_env() -> Self {
        Self::from_overrides(
            option_env!("PORTAL_STORAGE_KEY"),
            option_env!("PORTAL_SIMULATE_UPDATES"),
        )
    }

    fn from_overrides(storage_key: Option<&str>, simulate: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(key) = storage_key.map(str::trim).filter(|k| !k.is_empty()) {
            config.storage_key = key.to_string();
        }
        if let Some(flag) = simulate {
            config.simulate_updates = matches!(flag.trim(), "1" | "true" | "yes");
        }
        config
    }
}
