//! Settings app state: two independent switches held in memory only.

use crate::config::WatchConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsState {
    pub clock_24h: bool,
    pub wifi_enabled: bool,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            clock_24h: false,
            wifi_enabled: true,
        }
    }
}

impl SettingsState {
    pub fn from_config(config: &WatchConfig) -> Self {
        Self {
            clock_24h: config.clock_24h,
            wifi_enabled: config.wifi_enabled,
        }
    }

    pub fn toggle_wifi(&mut self) {
        self.wifi_enabled = !self.wifi_enabled;
    }

    pub fn toggle_clock_format(&mut self) {
        self.clock_24h = !self.clock_24h;
    }
}

/// OS version label shown on the settings page.
pub const OS_VERSION_LABEL: &str = "LuminOS 1";
