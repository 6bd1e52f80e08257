//! The three values injected into the header in one run.

use serde::{Deserialize, Serialize};

use super::entry::{ConfigEntry, ConfigKey};

/// Device identity and WiFi credentials for one injection.
///
/// No validation is applied: whatever a person typed (including an empty
/// string) is written between the quotes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSettings {
    pub device_id: String,
    pub ssid: String,
    pub password: String,
}

impl DeviceSettings {
    pub fn new(
        device_id: impl Into<String>,
        ssid: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            device_id: device_id.into(),
            ssid: ssid.into(),
            password: password.into(),
        }
    }

    /// Returns the value supplied for `key`.
    pub fn value(&self, key: ConfigKey) -> &str {
        match key {
            ConfigKey::DeviceId => &self.device_id,
            ConfigKey::WifiSsid => &self.ssid,
            ConfigKey::WifiPassword => &self.password,
        }
    }

    /// Renders one [`ConfigEntry`] per key, in [`ConfigKey::ALL`] order.
    pub fn entries(&self) -> [ConfigEntry; 3] {
        ConfigKey::ALL.map(|key| ConfigEntry::new(key, self.value(key)))
    }
}
