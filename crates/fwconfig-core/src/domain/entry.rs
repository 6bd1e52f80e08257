//! Configuration keys and rendered `#define` lines.
//!
//! Each [`ConfigKey`] is identified in the header by a literal prefix such as
//! `#define WIFI_SSID`.  A [`ConfigEntry`] pairs that key with the complete
//! replacement line, ready to be written verbatim:
//!
//! ```text
//! #define WIFI_SSID "workshop"\n
//! ```
//!
//! Values are inserted between the quotes as-is.  Embedded `"` characters
//! are not escaped, so a value containing one yields a line the C
//! preprocessor will reject.

use std::fmt;

/// Line terminator appended to every rendered line.
pub const LINE_TERMINATOR: &str = "\n";

/// One of the three settings the injector manages.
///
/// The declaration order is also the order in which missing keys are
/// appended to the header; see [`ConfigKey::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConfigKey {
    /// Device identifier (the vehicle identification number).
    DeviceId,
    /// WiFi network name.
    WifiSsid,
    /// WiFi passphrase.
    WifiPassword,
}

impl ConfigKey {
    /// Every key, in the fixed append order.
    pub const ALL: [ConfigKey; 3] = [
        ConfigKey::DeviceId,
        ConfigKey::WifiSsid,
        ConfigKey::WifiPassword,
    ];

    /// The literal leading text that identifies this key's line.
    ///
    /// Matching is a case-sensitive `starts_with`, so `#define VIN` also
    /// claims a line such as `#define VINTAGE 1`.
    pub const fn prefix(self) -> &'static str {
        match self {
            ConfigKey::DeviceId => "#define VIN",
            ConfigKey::WifiSsid => "#define WIFI_SSID",
            ConfigKey::WifiPassword => "#define WIFI_PASSWORD",
        }
    }

    /// Human-readable name used in prompts and status messages.
    pub const fn label(self) -> &'static str {
        match self {
            ConfigKey::DeviceId => "VIN",
            ConfigKey::WifiSsid => "WiFi SSID",
            ConfigKey::WifiPassword => "WiFi Password",
        }
    }

    /// Returns `true` if `line` belongs to this key.
    pub fn matches(self, line: &str) -> bool {
        line.starts_with(self.prefix())
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A key together with its freshly rendered header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    pub key: ConfigKey,
    /// `KEY "VALUE"` followed by [`LINE_TERMINATOR`].
    pub line: String,
}

impl ConfigEntry {
    /// Renders the line for `key` carrying `value`.
    pub fn new(key: ConfigKey, value: &str) -> Self {
        Self {
            key,
            line: format!("{} \"{}\"{}", key.prefix(), value, LINE_TERMINATOR),
        }
    }

    /// The key prefix this entry replaces.
    pub fn prefix(&self) -> &'static str {
        self.key.prefix()
    }
}

/// Extracts the quoted value from a rendered `#define` line.
///
/// This is the inverse of [`ConfigEntry::new`]: the key prefix, the single
/// separating space, the surrounding quotes and any trailing `\n` or `\r\n`
/// are stripped.  Returns `None` when the line does not have that shape.
pub fn parse_define_value(line: &str, key: ConfigKey) -> Option<&str> {
    let body = line
        .strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .unwrap_or(line);
    let quoted = body.strip_prefix(key.prefix())?.strip_prefix(' ')?;
    quoted.strip_prefix('"')?.strip_suffix('"')
}
