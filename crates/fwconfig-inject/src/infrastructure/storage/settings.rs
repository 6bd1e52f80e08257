//! Optional TOML settings file (`--settings <FILE>`).
//!
//! Lets a provisioning script supply some or all of the values up front
//! instead of typing them at the prompts:
//!
//! ```toml
//! [header]
//! path = "src/config/Config.h"
//!
//! [device]
//! id = "1HGCM82633A004352"
//!
//! [wifi]
//! ssid = "workshop"
//! password = "hunter2"
//! ```
//!
//! Every section and every field is optional.  Anything missing falls
//! through to the interactive prompt (or, for the header path, to
//! [`default_header_path`](super::header_file::default_header_path)).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Error type for settings file operations.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The file could not be read.
    #[error("could not read settings file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse settings TOML")]
    Parse(#[from] toml::de::Error),
}

// ── Settings schema ───────────────────────────────────────────────────────────

/// Top-level settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsFile {
    #[serde(default)]
    pub header: HeaderSection,
    #[serde(default)]
    pub device: DeviceSection,
    #[serde(default)]
    pub wifi: WifiSection,
}

/// Where the header lives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSection {
    /// Device VIN.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WifiSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Loads a settings file.
///
/// Unlike the header, a settings file that was asked for but is absent is
/// an error rather than an empty default.
///
/// # Errors
///
/// [`SettingsError::Io`] if the file cannot be read, [`SettingsError::Parse`]
/// if the TOML is malformed.
pub fn load_settings(path: &Path) -> Result<SettingsFile, SettingsError> {
    let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let settings: SettingsFile = toml::from_str(&content)?;
    debug!("loaded settings from {}", path.display());
    Ok(settings)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_empty_toml_gives_all_none() {
        let settings: SettingsFile = toml::from_str("").expect("deserialize empty");
        assert_eq!(settings, SettingsFile::default());
        assert!(settings.header.path.is_none());
        assert!(settings.device.id.is_none());
    }

    #[test]
    fn test_full_toml_populates_every_field() {
        // Arrange
        let toml_str = r#"
[header]
path = "firmware/include/Config.h"

[device]
id = "1HGCM82633A004352"

[wifi]
ssid = "workshop"
password = "hunter2"
"#;

        // Act
        let settings: SettingsFile = toml::from_str(toml_str).expect("deserialize");

        // Assert
        assert_eq!(
            settings.header.path,
            Some(PathBuf::from("firmware/include/Config.h"))
        );
        assert_eq!(settings.device.id.as_deref(), Some("1HGCM82633A004352"));
        assert_eq!(settings.wifi.ssid.as_deref(), Some("workshop"));
        assert_eq!(settings.wifi.password.as_deref(), Some("hunter2"));
    }

    #[test]
    fn test_partial_wifi_section_leaves_password_unset() {
        let settings: SettingsFile =
            toml::from_str("[wifi]\nssid = \"only-ssid\"\n").expect("deserialize");
        assert_eq!(settings.wifi.ssid.as_deref(), Some("only-ssid"));
        assert!(settings.wifi.password.is_none());
    }

    #[test]
    fn test_unset_fields_are_omitted_when_serialized() {
        let mut settings = SettingsFile::default();
        settings.wifi.ssid = Some("net".to_string());

        let toml_str = toml::to_string_pretty(&settings).expect("serialize");

        assert!(!toml_str.contains("password"));
        assert!(!toml_str.contains("path"));
        let restored: SettingsFile = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(restored, settings);
    }

    #[test]
    fn test_load_settings_missing_file_is_io_error() {
        let path = std::env::temp_dir().join(format!("fwconfig_absent_{}.toml", Uuid::new_v4()));
        let result = load_settings(&path);
        assert!(matches!(result, Err(SettingsError::Io { .. })));
    }

    #[test]
    fn test_load_settings_invalid_toml_is_parse_error() {
        // Arrange
        let dir = std::env::temp_dir().join(format!("fwconfig_test_{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.toml");
        std::fs::write(&path, "[[[ not valid toml").unwrap();

        // Act
        let result = load_settings(&path);

        // Assert
        assert!(matches!(result, Err(SettingsError::Parse(_))));

        // Cleanup
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_settings_reads_file_from_disk() {
        let dir = std::env::temp_dir().join(format!("fwconfig_test_{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.toml");
        std::fs::write(&path, "[device]\nid = \"VIN9\"\n").unwrap();

        let settings = load_settings(&path).expect("load");

        assert_eq!(settings.device.id.as_deref(), Some("VIN9"));
        std::fs::remove_dir_all(&dir).ok();
    }
}
