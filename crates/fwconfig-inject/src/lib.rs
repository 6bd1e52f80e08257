//! fwconfig-inject library crate.
//!
//! Writes a device's VIN and WiFi credentials into the firmware's config
//! header before a build.
//!
//! # Architecture
//!
//! ```text
//! fwconfig-inject (binary: prompts, CLI flags, status output)
//!   ├── application/      InjectConfigUseCase over the HeaderStore trait
//!   └── infrastructure/
//!         ├── storage/    header file store, in-memory store, settings file
//!         └── console/    interactive prompts and status messages
//!         ↓
//! fwconfig-core           ConfigKey, DeviceSettings, patch_lines
//! ```
//!
//! `application` never touches the file system directly; it goes through
//! [`application::inject_config::HeaderStore`] so tests can run against
//! [`infrastructure::storage::mock::InMemoryHeaderStore`].

use std::path::Path;

/// Application layer: the inject use case.
pub mod application;

/// Infrastructure layer: file system and console adapters.
pub mod infrastructure;

use application::inject_config::{InjectConfigUseCase, InjectError, InjectReport};
use fwconfig_core::DeviceSettings;
use infrastructure::storage::header_file::FileHeaderStore;

/// Patches `path` on disk with the three values.
///
/// Convenience wrapper over [`InjectConfigUseCase`] with the real file
/// system.
///
/// # Errors
///
/// [`InjectError::NotFound`] if `path` does not exist (nothing is created),
/// [`InjectError::Io`] if reading or writing fails.
pub fn inject(
    path: &Path,
    device_id: &str,
    ssid: &str,
    password: &str,
) -> Result<InjectReport, InjectError> {
    let settings = DeviceSettings::new(device_id, ssid, password);
    InjectConfigUseCase::new(FileHeaderStore).inject(path, &settings)
}
