//! # fwconfig-core
//!
//! Domain types and the pure line patcher behind `fwconfig-inject`.
//!
//! Firmware builds read their device identity and WiFi credentials from a C
//! header, conventionally `src/config/Config.h`:
//!
//! ```c
//! #define VIN "1HGCM82633A004352"
//! #define WIFI_SSID "workshop"
//! #define WIFI_PASSWORD "hunter2"
//! ```
//!
//! This crate knows which three `#define` lines matter and how to rewrite a
//! header's lines so each of them carries a fresh value.  It does no I/O at
//! all: the caller hands in the header text and gets the new lines back.
//!
//! - **`domain`** – [`ConfigKey`], [`ConfigEntry`] and [`DeviceSettings`].
//! - **`patch`** – splitting header text into lines and [`patch_lines`],
//!   the replace-or-append pass.

pub mod domain;
pub mod patch;

// Re-export the most-used types at the crate root so callers can write
// `fwconfig_core::ConfigKey` instead of `fwconfig_core::domain::entry::ConfigKey`.
pub use domain::entry::{parse_define_value, ConfigEntry, ConfigKey};
pub use domain::settings::DeviceSettings;
pub use patch::header::{join_lines, patch_lines, split_lines, FoundFlags, PatchOutcome};
