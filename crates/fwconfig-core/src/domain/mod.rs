//! Domain entities for fwconfig.
//!
//! Pure types with no file-system or console access, so they can be tested
//! on any platform without setup.

/// The three configuration keys and their rendered `#define` lines.
pub mod entry;

/// The value object holding the three settings supplied for one run.
pub mod settings;
