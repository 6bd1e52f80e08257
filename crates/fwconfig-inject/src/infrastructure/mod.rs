//! Infrastructure layer.
//!
//! OS-facing adapters: the header file on disk, the optional TOML settings
//! file, and the console.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `fwconfig_core`, but MUST NOT be imported by `application`.

pub mod console;
pub mod storage;
