//! Application layer use cases.
//!
//! Use cases here orchestrate the pure patcher from `fwconfig-core` and
//! depend on the [`inject_config::HeaderStore`] trait rather than on
//! `std::fs`, so the infrastructure can be swapped in tests.
//!
//! - **`inject_config`** – read the header, patch the three defines, write
//!   it back (or only preview the result).

pub mod inject_config;
