//! Storage infrastructure.
//!
//! - `header_file` – [`HeaderStore`](crate::application::inject_config::HeaderStore)
//!   backed by `std::fs`, plus the conventional header location.
//! - `mock` – in-memory store for tests.
//! - `settings` – the optional TOML file that supplies values up front.

pub mod header_file;
pub mod mock;
pub mod settings;
