//! Header rewriting.
//!
//! The header is handled as an ordered list of lines, each keeping its own
//! terminator.  [`header::patch_lines`] builds a new list rather than
//! editing the caller's in place, so the input can be compared with the
//! output (as the dry-run mode does) without cloning up front.

pub mod header;
