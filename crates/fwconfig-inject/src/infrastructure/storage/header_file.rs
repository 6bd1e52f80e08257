//! Header access through the real file system.
//!
//! Content is read and written as UTF-8 text.  The file is read fully and
//! closed before it is reopened for writing; no locking is attempted, so two
//! concurrent runs against the same header race and the last writer wins.

use std::io;
use std::path::{Path, PathBuf};

use crate::application::inject_config::HeaderStore;

/// Conventional header location relative to the firmware project root.
pub fn default_header_path() -> PathBuf {
    Path::new("src").join("config").join("Config.h")
}

/// [`HeaderStore`] over `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileHeaderStore;

impl HeaderStore for FileHeaderStore {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        std::fs::write(path, contents)
    }
}
