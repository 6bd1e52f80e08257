//! In-memory header store for tests.
//!
//! Lets tests seed header files, inject read/write failures, and inspect
//! what was written, without touching the disk.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::application::inject_config::HeaderStore;

/// A [`HeaderStore`] holding files in a map.
#[derive(Default)]
pub struct InMemoryHeaderStore {
    files: Mutex<HashMap<PathBuf, String>>,
    fail_reads: Mutex<bool>,
    fail_writes: Mutex<bool>,
    write_count: Mutex<u32>,
}

impl InMemoryHeaderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding `contents` at `path`.
    pub fn with_file(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        let store = Self::new();
        store
            .files
            .lock()
            .expect("lock poisoned")
            .insert(path.into(), contents.into());
        store
    }

    /// Current contents at `path`, if any.
    pub fn contents(&self, path: &Path) -> Option<String> {
        self.files.lock().expect("lock poisoned").get(path).cloned()
    }

    /// Makes every subsequent read fail with `PermissionDenied`.
    pub fn fail_reads(&self) {
        *self.fail_reads.lock().expect("lock poisoned") = true;
    }

    /// Makes every subsequent write fail with `PermissionDenied`.
    pub fn fail_writes(&self) {
        *self.fail_writes.lock().expect("lock poisoned") = true;
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> u32 {
        *self.write_count.lock().expect("lock poisoned")
    }
}

impl HeaderStore for InMemoryHeaderStore {
    fn exists(&self, path: &Path) -> bool {
        self.files.lock().expect("lock poisoned").contains_key(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        if *self.fail_reads.lock().expect("lock poisoned") {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "simulated read failure",
            ));
        }
        self.contents(path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such header"))
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        if *self.fail_writes.lock().expect("lock poisoned") {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "simulated write failure",
            ));
        }
        self.files
            .lock()
            .expect("lock poisoned")
            .insert(path.to_path_buf(), contents.to_string());
        *self.write_count.lock().expect("lock poisoned") += 1;
        Ok(())
    }
}
