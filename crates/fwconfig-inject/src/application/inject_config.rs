//! InjectConfigUseCase: patch the VIN and WiFi defines into a header.
//!
//! # Flow
//!
//! ```text
//! exists? ──no──► InjectError::NotFound   (nothing read, nothing written)
//!    │
//!   yes
//!    ▼
//! read_to_string ──► split_lines ──► patch_lines ──► join_lines ──► write
//! ```
//!
//! The whole file is read and released before it is opened for writing.
//! There is no temp-file-and-rename step: a failure part way through the
//! write can leave the header truncated.

use std::io;
use std::path::{Path, PathBuf};

use fwconfig_core::{join_lines, patch_lines, split_lines, ConfigKey, DeviceSettings, PatchOutcome};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Error type for header injection.
#[derive(Debug, Error)]
pub enum InjectError {
    /// The header does not exist.  Nothing was created.
    #[error("Could not find {}. Make sure the path is correct.", path.display())]
    NotFound { path: PathBuf },

    /// Reading or writing the header failed.
    #[error("could not access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Access to the header file.
///
/// The production implementation is
/// [`FileHeaderStore`](crate::infrastructure::storage::header_file::FileHeaderStore);
/// tests use [`InMemoryHeaderStore`](crate::infrastructure::storage::mock::InMemoryHeaderStore)
/// or the generated `MockHeaderStore`.
#[cfg_attr(test, mockall::automock)]
pub trait HeaderStore {
    /// Returns `true` if something exists at `path`.
    fn exists(&self, path: &Path) -> bool;
    /// Reads the whole header as text.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
    /// Replaces the header's contents with `contents`.
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}

// Lets a caller keep ownership of a store and lend it to the use case.
impl<T: HeaderStore + ?Sized> HeaderStore for &T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        (**self).read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        (**self).write(path, contents)
    }
}

/// What an injection did (or, for a preview, would do).
#[derive(Debug, Clone)]
pub struct InjectReport {
    pub path: PathBuf,
    /// The patched lines plus which keys were replaced or appended.
    pub outcome: PatchOutcome,
    /// `false` if the patched header is byte-identical to what was read.
    pub changed: bool,
    /// `false` for [`InjectConfigUseCase::preview`].
    pub written: bool,
}

impl InjectReport {
    /// The patched header as a single string.
    pub fn contents(&self) -> String {
        join_lines(&self.outcome.lines)
    }

    /// Keys whose define appeared more than once.
    pub fn duplicated(&self) -> Vec<ConfigKey> {
        ConfigKey::ALL
            .into_iter()
            .filter(|&k| self.outcome.rewritten(k) > 1)
            .collect()
    }
}

/// Reads, patches and writes the config header through a [`HeaderStore`].
pub struct InjectConfigUseCase<S: HeaderStore> {
    store: S,
}

impl<S: HeaderStore> InjectConfigUseCase<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Patches the header at `path` and writes it back.
    ///
    /// The file is rewritten even when nothing changed.
    ///
    /// # Errors
    ///
    /// [`InjectError::NotFound`] if `path` does not exist, [`InjectError::Io`]
    /// if reading or writing fails.
    pub fn inject(
        &self,
        path: &Path,
        settings: &DeviceSettings,
    ) -> Result<InjectReport, InjectError> {
        let mut report = self.plan(path, settings)?;

        self.store
            .write(path, &report.contents())
            .map_err(|source| InjectError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        report.written = true;

        info!(
            "wrote {}: {} replaced, {} appended",
            path.display(),
            report.outcome.replaced().len(),
            report.outcome.appended.len()
        );
        Ok(report)
    }

    /// Computes the patched header without writing anything.
    ///
    /// # Errors
    ///
    /// Same as [`inject`](Self::inject), minus write failures.
    pub fn preview(
        &self,
        path: &Path,
        settings: &DeviceSettings,
    ) -> Result<InjectReport, InjectError> {
        self.plan(path, settings)
    }

    fn plan(&self, path: &Path, settings: &DeviceSettings) -> Result<InjectReport, InjectError> {
        if !self.store.exists(path) {
            warn!("header {} does not exist", path.display());
            return Err(InjectError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let text = self
            .store
            .read_to_string(path)
            .map_err(|source| InjectError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let lines = split_lines(&text);
        debug!("read {} lines from {}", lines.len(), path.display());

        let outcome = patch_lines(&lines, &settings.entries());
        let changed = outcome.changes(&lines);

        Ok(InjectReport {
            path: path.to_path_buf(),
            outcome,
            changed,
            written: false,
        })
    }
}
