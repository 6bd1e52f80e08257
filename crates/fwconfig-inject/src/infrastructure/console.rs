//! Interactive prompts and status messages.
//!
//! The prompter is generic over any `BufRead`/`Write` pair so tests can feed
//! it a byte slice instead of a terminal.

use std::io::{self, BufRead, Write};

use fwconfig_core::{ConfigKey, DeviceSettings};
use thiserror::Error;

use crate::application::inject_config::{InjectError, InjectReport};

/// Error type for reading values from the console.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Input closed before a value for the key was entered.
    #[error("no input for {0}")]
    EndOfInput(ConfigKey),

    #[error("console I/O failed")]
    Io(#[from] io::Error),
}

/// Values supplied before prompting (flags or settings file).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvidedValues {
    pub device_id: Option<String>,
    pub ssid: Option<String>,
    pub password: Option<String>,
}

/// Prompt text shown for `key`.
pub fn prompt_text(key: ConfigKey) -> String {
    match key {
        ConfigKey::DeviceId => "Enter Device VIN: ".to_string(),
        other => format!("Enter {}: ", other.label()),
    }
}

/// Asks for values on `output` and reads answers from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prompts for one value.  Only the line terminator is stripped;
    /// surrounding spaces are part of the value.
    ///
    /// # Errors
    ///
    /// [`PromptError::EndOfInput`] if input is closed, [`PromptError::Io`]
    /// for console failures.
    pub fn ask(&mut self, key: ConfigKey) -> Result<String, PromptError> {
        write!(self.output, "{}", prompt_text(key))?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::EndOfInput(key));
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Fills in whatever `provided` lacks by prompting, in
    /// [`ConfigKey::ALL`] order.
    ///
    /// # Errors
    ///
    /// See [`ask`](Self::ask).
    pub fn collect(&mut self, provided: ProvidedValues) -> Result<DeviceSettings, PromptError> {
        let device_id = self.resolve(ConfigKey::DeviceId, provided.device_id)?;
        let ssid = self.resolve(ConfigKey::WifiSsid, provided.ssid)?;
        let password = self.resolve(ConfigKey::WifiPassword, provided.password)?;
        Ok(DeviceSettings {
            device_id,
            ssid,
            password,
        })
    }

    fn resolve(&mut self, key: ConfigKey, provided: Option<String>) -> Result<String, PromptError> {
        match provided {
            Some(value) => Ok(value),
            None => self.ask(key),
        }
    }
}

/// Success line printed after a write.
pub fn success_message(report: &InjectReport) -> String {
    format!(
        "✅ Successfully injected VIN, WiFi SSID, and Password to {}",
        report.path.display()
    )
}

/// Summary printed for `--dry-run`.
pub fn preview_message(report: &InjectReport) -> String {
    if !report.changed {
        return format!("🔍 {} is already up to date", report.path.display());
    }
    format!(
        "🔍 Dry run: {} define(s) would be replaced and {} appended in {}; nothing written",
        report.outcome.replaced().len(),
        report.outcome.appended.len(),
        report.path.display()
    )
}

/// Failure line for any error reaching the top level.
pub fn failure_message(err: &anyhow::Error) -> String {
    format!("❌ Error: {err:#}")
}

/// Note printed when the header carried the same define more than once.
pub fn duplicate_message(report: &InjectReport) -> Option<String> {
    let duplicated = report.duplicated();
    if duplicated.is_empty() {
        return None;
    }
    let names: Vec<&str> = duplicated.iter().map(|k| k.label()).collect();
    Some(format!(
        "⚠️  {} defined more than once; every copy now holds the new value",
        names.join(", ")
    ))
}

/// Returns `true` when `err` is the missing-header case.
pub fn is_not_found(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<InjectError>(),
        Some(InjectError::NotFound { .. })
    )
}
