//! fwconfig-inject: write the device VIN and WiFi credentials into the
//! firmware config header.
//!
//! Run from the firmware project root.  With no flags it prompts for the
//! three values and patches `src/config/Config.h`:
//!
//! ```text
//! $ fwconfig-inject
//! Enter Device VIN: 1HGCM82633A004352
//! Enter WiFi SSID: workshop
//! Enter WiFi Password: hunter2
//! ✅ Successfully injected VIN, WiFi SSID, and Password to src/config/Config.h
//! ```
//!
//! # Usage
//!
//! ```text
//! fwconfig-inject [OPTIONS]
//!
//! Options:
//!   --header    <PATH>  Header to patch [env: FWCONFIG_HEADER]
//!   --settings  <FILE>  TOML file supplying values [env: FWCONFIG_SETTINGS]
//!   --device-id <VIN>   Skip the VIN prompt
//!   --ssid      <SSID>  Skip the SSID prompt
//!   --password  <PASS>  Skip the password prompt
//!   --dry-run           Print the patched header instead of writing it
//! ```
//!
//! Precedence for every value: flag, then environment variable (header and
//! settings only), then settings file, then the prompt or built-in default.
//!
//! Diagnostics go to stderr through `tracing`; set `RUST_LOG=debug` to see
//! each replaced line.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use fwconfig_inject::application::inject_config::InjectConfigUseCase;
use fwconfig_inject::infrastructure::console::{self, Prompter, ProvidedValues};
use fwconfig_inject::infrastructure::storage::header_file::{default_header_path, FileHeaderStore};
use fwconfig_inject::infrastructure::storage::settings::{load_settings, SettingsFile};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Inject the device VIN and WiFi credentials into a firmware config header.
#[derive(Debug, Parser)]
#[command(
    name = "fwconfig-inject",
    about = "Patch VIN, WIFI_SSID and WIFI_PASSWORD defines into a firmware config header",
    version
)]
struct Cli {
    /// Header file to patch.  Defaults to `src/config/Config.h`.
    #[arg(long, env = "FWCONFIG_HEADER")]
    header: Option<PathBuf>,

    /// TOML settings file providing any of the values.
    #[arg(long, env = "FWCONFIG_SETTINGS")]
    settings: Option<PathBuf>,

    /// Device VIN.  Prompted for when absent.
    #[arg(long)]
    device_id: Option<String>,

    /// WiFi network name.  Prompted for when absent.
    #[arg(long)]
    ssid: Option<String>,

    /// WiFi password.  Prompted for when absent.
    #[arg(long)]
    password: Option<String>,

    /// Print the patched header to stdout without writing it.
    #[arg(long)]
    dry_run: bool,
}

/// Everything needed to run once prompting is done.
#[derive(Debug, PartialEq, Eq)]
struct Invocation {
    header: PathBuf,
    provided: ProvidedValues,
    dry_run: bool,
}

impl Cli {
    /// Merges flags over the settings file.
    fn into_invocation(self, file: SettingsFile) -> Invocation {
        Invocation {
            header: self
                .header
                .or(file.header.path)
                .unwrap_or_else(default_header_path),
            provided: ProvidedValues {
                device_id: self.device_id.or(file.device.id),
                ssid: self.ssid.or(file.wifi.ssid),
                password: self.password.or(file.wifi.password),
            },
            dry_run: self.dry_run,
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    // Logs go to stderr so prompts, status lines and `--dry-run` output on
    // stdout are not interleaved with them.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if console::is_not_found(&e) {
                warn!("pass --header or run from the firmware project root");
            }
            println!("{}", console::failure_message(&e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let file = match &cli.settings {
        Some(path) => load_settings(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => SettingsFile::default(),
    };
    let invocation = cli.into_invocation(file);
    debug!("patching {}", invocation.header.display());

    let stdin = io::stdin();
    let settings = Prompter::new(stdin.lock(), io::stdout())
        .collect(invocation.provided)
        .context("failed to read values")?;

    let use_case = InjectConfigUseCase::new(FileHeaderStore);

    if invocation.dry_run {
        let report = use_case.preview(&invocation.header, &settings)?;
        print!("{}", report.contents());
        eprintln!("{}", console::preview_message(&report));
        return Ok(());
    }

    let report = use_case.inject(&invocation.header, &settings)?;
    if let Some(note) = console::duplicate_message(&report) {
        println!("{note}");
    }
    if !report.changed {
        info!("{} already held these values", report.path.display());
    }
    println!("{}", console::success_message(&report));
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
