//! Integration tests for header injection.
//!
//! These run `fwconfig_inject::inject` against real files in a temporary
//! directory, plus the use case over the in-memory store for failure paths
//! that are awkward to provoke on a real file system.

use std::path::{Path, PathBuf};

use fwconfig_core::{parse_define_value, ConfigKey, DeviceSettings};
use fwconfig_inject::application::inject_config::{InjectConfigUseCase, InjectError};
use fwconfig_inject::infrastructure::storage::mock::InMemoryHeaderStore;
use uuid::Uuid;

/// A scratch directory removed on drop.
struct TempDir(PathBuf);

impl TempDir {
    fn new() -> Self {
        let dir = std::env::temp_dir().join(format!("fwconfig_it_{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        Self(dir)
    }

    fn header(&self, contents: &str) -> PathBuf {
        let path = self.0.join("Config.h");
        std::fs::write(&path, contents).unwrap();
        path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        std::fs::remove_dir_all(&self.0).ok();
    }
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_header_gets_three_defines() {
    // Arrange
    let dir = TempDir::new();
    let path = dir.header("");

    // Act
    let report = fwconfig_inject::inject(&path, "VIN1", "net", "pw").expect("inject");

    // Assert
    assert_eq!(
        read(&path),
        "#define VIN \"VIN1\"\n#define WIFI_SSID \"net\"\n#define WIFI_PASSWORD \"pw\"\n"
    );
    assert_eq!(report.outcome.appended, ConfigKey::ALL.to_vec());
    assert!(report.written);
}

#[test]
fn test_existing_defines_are_rewritten_in_place() {
    // Arrange
    let dir = TempDir::new();
    let path = dir.header(
        "#ifndef CONFIG_H\n\
         #define CONFIG_H\n\
         #define WIFI_PASSWORD \"old\"\n\
         #define SERVER_PORT 8080\n\
         #define WIFI_SSID \"old\"\n\
         #define VIN \"old\"\n\
         #endif\n",
    );

    // Act
    fwconfig_inject::inject(&path, "VIN2", "home", "s3cret").expect("inject");

    // Assert
    assert_eq!(
        read(&path),
        "#ifndef CONFIG_H\n\
         #define CONFIG_H\n\
         #define WIFI_PASSWORD \"s3cret\"\n\
         #define SERVER_PORT 8080\n\
         #define WIFI_SSID \"home\"\n\
         #define VIN \"VIN2\"\n\
         #endif\n"
    );
}

#[test]
fn test_missing_header_is_not_created() {
    // Arrange
    let dir = TempDir::new();
    let path = dir.0.join("Config.h");

    // Act
    let result = fwconfig_inject::inject(&path, "VIN1", "net", "pw");

    // Assert
    assert!(matches!(result, Err(InjectError::NotFound { .. })));
    assert!(!path.exists(), "a missing header must not be created");
}

#[test]
fn test_second_run_leaves_file_identical() {
    let dir = TempDir::new();
    let path = dir.header("#pragma once\n#define WIFI_SSID \"x\"\n");

    fwconfig_inject::inject(&path, "VIN1", "net", "pw").expect("first run");
    let once = read(&path);
    let report = fwconfig_inject::inject(&path, "VIN1", "net", "pw").expect("second run");

    assert_eq!(read(&path), once);
    assert!(!report.changed);
}

#[test]
fn test_values_read_back_from_disk() {
    let dir = TempDir::new();
    let path = dir.header("");
    let settings = DeviceSettings::new("WVWZZZ1JZXW000001", "Shop Floor 2.4G", "p@ss word!");

    fwconfig_inject::inject(
        &path,
        &settings.device_id,
        &settings.ssid,
        &settings.password,
    )
    .expect("inject");

    let text = read(&path);
    for key in ConfigKey::ALL {
        let line = text
            .split_inclusive('\n')
            .find(|l| key.matches(l))
            .expect("define present");
        assert_eq!(parse_define_value(line, key), Some(settings.value(key)));
    }
}

#[test]
fn test_directory_at_header_path_is_io_error() {
    // Exists, but cannot be read as a file.
    let dir = TempDir::new();
    let path = dir.0.join("Config.h");
    std::fs::create_dir_all(&path).unwrap();

    let result = fwconfig_inject::inject(&path, "VIN1", "net", "pw");

    assert!(matches!(result, Err(InjectError::Io { .. })));
}

#[test]
fn test_write_failure_is_reported_and_contents_kept() {
    // Arrange
    let store = InMemoryHeaderStore::with_file("Config.h", "#define VIN \"old\"\n");
    store.fail_writes();
    let use_case = InjectConfigUseCase::new(&store);

    // Act
    let result = use_case.inject(Path::new("Config.h"), &DeviceSettings::new("V", "S", "P"));

    // Assert
    assert!(matches!(result, Err(InjectError::Io { .. })));
    assert_eq!(
        store.contents(Path::new("Config.h")).as_deref(),
        Some("#define VIN \"old\"\n")
    );
}

#[test]
fn test_read_failure_skips_write() {
    let store = InMemoryHeaderStore::with_file("Config.h", "");
    store.fail_reads();
    let use_case = InjectConfigUseCase::new(&store);

    let result = use_case.inject(Path::new("Config.h"), &DeviceSettings::new("V", "S", "P"));

    assert!(matches!(result, Err(InjectError::Io { .. })));
    assert_eq!(store.write_count(), 0);
}

#[test]
fn test_preview_leaves_store_untouched() {
    let store = InMemoryHeaderStore::with_file("Config.h", "#pragma once\n");
    let use_case = InjectConfigUseCase::new(&store);

    let report = use_case
        .preview(Path::new("Config.h"), &DeviceSettings::new("V", "S", "P"))
        .expect("preview");

    assert!(report.changed);
    assert_eq!(store.write_count(), 0);
    assert_eq!(
        store.contents(Path::new("Config.h")).as_deref(),
        Some("#pragma once\n")
    );
}
