//! Replace-or-append pass over a header's lines.
//!
//! # Algorithm
//!
//! ```text
//! for each line, in order:
//!     if it starts with a key prefix  → emit the rendered entry, mark key found
//!     otherwise                       → emit the line unchanged
//! for each entry whose key was never found, in ConfigKey::ALL order:
//!     append the rendered entry
//! ```
//!
//! Duplicates are not collapsed: if a header defines `WIFI_SSID` twice, both
//! lines receive the new value and the header still has two of them.
//!
//! Lines are compared and copied with their terminators intact, so CRLF
//! lines that are not rewritten come back byte-for-byte.  Rewritten and
//! appended lines always end in `\n`.

use tracing::{debug, warn};

use crate::domain::entry::{ConfigEntry, ConfigKey};

/// Splits header text into lines, each keeping its trailing `\n` (or
/// `\r\n`).  A final line without a terminator is kept as-is.
///
/// An empty string produces an empty list, not a single empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}

/// Concatenates lines produced by [`patch_lines`] back into file content.
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut out = String::with_capacity(lines.iter().map(|l| l.as_ref().len()).sum());
    for line in lines {
        out.push_str(line.as_ref());
    }
    out
}

/// Records which keys were seen during a scan.
///
/// Starts all-false; a key's flag is set on its first matching line and
/// never cleared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FoundFlags {
    flags: [bool; 3],
}

impl FoundFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `key` as found.  Returns `true` if it had already been found.
    pub fn mark(&mut self, key: ConfigKey) -> bool {
        std::mem::replace(&mut self.flags[key as usize], true)
    }

    pub fn is_found(&self, key: ConfigKey) -> bool {
        self.flags[key as usize]
    }

    /// Keys not yet found, in [`ConfigKey::ALL`] order.
    pub fn missing(&self) -> impl Iterator<Item = ConfigKey> + '_ {
        ConfigKey::ALL.into_iter().filter(|&k| !self.is_found(k))
    }
}

/// Result of one [`patch_lines`] pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    /// The full, updated header.
    pub lines: Vec<String>,
    /// Which keys matched at least one existing line.
    pub found: FoundFlags,
    /// Keys appended at the end because no line matched, in append order.
    pub appended: Vec<ConfigKey>,
    rewritten: [usize; 3],
}

impl PatchOutcome {
    /// Number of existing lines rewritten for `key`.  More than one means the
    /// header carried duplicates.
    pub fn rewritten(&self, key: ConfigKey) -> usize {
        self.rewritten[key as usize]
    }

    /// Keys that were replaced in place, in [`ConfigKey::ALL`] order.
    pub fn replaced(&self) -> Vec<ConfigKey> {
        ConfigKey::ALL
            .into_iter()
            .filter(|&k| self.found.is_found(k))
            .collect()
    }

    /// Returns `true` if the patched lines differ from `original`.
    pub fn changes<S: AsRef<str>>(&self, original: &[S]) -> bool {
        self.lines.len() != original.len()
            || self
                .lines
                .iter()
                .zip(original)
                .any(|(new, old)| new != old.as_ref())
    }
}

/// Rewrites every line claimed by one of `entries` and appends the entries
/// that claimed none.
///
/// `entries` is expected in [`ConfigKey::ALL`] order, which is what
/// [`DeviceSettings::entries`](crate::DeviceSettings::entries) returns; the
/// append order follows it.  If the last existing line has no terminator it
/// gets a `\n` before anything is appended, so every appended define starts
/// on its own line.
pub fn patch_lines<S: AsRef<str>>(lines: &[S], entries: &[ConfigEntry]) -> PatchOutcome {
    let mut found = FoundFlags::new();
    let mut rewritten = [0usize; 3];
    let mut out: Vec<String> = Vec::with_capacity(lines.len() + entries.len());

    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        match entries.iter().find(|e| e.key.matches(line)) {
            Some(entry) => {
                if found.mark(entry.key) {
                    warn!(
                        "duplicate {} define on line {}; rewriting it as well",
                        entry.key,
                        index + 1
                    );
                } else {
                    debug!("replacing {} define on line {}", entry.key, index + 1);
                }
                rewritten[entry.key as usize] += 1;
                out.push(entry.line.clone());
            }
            None => out.push(line.to_owned()),
        }
    }

    let missing: Vec<&ConfigEntry> = entries.iter().filter(|e| !found.is_found(e.key)).collect();

    if !missing.is_empty() {
        if let Some(last) = out.last_mut() {
            if !last.ends_with('\n') {
                last.push('\n');
            }
        }
    }

    let mut appended = Vec::with_capacity(missing.len());
    for entry in missing {
        debug!("appending {} define at end of header", entry.key);
        out.push(entry.line.clone());
        appended.push(entry.key);
    }

    PatchOutcome {
        lines: out,
        found,
        appended,
        rewritten,
    }
}
