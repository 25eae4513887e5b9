use serde::Serialize;
use std::collections::HashMap;

/// Raw file contents keyed by path relative to the filesystem root,
/// e.g. `etc/os-release`.
pub type FileSet = HashMap<String, Vec<u8>>;

/// Operating system identity found by a detector.
///
/// Fields are empty when the detector found no value for them.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Detection {
    pub os: String,
    pub version: String,
}

impl Detection {
    pub fn new(os: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            version: version.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.os.is_empty() && self.version.is_empty()
    }

    /// Both the OS and its version were found.
    pub fn is_complete(&self) -> bool {
        !self.os.is_empty() && !self.version.is_empty()
    }
}

/// Common interface for OS detectors.
///
/// Implementations are stateless: `detect` only reads its input, so a single
/// instance can be shared between threads.
pub trait OsDetector: Send + Sync {
    /// Paths this detector wants to look at, in scan order.
    fn required_files(&self) -> &'static [&'static str];

    fn detect(&self, files: &FileSet) -> Detection;
}

/// Returns the value of `line` after `key`, lowercased and with every `"`
/// removed, if the line starts with `key`.
///
/// Lowercasing is per character, with no context-sensitive rules such as the
/// Greek final sigma.
pub(crate) fn match_key(line: &str, key: &str) -> Option<String> {
    line.strip_prefix(key).map(|rest| {
        rest.chars()
            .flat_map(char::to_lowercase)
            .filter(|&c| c != '"')
            .collect()
    })
}

/// Scans `paths` in order and applies `ID`-style key matching line by line.
///
/// Shared by the key-value detectors. Absent files are skipped and the last
/// match for each key wins, across lines and across files.
pub(crate) fn scan_key_value(
    files: &FileSet,
    paths: &[&str],
    os_key: &str,
    version_key: &str,
) -> Detection {
    let mut detection = Detection::default();

    for &path in paths {
        let Some(content) = files.get(path) else {
            tracing::debug!(path, "required file not present");
            continue;
        };
        tracing::trace!(path, bytes = content.len(), "scanning");

        let text = String::from_utf8_lossy(content);
        for line in text.lines() {
            // `lines` keeps a lone `\r` on a final line without `\n`.
            let line = line.strip_suffix('\r').unwrap_or(line);
            if let Some(os) = match_key(line, os_key) {
                tracing::debug!(path, os = %os, "matched {}", os_key);
                detection.os = os;
            }
            if let Some(version) = match_key(line, version_key) {
                tracing::debug!(path, version = %version, "matched {}", version_key);
                detection.version = version;
            }
        }
    }

    detection
}
