use crate::detector::{Detection, FileSet, OsDetector};

/// Detects the OS from the one-line `*-release` files of Red Hat family
/// distributions, e.g. `CentOS Linux release 7.2.1511 (Core)`.
///
/// Only the major version is reported. Files are tried in order and the
/// first one that matches wins.
#[derive(Debug, Default, Clone, Copy)]
pub struct RedhatReleaseDetector;

impl RedhatReleaseDetector {
    pub const NAME: &'static str = "redhat-release";
    pub const FILES: &'static [&'static str] = &[
        "etc/oracle-release",
        "etc/centos-release",
        "etc/redhat-release",
        "etc/system-release",
    ];
}

impl OsDetector for RedhatReleaseDetector {
    fn required_files(&self) -> &'static [&'static str] {
        Self::FILES
    }

    fn detect(&self, files: &FileSet) -> Detection {
        for &path in Self::FILES {
            let Some(content) = files.get(path) else {
                continue;
            };
            if let Some(detection) = parse_release_line(&String::from_utf8_lossy(content)) {
                tracing::debug!(path, os = %detection.os, version = %detection.version, "matched release line");
                return detection;
            }
            tracing::debug!(path, "no release line found");
        }
        Detection::default()
    }
}

/// Finds `<os> [Linux] release <major>...` in `text`.
fn parse_release_line(text: &str) -> Option<Detection> {
    let words: Vec<&str> = text.split_whitespace().collect();

    for (i, _) in words.iter().enumerate().filter(|(_, w)| **w == "release") {
        let Some(major) = words.get(i + 1).map(|w| leading_digits(w)) else {
            continue;
        };
        if major.is_empty() {
            continue;
        }

        let os_index = match i.checked_sub(1) {
            Some(j) if words[j] == "Linux" => j.checked_sub(1),
            other => other,
        };
        if let Some(os_index) = os_index {
            return Some(Detection::new(words[os_index].to_lowercase(), major));
        }
    }
    None
}

fn leading_digits(word: &str) -> &str {
    let end = word
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(word.len());
    &word[..end]
}
