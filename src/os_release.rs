use crate::detector::{Detection, FileSet, OsDetector, scan_key_value};

/// Detects the OS from `os-release(5)` files.
///
/// Both locations are scanned, `etc/os-release` first. Keys defined again in
/// `usr/lib/os-release` override the earlier values.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsReleaseDetector;

impl OsReleaseDetector {
    pub const NAME: &'static str = "os-release";
    pub const FILES: &'static [&'static str] = &["etc/os-release", "usr/lib/os-release"];
}

impl OsDetector for OsReleaseDetector {
    fn required_files(&self) -> &'static [&'static str] {
        Self::FILES
    }

    fn detect(&self, files: &FileSet) -> Detection {
        scan_key_value(files, Self::FILES, "ID=", "VERSION_ID=")
    }
}
