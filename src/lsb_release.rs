use crate::detector::{Detection, FileSet, OsDetector, scan_key_value};

/// Detects the OS from `etc/lsb-release`, as shipped by Ubuntu and its
/// derivatives.
#[derive(Debug, Default, Clone, Copy)]
pub struct LsbReleaseDetector;

impl LsbReleaseDetector {
    pub const NAME: &'static str = "lsb-release";
    pub const FILES: &'static [&'static str] = &["etc/lsb-release"];
}

impl OsDetector for LsbReleaseDetector {
    fn required_files(&self) -> &'static [&'static str] {
        Self::FILES
    }

    fn detect(&self, files: &FileSet) -> Detection {
        scan_key_value(files, Self::FILES, "DISTRIB_ID=", "DISTRIB_RELEASE=")
    }
}
