use crate::detector::{Detection, FileSet, OsDetector};
use crate::error::{Error, Result};
use crate::lsb_release::LsbReleaseDetector;
use crate::os_release::OsReleaseDetector;
use crate::redhat_release::RedhatReleaseDetector;

/// Named OS detectors, kept in registration order.
///
/// Built once by the host and then only read.
#[derive(Default)]
pub struct DetectorSet {
    detectors: Vec<(String, Box<dyn OsDetector>)>,
}

impl DetectorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// All detectors shipped with this crate, `os-release` first.
    pub fn with_defaults() -> Self {
        let mut set = Self::new();
        set.push(OsReleaseDetector::NAME, Box::new(OsReleaseDetector));
        set.push(LsbReleaseDetector::NAME, Box::new(LsbReleaseDetector));
        set.push(RedhatReleaseDetector::NAME, Box::new(RedhatReleaseDetector));
        set
    }

    fn push(&mut self, name: &str, detector: Box<dyn OsDetector>) {
        self.detectors.push((name.to_string(), detector));
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        detector: Box<dyn OsDetector>,
    ) -> Result<()> {
        let name = name.into();
        if self.get(&name).is_some() {
            return Err(Error::DuplicateDetector(name));
        }
        tracing::debug!(detector = %name, "registered");
        self.detectors.push((name, detector));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&dyn OsDetector> {
        self.detectors
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, d)| d.as_ref())
    }

    pub fn names(&self) -> Vec<&str> {
        self.detectors.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.detectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detectors.is_empty()
    }

    /// Union of the files every detector needs, in first-seen order.
    pub fn required_files(&self) -> Vec<&'static str> {
        let mut files: Vec<&'static str> = Vec::new();
        for (_, detector) in &self.detectors {
            for &path in detector.required_files() {
                if !files.contains(&path) {
                    files.push(path);
                }
            }
        }
        files
    }

    /// Runs the detectors in order and returns the first one that found both
    /// an OS and a version.
    pub fn detect(&self, files: &FileSet) -> Option<(&str, Detection)> {
        for (name, detector) in &self.detectors {
            let detection = detector.detect(files);
            if detection.is_complete() {
                return Some((name.as_str(), detection));
            }
            if !detection.is_empty() {
                tracing::debug!(
                    detector = %name,
                    os = %detection.os,
                    version = %detection.version,
                    "skipping partial detection"
                );
            }
        }
        None
    }
}
