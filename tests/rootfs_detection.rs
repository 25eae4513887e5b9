use os_fingerprint::fileset::load_from_root;
use os_fingerprint::os_release::OsReleaseDetector;
use os_fingerprint::{Detection, DetectorSet, Error, OsDetector};
use std::fs;
use std::path::Path;

fn write(root: &Path, path: &str, content: &[u8]) {
    let full = root.join(path);
    fs::create_dir_all(full.parent().unwrap()).unwrap();
    fs::write(full, content).unwrap();
}

#[test]
fn detect_debian_rootfs() {
    let root = tempfile::tempdir().unwrap();
    let mock_data = r#"PRETTY_NAME="Debian GNU/Linux 9 (stretch)"
NAME="Debian GNU/Linux"
VERSION_ID="9"
VERSION="9 (stretch)"
ID=debian
HOME_URL="https://www.debian.org/"
"#;
    write(root.path(), "usr/lib/os-release", mock_data.as_bytes());

    let set = DetectorSet::with_defaults();
    let files = load_from_root(root.path(), &set.required_files()).unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files["usr/lib/os-release"], mock_data.as_bytes());

    let (name, detection) = set.detect(&files).unwrap();
    assert_eq!(name, "os-release");
    assert_eq!(detection, Detection::new("debian", "9"));
}

#[test]
fn both_os_release_files_present() {
    let root = tempfile::tempdir().unwrap();
    write(root.path(), "etc/os-release", b"ID=debian\nVERSION_ID=\"8\"\n");
    write(root.path(), "usr/lib/os-release", b"ID=ubuntu\nVERSION_ID=\"16.04\"\n");

    let files = load_from_root(root.path(), OsReleaseDetector::FILES).unwrap();
    assert_eq!(
        OsReleaseDetector.detect(&files),
        Detection::new("ubuntu", "16.04")
    );
}

#[test]
fn falls_back_to_redhat_release() {
    let root = tempfile::tempdir().unwrap();
    // No VERSION_ID, so os-release only gives a partial answer.
    write(root.path(), "etc/os-release", b"ID=\"centos\"\n");
    write(root.path(), "etc/centos-release", b"CentOS Linux release 7.2.1511 (Core)\n");

    let set = DetectorSet::with_defaults();
    let files = load_from_root(root.path(), &set.required_files()).unwrap();
    let (name, detection) = set.detect(&files).unwrap();
    assert_eq!(name, "redhat-release");
    assert_eq!(detection, Detection::new("centos", "7"));
}

#[test]
fn empty_rootfs() {
    let root = tempfile::tempdir().unwrap();
    let set = DetectorSet::with_defaults();
    let files = load_from_root(root.path(), &set.required_files()).unwrap();
    assert!(files.is_empty());
    assert!(set.detect(&files).is_none());
}

#[test]
fn unreadable_path_is_an_error() {
    let root = tempfile::tempdir().unwrap();
    // A directory where a file is expected cannot be read as a file.
    fs::create_dir_all(root.path().join("etc/os-release")).unwrap();

    let err = load_from_root(root.path(), OsReleaseDetector::FILES).unwrap_err();
    assert!(matches!(err, Error::Io { ref path, .. } if path.ends_with("os-release")));
}

#[test]
fn detectors_are_shareable_across_threads() {
    let set = std::sync::Arc::new(DetectorSet::with_defaults());
    let files = std::sync::Arc::new(os_fingerprint::FileSet::from([(
        "etc/os-release".to_string(),
        b"ID=alpine\nVERSION_ID=3.4.0\n".to_vec(),
    )]));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let set = set.clone();
            let files = files.clone();
            std::thread::spawn(move || set.detect(&files).map(|(_, d)| d))
        })
        .collect();

    for handle in handles {
        assert_eq!(
            handle.join().unwrap(),
            Some(Detection::new("alpine", "3.4.0"))
        );
    }
}
