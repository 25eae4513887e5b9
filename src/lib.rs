pub mod detector;
pub mod error;
pub mod fileset;
pub mod lsb_release;
pub mod os_release;
pub mod redhat_release;
pub mod registry;

pub use detector::{Detection, FileSet, OsDetector};
pub use error::{Error, Result};
pub use registry::DetectorSet;
