//! EDS unpack pipeline
//!
//! Three stages run strictly forward: prepare the directories, stage every
//! source archive as a `.zip` copy, then extract and remove each copy.

mod discover;
mod extract;
mod materialize;
mod operations;
mod report;
mod sanitize;

use std::ffi::OsStr;
use std::path::Path;

use crate::error::{Error, Result};

/// File name suffix of source archives.
pub const SOURCE_SUFFIX: &str = ".eds";

/// File name suffix of staged archive copies.
pub const STAGED_SUFFIX: &str = ".zip";

// Primary public API
pub use operations::EdsOperations;

// Re-export the individual stages
pub use discover::{find_source_archives, find_staged_archives};
pub use extract::extract_staged_archives;
pub use materialize::materialize_archives;

// Re-export reporting types
pub use report::{BatchEdsResult, UnpackReport};

/// Strip `suffix` from the file name of `path`, rejecting empty results.
///
/// A file named exactly `.eds` would otherwise stage as `.zip` and extract
/// into the output directory itself.
pub(crate) fn base_name<'a>(path: &'a Path, suffix: &str) -> Result<&'a str> {
    let name = path
        .file_name()
        .and_then(OsStr::to_str)
        .ok_or_else(|| Error::NonUtf8Name {
            path: path.to_path_buf(),
        })?;

    let base = name.strip_suffix(suffix).unwrap_or(name);
    if base.is_empty() {
        return Err(Error::EmptyBaseName {
            path: path.to_path_buf(),
        });
    }

    Ok(base)
}
