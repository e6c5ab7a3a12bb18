//! Non-recursive archive discovery
//!
//! Direct children only: the pipeline never descends into subdirectories of
//! the input or output directory.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{SOURCE_SUFFIX, STAGED_SUFFIX};

/// Find all source archives (`*.eds`) directly inside a directory
///
/// # Arguments
/// * `dir` - Directory to search
///
/// # Returns
/// A sorted list of files whose name ends with the case-sensitive `.eds`
/// suffix. Subdirectories are not searched; a missing directory yields an
/// empty list.
pub fn find_source_archives<P: AsRef<Path>>(dir: P) -> Vec<PathBuf> {
    find_with_suffix(dir.as_ref(), SOURCE_SUFFIX)
}

/// Find all staged archives (`*.zip`) directly inside a directory
///
/// Matches every `.zip` in the directory, including files that were not
/// staged by the current run.
pub fn find_staged_archives<P: AsRef<Path>>(dir: P) -> Vec<PathBuf> {
    find_with_suffix(dir.as_ref(), STAGED_SUFFIX)
}

fn find_with_suffix(dir: &Path, suffix: &str) -> Vec<PathBuf> {
    let mut files: Vec<_> = WalkDir::new(dir)
        .follow_links(true)
        .min_depth(1) // Skip the directory itself
        .max_depth(1) // Direct children only
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| {
            e.path().is_file()
                && e.file_name()
                    .to_str()
                    .is_some_and(|name| name.ends_with(suffix))
        })
        .map(|e| e.path().to_path_buf())
        .collect();

    files.sort();
    files
}
