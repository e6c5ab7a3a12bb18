//! Archive entry path sanitization
//!
//! Entry paths come straight out of the ZIP container and are untrusted. A
//! crafted entry such as `../../etc/cron.d/job` must never produce a write
//! outside the extraction directory, so unsafe components are rejected
//! instead of normalized away.

use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Resolve an entry path against the extraction directory.
///
/// Rejects absolute paths, path prefixes, and parent-directory components.
/// `.` components are dropped. The returned path is always strictly inside
/// `base`.
pub(super) fn entry_destination(entry: &str, base: &Path) -> Result<PathBuf> {
    let mut relative = PathBuf::new();

    for component in Path::new(entry).components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(Error::EntryPathEscapes {
                    entry: entry.to_string(),
                });
            }
        }
    }

    // An entry that resolves to the base itself has no name to write to.
    if relative.as_os_str().is_empty() {
        return Err(Error::EntryPathEscapes {
            entry: entry.to_string(),
        });
    }

    Ok(base.join(relative))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> &'static Path {
        Path::new("/data/out/widget")
    }

    #[test]
    fn relative_entries_resolve_under_the_base() {
        let resolved = entry_destination("sub/b.txt", base()).unwrap();
        assert_eq!(resolved, base().join("sub/b.txt"));
        assert!(resolved.starts_with(base()));
    }

    #[test]
    fn current_dir_components_are_dropped() {
        let resolved = entry_destination("./a/./b.txt", base()).unwrap();
        assert_eq!(resolved, base().join("a/b.txt"));
    }

    #[test]
    fn parent_dir_components_are_rejected() {
        let result = entry_destination("../escape.txt", base());
        assert!(matches!(result, Err(Error::EntryPathEscapes { .. })));
    }

    #[test]
    fn interior_parent_dir_components_are_rejected() {
        let result = entry_destination("sub/../../escape.txt", base());
        assert!(matches!(result, Err(Error::EntryPathEscapes { .. })));
    }

    #[test]
    fn absolute_entries_are_rejected() {
        let result = entry_destination("/etc/passwd", base());
        assert!(matches!(result, Err(Error::EntryPathEscapes { .. })));
    }

    #[test]
    fn empty_entries_are_rejected() {
        assert!(entry_destination("", base()).is_err());
        assert!(entry_destination("./", base()).is_err());
    }
}
