//! Stage 3: extract staged archives and clean up
//!
//! Each staged `.zip` is expanded into a same-named subdirectory of the
//! output directory, reconstructing the entry paths stored in the container.
//! A staged archive is removed as soon as its own extraction succeeds; a
//! failed archive is left on disk and reported.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use zip::ZipArchive;

use crate::error::Result;

use super::report::BatchEdsResult;
use super::sanitize::entry_destination;
use super::{STAGED_SUFFIX, base_name};

/// Extract every staged archive into its extraction directory
///
/// Runs the whole list regardless of individual failures.
///
/// # Arguments
/// * `archives` - Staged archives to extract, as found by
///   [`find_staged_archives`](super::find_staged_archives)
/// * `output_dir` - Existing directory that holds the extraction directories
///
/// # Returns
/// Summary of the extraction stage.
pub fn extract_staged_archives(archives: &[PathBuf], output_dir: &Path) -> BatchEdsResult {
    let mut batch = BatchEdsResult::default();

    for archive in archives {
        let destination = match extract_one(archive, output_dir) {
            Ok(destination) => destination,
            Err(e) => {
                tracing::warn!("Failed to extract {}: {}", archive.display(), e);
                batch.record_failure(format!("Failed {}: {e}", archive.display()));
                continue;
            }
        };

        // The staged copy is transient: remove it as soon as its extraction
        // succeeded, not in a deferred pass over the whole list.
        if let Err(e) = fs::remove_file(archive) {
            tracing::warn!("Failed to remove {}: {}", archive.display(), e);
            batch.record_failure(format!(
                "Extracted {} but failed to remove staged copy: {e}",
                destination.display()
            ));
            continue;
        }

        tracing::debug!("extracted {} to {}", archive.display(), destination.display());
        batch.record_success(format!("Extracted: {}", destination.display()));
    }

    batch
}

/// Extract one archive, reusing the extraction directory if it exists.
///
/// Files already present in the extraction directory may be overwritten.
/// The archive handle is released when this function returns, on success
/// and failure alike.
fn extract_one(archive: &Path, output_dir: &Path) -> Result<PathBuf> {
    let base = base_name(archive, STAGED_SUFFIX)?;
    let destination = output_dir.join(base);
    fs::create_dir_all(&destination)?;

    let mut container = ZipArchive::new(File::open(archive)?)?;

    for index in 0..container.len() {
        let mut entry = container.by_index(index)?;
        let target = entry_destination(entry.name(), &destination)?;

        if entry.is_dir() {
            fs::create_dir_all(&target)?;
            continue;
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut out = File::create(&target)?;
        std::io::copy(&mut entry, &mut out)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Some(mode) = entry.unix_mode() {
                fs::set_permissions(&target, fs::Permissions::from_mode(mode))?;
            }
        }
    }

    Ok(destination)
}
