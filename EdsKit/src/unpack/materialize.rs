//! Stage 2: stage source archives as `.zip` copies
//!
//! Copies are byte-for-byte and carry permission bits (`std::fs::copy`).
//! An existing destination file is silently overwritten.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

use super::report::BatchEdsResult;
use super::{SOURCE_SUFFIX, STAGED_SUFFIX, base_name};

/// Copy each source archive to `<output_dir>/<base>.zip`
///
/// Failures are recorded per file; the batch always runs to the end.
///
/// # Arguments
/// * `sources` - Source archives to stage, as found by
///   [`find_source_archives`](super::find_source_archives)
/// * `output_dir` - Existing directory that receives the copies
///
/// # Returns
/// Summary of the staging stage.
pub fn materialize_archives(sources: &[PathBuf], output_dir: &Path) -> BatchEdsResult {
    let mut batch = BatchEdsResult::default();

    for source in sources {
        match materialize_one(source, output_dir) {
            Ok(staged) => {
                tracing::debug!("staged {} as {}", source.display(), staged.display());
                batch.record_success(format!("Staged: {}", staged.display()));
            }
            Err(e) => {
                tracing::warn!("Failed to stage {}: {}", source.display(), e);
                batch.record_failure(format!("Failed {}: {e}", source.display()));
            }
        }
    }

    batch
}

fn materialize_one(source: &Path, output_dir: &Path) -> Result<PathBuf> {
    let base = base_name(source, SOURCE_SUFFIX)?;
    let staged = output_dir.join(format!("{base}{STAGED_SUFFIX}"));
    fs::copy(source, &staged)?;
    Ok(staged)
}
