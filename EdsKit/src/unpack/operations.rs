//! Pipeline orchestration

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

use super::discover::{find_source_archives, find_staged_archives};
use super::extract::extract_staged_archives;
use super::materialize::materialize_archives;
use super::report::UnpackReport;

/// High-level EDS unpack operations.
pub struct EdsOperations;

impl EdsOperations {
    /// Run the full unpack pipeline
    ///
    /// Validates the input path, prepares the output directory, stages every
    /// `.eds` source as a `.zip` copy, then extracts and removes each copy.
    /// Per-file failures inside the stages never abort the run; they are
    /// reported through the returned [`UnpackReport`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputPathMissing`] if the input path does not exist.
    /// Returns [`Error::Io`] if the output directory cannot be created.
    ///
    /// [`Error::InputPathMissing`]: crate::Error::InputPathMissing
    /// [`Error::Io`]: crate::Error::Io
    pub fn unpack<P: AsRef<Path>>(input_dir: P, output_dir: P) -> Result<UnpackReport> {
        let input_dir = input_dir.as_ref();
        let output_dir = output_dir.as_ref();

        // Stage 1: directory preparation. The input check runs before any
        // side effect on the output path.
        if !input_dir.exists() {
            return Err(Error::InputPathMissing {
                path: input_dir.to_path_buf(),
            });
        }
        fs::create_dir_all(output_dir)?;

        // Stage 2: stage sources as .zip copies.
        let sources = find_source_archives(input_dir);
        tracing::info!(
            "found {} source archive(s) in {}",
            sources.len(),
            input_dir.display()
        );
        let staged = materialize_archives(&sources, output_dir);

        // Stage 3: extract whatever .zip files the output directory now
        // holds, including copies that predate this run.
        let archives = find_staged_archives(output_dir);
        let extracted = extract_staged_archives(&archives, output_dir);

        Ok(UnpackReport { staged, extracted })
    }
}
