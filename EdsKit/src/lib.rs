//! # EdsKit
//!
//! A small pure-Rust library for batch-unpacking EDS capture archives.
//!
//! EDS captures are plain ZIP containers behind a proprietary extension. The
//! pipeline stages every `.eds` file found directly inside an input directory
//! as a `.zip` copy in an output directory, extracts each copy into a
//! same-named subdirectory, and removes the copy once its own extraction
//! succeeds. Source files are never modified.
//!
//! ## Quick Start
//!
//! ```no_run
//! use edskit::unpack::EdsOperations;
//!
//! let report = EdsOperations::unpack("captures/", "unpacked/")?;
//! println!(
//!     "staged {} archive(s), extracted {}",
//!     report.staged.success_count, report.extracted.success_count,
//! );
//! # Ok::<(), edskit::Error>(())
//! ```
//!
//! Per-file failures never abort a batch: they are counted and reported
//! through [`unpack::UnpackReport`], and a staged copy whose extraction
//! failed is left on disk for inspection.

pub mod error;
pub mod unpack;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::unpack::{
        BatchEdsResult, EdsOperations, UnpackReport, find_source_archives, find_staged_archives,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
