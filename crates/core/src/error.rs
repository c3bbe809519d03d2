//! Error Types.
//!
//! Only two error classes are reportable at runtime: a configuration error
//! (unknown format tag, surfaced by the CLI collaborator) and an output
//! I/O failure. Encoding invariant violations — an operand outside its
//! field's declared width — are programming defects and panic instead of
//! surfacing here.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures reportable to the caller of a generation request.
#[derive(Debug, Error)]
pub enum GenError {
    /// An output artifact could not be created at the destination path.
    #[error("failed to create output file {path}: {source}")]
    Create {
        /// The destination that could not be created.
        path: PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },

    /// Writing an already-open output artifact failed.
    #[error("failed to write output artifact")]
    Write(#[from] io::Error),
}
