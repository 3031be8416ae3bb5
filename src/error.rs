//! Error types for the img2b64 library.
//!
//! Two distinct error types reflect two distinct failure modes:
//!
//! * [`Img2B64Error`] — **Fatal**: the run cannot or must not continue
//!   (unreadable input directory, invalid configuration, or any per-file
//!   I/O failure in the default abort-on-first-error mode). Returned as
//!   `Err(Img2B64Error)` from [`crate::convert::convert`].
//!
//! * [`FileError`] — **Non-fatal**: a single image failed while
//!   `continue_on_error` is set, but the rest of the run is fine. Stored
//!   inside [`crate::output::FileResult`] so callers can inspect partial
//!   success rather than losing the whole batch to one bad file.
//!
//! The separation lets callers decide their own tolerance: abort on the
//! first failure (the default), or opt into collecting failures for a
//! post-run summary.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the img2b64 library.
///
/// Per-file failures in continue-on-error runs use [`FileError`] and are
/// stored in [`crate::output::FileResult`] rather than propagated here.
#[derive(Debug, Error)]
pub enum Img2B64Error {
    // ── Input errors ──────────────────────────────────────────────────────
    /// The input directory could not be opened or enumerated.
    #[error("Cannot read input directory '{path}': {source}\nCheck the path exists and is readable.")]
    InputDirUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An enumerated image could not be read.
    #[error("Failed to read source image '{path}': {source}")]
    SourceReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Output errors ─────────────────────────────────────────────────────
    /// The output directory did not exist and could not be created.
    #[error("Failed to create output directory '{path}': {source}")]
    OutputDirCreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The base64 text artifact could not be created or written.
    #[error("Failed to write text artifact '{path}': {source}")]
    ArtifactWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The original image could not be relocated into the output directory.
    #[error("Failed to move '{from}' to '{to}': {source}")]
    MoveFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Every candidate failed in a continue-on-error run; nothing was
    /// converted, so the run as a whole is reported as an error.
    #[error("All {total} candidate images failed.\nFirst error: {first_error}")]
    AllFilesFailed { total: usize, first_error: String },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// A non-fatal error for a single image.
///
/// Only produced when `continue_on_error` is set; stored alongside the
/// file's [`crate::output::FileResult`]. The run continues unless ALL
/// candidates fail.
#[derive(Debug, Clone, Error, serde::Serialize, serde::Deserialize)]
pub enum FileError {
    /// The source image could not be read.
    #[error("'{name}': read failed: {detail}")]
    Read { name: String, detail: String },

    /// The text artifact could not be written.
    #[error("'{name}': artifact write failed: {detail}")]
    Write { name: String, detail: String },

    /// The original image could not be moved.
    #[error("'{name}': move failed: {detail}")]
    Move { name: String, detail: String },
}

impl FileError {
    /// The file name the error belongs to.
    pub fn file_name(&self) -> &str {
        match self {
            FileError::Read { name, .. }
            | FileError::Write { name, .. }
            | FileError::Move { name, .. } => name,
        }
    }
}
