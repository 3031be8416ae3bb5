//! Result types returned by a conversion run.
//!
//! [`ConversionOutput`] is what [`crate::convert::convert`] hands back:
//! one [`FileResult`] per candidate plus aggregate [`ConversionStats`].
//! Everything is serde-serialisable so the CLI's `--json` mode can print
//! the run verbatim.

use crate::error::FileError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Outcome for one candidate image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileResult {
    /// File name inside the input directory, e.g. `cat.png`.
    pub file_name: String,

    /// Path of the base64 text artifact, e.g. `encoded_imgs/cat.txt`.
    pub artifact_path: PathBuf,

    /// Path the original image was moved to, e.g. `encoded_imgs/cat.png`.
    pub image_path: PathBuf,

    /// Size of the source image in bytes. Zero for dry runs and failures.
    pub bytes_read: u64,

    /// Byte length of the base64 text. Zero for dry runs and failures.
    pub text_len: usize,

    /// The failure, when the file failed in a continue-on-error run.
    pub error: Option<FileError>,
}

impl FileResult {
    /// Whether this file was fully processed.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Aggregate statistics for one run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Entries that matched the image filter.
    pub candidates: usize,

    /// Candidates fully processed (artifact written, original moved).
    pub converted: usize,

    /// Candidates that failed (continue-on-error runs only; the default
    /// mode aborts instead of counting).
    pub failed: usize,

    /// Total source bytes read across all converted images.
    pub bytes_read: u64,

    /// Wall-clock duration of the run in milliseconds.
    pub total_duration_ms: u64,

    /// Whether this run created the output directory.
    pub output_dir_created: bool,
}

/// Everything a run produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionOutput {
    /// Per-file outcomes, in enumeration order.
    pub files: Vec<FileResult>,

    /// Aggregate statistics.
    pub stats: ConversionStats,
}
