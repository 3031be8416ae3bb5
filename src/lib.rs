//! # img2b64
//!
//! Batch-encode a directory of images into base64 text artifacts and
//! relocate the originals alongside them.
//!
//! Each `.png`, `.jpg`, or `.jpeg` file (matched case-insensitively, by
//! name only) in the input directory is read, encoded with the standard
//! base64 alphabet, written to `<output_dir>/<stem>.txt`, and then the
//! image itself is moved to `<output_dir>/<name>`. The run is one-shot
//! and sequential: it walks a static snapshot of the input directory,
//! converts what it finds, and returns.
//!
//! ## Pipeline Overview
//!
//! ```text
//! pre_encoded_imgs/
//!  │
//!  ├─ 1. Scan    enumerate entries, keep .png / .jpg / .jpeg
//!  ├─ 2. Encode  read bytes, produce standard base64 text
//!  └─ 3. Emit    write <stem>.txt, move the image → encoded_imgs/
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use img2b64::{convert, ConvertConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConvertConfig::builder()
//!         .input_dir("pre_encoded_imgs")
//!         .output_dir("encoded_imgs")
//!         .build()?;
//!     let output = convert(&config)?;
//!     println!(
//!         "{}/{} images converted in {}ms",
//!         output.stats.converted, output.stats.candidates, output.stats.total_duration_ms
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Failure model
//!
//! The default is abort-on-first-error: any I/O failure stops the run and
//! already-processed files keep their post-move state (rerunning is the
//! recovery path). Opt into `continue_on_error` to record per-file
//! failures in the output and keep going.
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `img2b64` binary (clap + anyhow + tracing-subscriber + indicatif) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only
//! deps:
//! ```toml
//! img2b64 = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod progress;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConvertConfig, ConvertConfigBuilder, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};
pub use convert::convert;
pub use error::{FileError, Img2B64Error};
pub use output::{ConversionOutput, ConversionStats, FileResult};
pub use progress::{ConvertProgressCallback, NoopProgressCallback, ProgressCallback};
