//! Image encoding: file bytes → standard base64 text.
//!
//! The whole file is read in one pass; streaming buys nothing for
//! photo-sized inputs and would complicate the artifact contract, which
//! is a single unwrapped ASCII line per image.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::io;
use std::path::Path;
use tracing::debug;

/// The encoded form of one image.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    /// Standard-alphabet base64 text, `=`-padded, no line wrapping.
    pub text: String,
    /// Size of the source file in bytes.
    pub source_len: u64,
}

/// Read the file at `path` fully and return its base64 encoding.
///
/// I/O errors (missing path, unreadable file) propagate untouched; the
/// caller attaches path context. No side effects beyond the read.
pub fn encode_file(path: &Path) -> io::Result<EncodedImage> {
    let bytes = std::fs::read(path)?;
    let text = STANDARD.encode(&bytes);
    debug!(
        "Encoded {} ({} bytes → {} chars base64)",
        path.display(),
        bytes.len(),
        text.len()
    );
    Ok(EncodedImage {
        text,
        source_len: bytes.len() as u64,
    })
}
