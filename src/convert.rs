//! Batch conversion entry point.
//!
//! One-shot and strictly sequential: each image is fully read, encoded,
//! written, and moved before the next is considered. There is no rollback;
//! a fatal error mid-run leaves already-processed files in their post-move
//! state, and rerunning is the recovery path (moved files are no longer
//! candidates, so a rerun simply skips them).

use crate::config::ConvertConfig;
use crate::error::{FileError, Img2B64Error};
use crate::output::{ConversionOutput, ConversionStats, FileResult};
use crate::pipeline::{emit, encode, scan};
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

/// Convert every image in `config.input_dir` into a base64 text artifact
/// in `config.output_dir`, moving each original alongside its artifact.
///
/// This is the primary entry point for the library.
///
/// # Returns
/// `Ok(ConversionOutput)` when the run completed. In continue-on-error
/// mode this includes runs with per-file failures (check
/// `output.stats.failed`).
///
/// # Errors
/// Returns `Err(Img2B64Error)` for fatal conditions:
/// - the input directory cannot be enumerated
/// - the output directory cannot be created
/// - any per-file I/O failure in the default abort-on-first-error mode
/// - every candidate failed in a continue-on-error run
pub fn convert(config: &ConvertConfig) -> Result<ConversionOutput, Img2B64Error> {
    let total_start = Instant::now();
    let input_dir = config.input_dir.as_path();
    let output_dir = config.output_dir.as_path();
    info!(
        "Starting conversion: {} → {}",
        input_dir.display(),
        output_dir.display()
    );

    if let Some(ref cb) = config.progress_callback {
        cb.on_run_start(input_dir, output_dir);
    }

    // ── Step 1: Prepare output directory ─────────────────────────────────
    let output_dir_created = prepare_output_dir(config)?;

    // ── Step 2: Enumerate candidates ─────────────────────────────────────
    let candidates =
        scan::scan_dir(input_dir).map_err(|e| Img2B64Error::InputDirUnreadable {
            path: input_dir.to_path_buf(),
            source: e,
        })?;

    // ── Step 3: Process each candidate in listing order ──────────────────
    let mut files: Vec<FileResult> = Vec::new();
    let mut converted = 0usize;
    let mut failed = 0usize;
    let mut bytes_read = 0u64;
    let mut first_error: Option<String> = None;

    for candidate in candidates {
        let candidate = candidate.map_err(|e| Img2B64Error::InputDirUnreadable {
            path: input_dir.to_path_buf(),
            source: e,
        })?;

        if let Some(ref cb) = config.progress_callback {
            cb.on_file_start(&candidate.file_name);
        }

        let artifact_path = output_dir.join(candidate.artifact_file_name());
        let image_path = output_dir.join(&candidate.file_name);

        if config.dry_run {
            info!(
                "[dry-run] Would convert '{}' into {}",
                candidate.file_name,
                output_dir.display()
            );
            if let Some(ref cb) = config.progress_callback {
                cb.on_file_complete(&candidate.file_name, output_dir, 0);
            }
            files.push(FileResult {
                file_name: candidate.file_name,
                artifact_path,
                image_path,
                bytes_read: 0,
                text_len: 0,
                error: None,
            });
            continue;
        }

        match process_file(&candidate, &artifact_path, &image_path) {
            Ok(result) => {
                info!(
                    "Converted '{}'; artifact and original saved to {}",
                    result.file_name,
                    output_dir.display()
                );
                if let Some(ref cb) = config.progress_callback {
                    cb.on_file_complete(&result.file_name, output_dir, result.text_len);
                }
                converted += 1;
                bytes_read += result.bytes_read;
                files.push(result);
            }
            Err(err) if !config.continue_on_error => return Err(err),
            Err(err) => {
                let file_error = demote(&candidate.file_name, &err);
                warn!("Skipping '{}': {}", candidate.file_name, err);
                if let Some(ref cb) = config.progress_callback {
                    cb.on_file_error(&candidate.file_name, file_error.to_string());
                }
                failed += 1;
                first_error.get_or_insert_with(|| file_error.to_string());
                files.push(FileResult {
                    file_name: candidate.file_name,
                    artifact_path,
                    image_path,
                    bytes_read: 0,
                    text_len: 0,
                    error: Some(file_error),
                });
            }
        }
    }

    // A continue-on-error run where nothing succeeded is still a failure.
    if failed > 0 && converted == 0 {
        return Err(Img2B64Error::AllFilesFailed {
            total: failed,
            first_error: first_error.unwrap_or_else(|| "unknown".to_string()),
        });
    }

    let stats = ConversionStats {
        candidates: files.len(),
        converted,
        failed,
        bytes_read,
        total_duration_ms: total_start.elapsed().as_millis() as u64,
        output_dir_created,
    };

    info!(
        "Conversion complete: {}/{} images, {}ms total",
        converted, stats.candidates, stats.total_duration_ms
    );

    if let Some(ref cb) = config.progress_callback {
        cb.on_run_complete(stats.candidates, converted);
    }

    Ok(ConversionOutput { files, stats })
}

// ── Internal helpers ─────────────────────────────────────────────────────

/// Create the output directory when absent, notifying exactly once.
///
/// Returns whether the directory was created by this call. Dry runs never
/// create it.
fn prepare_output_dir(config: &ConvertConfig) -> Result<bool, Img2B64Error> {
    let output_dir = config.output_dir.as_path();
    if output_dir.is_dir() {
        return Ok(false);
    }
    if config.dry_run {
        info!(
            "[dry-run] Would create output directory {}",
            output_dir.display()
        );
        return Ok(false);
    }
    std::fs::create_dir_all(output_dir).map_err(|e| Img2B64Error::OutputDirCreateFailed {
        path: output_dir.to_path_buf(),
        source: e,
    })?;
    info!("Created output directory {}", output_dir.display());
    if let Some(ref cb) = config.progress_callback {
        cb.on_output_dir_created(output_dir);
    }
    Ok(true)
}

/// Encode, write the artifact, then move the original. Any failure leaves
/// the stages already completed in place.
fn process_file(
    candidate: &scan::Candidate,
    artifact_path: &Path,
    image_path: &Path,
) -> Result<FileResult, Img2B64Error> {
    let encoded = encode::encode_file(&candidate.source_path).map_err(|e| {
        Img2B64Error::SourceReadFailed {
            path: candidate.source_path.clone(),
            source: e,
        }
    })?;

    emit::write_artifact(artifact_path, &encoded.text).map_err(|e| {
        Img2B64Error::ArtifactWriteFailed {
            path: artifact_path.to_path_buf(),
            source: e,
        }
    })?;

    emit::move_original(&candidate.source_path, image_path).map_err(|e| {
        Img2B64Error::MoveFailed {
            from: candidate.source_path.clone(),
            to: image_path.to_path_buf(),
            source: e,
        }
    })?;

    Ok(FileResult {
        file_name: candidate.file_name.clone(),
        artifact_path: artifact_path.to_path_buf(),
        image_path: image_path.to_path_buf(),
        bytes_read: encoded.source_len,
        text_len: encoded.text.len(),
        error: None,
    })
}

/// Map a per-file fatal error to its non-fatal form for continue-on-error
/// runs. Only the three per-file variants reach this in practice.
fn demote(file_name: &str, err: &Img2B64Error) -> FileError {
    let name = file_name.to_string();
    match err {
        Img2B64Error::SourceReadFailed { source, .. } => FileError::Read {
            name,
            detail: source.to_string(),
        },
        Img2B64Error::ArtifactWriteFailed { source, .. } => FileError::Write {
            name,
            detail: source.to_string(),
        },
        Img2B64Error::MoveFailed { source, .. } => FileError::Move {
            name,
            detail: source.to_string(),
        },
        other => FileError::Read {
            name,
            detail: other.to_string(),
        },
    }
}
