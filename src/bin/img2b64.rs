//! CLI binary for img2b64.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ConvertConfig` and prints results.

use anyhow::{Context, Result};
use clap::Parser;
use img2b64::{
    convert, ConvertConfig, ConvertProgressCallback, ProgressCallback, DEFAULT_INPUT_DIR,
    DEFAULT_OUTPUT_DIR,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}
fn cyan(s: &str) -> String {
    format!("\x1b[36m{s}\x1b[0m")
}

// ── CLI progress callback using indicatif ────────────────────────────────────

/// Terminal progress callback: a spinner anchored at the bottom of the
/// terminal plus one log line per file, printed through the spinner so
/// the two never interleave. The candidate count is unknown until the
/// scan is exhausted, so there is no bounded bar.
struct CliProgressCallback {
    bar: ProgressBar,
    errors: AtomicUsize,
}

impl CliProgressCallback {
    fn new() -> Arc<Self> {
        let bar = ProgressBar::new_spinner();
        let spinner_style = ProgressStyle::with_template("{spinner:.cyan} {prefix:.bold}  {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]);
        bar.set_style(spinner_style);
        bar.set_prefix("Converting");
        bar.enable_steady_tick(Duration::from_millis(80));

        Arc::new(Self {
            bar,
            errors: AtomicUsize::new(0),
        })
    }
}

impl ConvertProgressCallback for CliProgressCallback {
    fn on_run_start(&self, input_dir: &Path, output_dir: &Path) {
        self.bar.println(format!(
            "{} {}",
            cyan("◆"),
            bold(&format!(
                "Converting images from {} into {}",
                input_dir.display(),
                output_dir.display()
            ))
        ));
    }

    fn on_output_dir_created(&self, output_dir: &Path) {
        self.bar.println(format!(
            "  {} Created output directory {}",
            cyan("+"),
            output_dir.display()
        ));
    }

    fn on_file_start(&self, file_name: &str) {
        self.bar.set_message(file_name.to_string());
    }

    fn on_file_complete(&self, file_name: &str, output_dir: &Path, text_len: usize) {
        self.bar.println(format!(
            "  {} {:<32} {}",
            green("✓"),
            file_name,
            dim(&format!("{text_len} chars → {}", output_dir.display())),
        ));
    }

    fn on_file_error(&self, file_name: &str, error: String) {
        self.errors.fetch_add(1, Ordering::SeqCst);

        // Truncate very long error messages to keep output tidy.
        let msg = if error.len() > 80 {
            format!("{}\u{2026}", &error[..79])
        } else {
            error
        };

        self.bar
            .println(format!("  {} {:<32} {}", red("✗"), file_name, red(&msg)));
    }

    fn on_run_complete(&self, candidates: usize, converted: usize) {
        let failed = candidates.saturating_sub(converted);
        self.bar.finish_and_clear();

        if candidates == 0 {
            eprintln!("{} no images to convert", dim("∅"));
        } else if failed == 0 {
            eprintln!(
                "{} {} images converted",
                green("✔"),
                bold(&converted.to_string())
            );
        } else {
            eprintln!(
                "{} {}/{} images converted  ({} failed)",
                if converted == 0 { red("✘") } else { cyan("⚠") },
                bold(&converted.to_string()),
                candidates,
                red(&failed.to_string()),
            );
        }
    }
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Convert ./pre_encoded_imgs into ./encoded_imgs (the defaults)
  img2b64

  # Explicit directories
  img2b64 holiday_shots -o holiday_shots_encoded

  # Keep going past unreadable files, summarise at the end
  img2b64 --continue-on-error

  # See what would happen without touching anything
  img2b64 --dry-run

  # Machine-readable run report
  img2b64 --json > run.json

WHAT A RUN PRODUCES (per image, e.g. cat.png):
  <output>/cat.txt   the image bytes as standard base64, one line, no wrapping
  <output>/cat.png   the original file, moved out of the input directory

  Existing files of either name in the output directory are overwritten,
  so rerunning after a partial failure is safe: already-moved images are
  no longer in the input and are simply not candidates any more.

ENVIRONMENT VARIABLES:
  IMG2B64_INPUT               Input directory  (default: pre_encoded_imgs)
  IMG2B64_OUTPUT              Output directory (default: encoded_imgs)
  IMG2B64_CONTINUE_ON_ERROR   Same as --continue-on-error
  IMG2B64_DRY_RUN             Same as --dry-run
  RUST_LOG                    Override the tracing filter (e.g. debug)
"#;

/// Batch-encode images to base64 text files and relocate the originals.
#[derive(Parser, Debug)]
#[command(
    name = "img2b64",
    version,
    about = "Batch-encode images to base64 text files and relocate the originals",
    long_about = "Encode every .png/.jpg/.jpeg file in the input directory into a sibling \
.txt artifact holding its standard base64 text, then move the original image into the \
output directory next to the artifact. One-shot and sequential; by default the run \
aborts at the first I/O failure.",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Directory containing the images to convert.
    #[arg(env = "IMG2B64_INPUT", default_value = DEFAULT_INPUT_DIR)]
    input: PathBuf,

    /// Directory receiving the text artifacts and relocated images.
    #[arg(short, long, env = "IMG2B64_OUTPUT", default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Record per-file failures and keep going instead of aborting.
    #[arg(long, env = "IMG2B64_CONTINUE_ON_ERROR")]
    continue_on_error: bool,

    /// List what would be converted without touching the filesystem.
    #[arg(long, env = "IMG2B64_DRY_RUN")]
    dry_run: bool,

    /// Print the run result as JSON instead of progress output.
    #[arg(long, env = "IMG2B64_JSON")]
    json: bool,

    /// Disable the live progress display.
    #[arg(long, env = "IMG2B64_NO_PROGRESS")]
    no_progress: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "IMG2B64_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "IMG2B64_QUIET")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // Suppress INFO-level library logs while the progress display is
    // active; the per-file lines already carry that information.
    let show_progress = !cli.quiet && !cli.no_progress && !cli.json;
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet || show_progress {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Build config ─────────────────────────────────────────────────────
    let progress_cb: Option<ProgressCallback> = if show_progress {
        Some(CliProgressCallback::new() as Arc<dyn ConvertProgressCallback>)
    } else {
        None
    };

    let mut builder = ConvertConfig::builder()
        .input_dir(cli.input.clone())
        .output_dir(cli.output.clone())
        .continue_on_error(cli.continue_on_error)
        .dry_run(cli.dry_run);
    if let Some(cb) = progress_cb {
        builder = builder.progress_callback(cb);
    }
    let config = builder.build().context("Invalid configuration")?;

    // ── Run conversion ───────────────────────────────────────────────────
    let output = convert(&config).context("Conversion failed")?;

    if cli.json {
        let json = serde_json::to_string_pretty(&output).context("Failed to serialise output")?;
        println!("{json}");
    } else if !cli.quiet && !show_progress {
        // Inline summary only when the progress callback is disabled.
        eprintln!(
            "Converted {}/{} images in {}ms",
            output.stats.converted, output.stats.candidates, output.stats.total_duration_ms
        );
        if output.stats.failed > 0 {
            eprintln!("  {} images failed", output.stats.failed);
        }
    }

    // Partial failures in continue-on-error mode still exit non-zero so
    // scripts notice them.
    if output.stats.failed > 0 {
        anyhow::bail!(
            "{} of {} images failed",
            output.stats.failed,
            output.stats.candidates
        );
    }

    Ok(())
}
