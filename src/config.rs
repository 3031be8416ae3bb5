//! Configuration for a batch conversion run.
//!
//! All behaviour is controlled through [`ConvertConfig`], built via its
//! [`ConvertConfigBuilder`]. The directories are explicit fields with
//! defaults resolved by the calling entry point (the CLI maps flags and
//! env vars onto them); the core never derives paths from its own
//! location on disk, which keeps it testable against arbitrary
//! directories.

use crate::error::Img2B64Error;
use crate::progress::ProgressCallback;
use std::fmt;
use std::path::PathBuf;

/// Default input directory, relative to the working directory.
pub const DEFAULT_INPUT_DIR: &str = "pre_encoded_imgs";

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "encoded_imgs";

/// Configuration for one conversion run.
///
/// Built via [`ConvertConfig::builder()`] or [`ConvertConfig::default()`].
///
/// # Example
/// ```rust
/// use img2b64::ConvertConfig;
///
/// let config = ConvertConfig::builder()
///     .input_dir("holiday_shots")
///     .output_dir("holiday_shots_encoded")
///     .continue_on_error(true)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct ConvertConfig {
    /// Directory enumerated for images. Default: `pre_encoded_imgs`.
    pub input_dir: PathBuf,

    /// Directory receiving the text artifacts and relocated images.
    /// Created (with parents) if absent. Default: `encoded_imgs`.
    pub output_dir: PathBuf,

    /// Record per-file failures and keep going instead of aborting at the
    /// first error. Default: false.
    ///
    /// Even with this set, a run where every candidate fails returns
    /// [`Img2B64Error::AllFilesFailed`] so a fully broken batch cannot
    /// look like success.
    pub continue_on_error: bool,

    /// Scan and report candidates without reading, writing, or moving
    /// anything. The output directory is not created. Default: false.
    pub dry_run: bool,

    /// Optional per-file progress events. Default: none.
    pub progress_callback: Option<ProgressCallback>,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            continue_on_error: false,
            dry_run: false,
            progress_callback: None,
        }
    }
}

impl fmt::Debug for ConvertConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConvertConfig")
            .field("input_dir", &self.input_dir)
            .field("output_dir", &self.output_dir)
            .field("continue_on_error", &self.continue_on_error)
            .field("dry_run", &self.dry_run)
            .field(
                "progress_callback",
                &self.progress_callback.as_ref().map(|_| "<dyn ConvertProgressCallback>"),
            )
            .finish()
    }
}

impl ConvertConfig {
    /// Create a new builder for `ConvertConfig`.
    pub fn builder() -> ConvertConfigBuilder {
        ConvertConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ConvertConfig`].
#[derive(Debug)]
pub struct ConvertConfigBuilder {
    config: ConvertConfig,
}

impl ConvertConfigBuilder {
    pub fn input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.input_dir = dir.into();
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    pub fn continue_on_error(mut self, v: bool) -> Self {
        self.config.continue_on_error = v;
        self
    }

    pub fn dry_run(mut self, v: bool) -> Self {
        self.config.dry_run = v;
        self
    }

    pub fn progress_callback(mut self, cb: ProgressCallback) -> Self {
        self.config.progress_callback = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConvertConfig, Img2B64Error> {
        let c = &self.config;
        if c.input_dir.as_os_str().is_empty() {
            return Err(Img2B64Error::InvalidConfig(
                "Input directory must not be empty".into(),
            ));
        }
        if c.output_dir.as_os_str().is_empty() {
            return Err(Img2B64Error::InvalidConfig(
                "Output directory must not be empty".into(),
            ));
        }
        // Relocating an image into its own directory would leave the input
        // still containing it, so the two directories must differ.
        if c.input_dir == c.output_dir {
            return Err(Img2B64Error::InvalidConfig(format!(
                "Input and output directory must differ, both are '{}'",
                c.input_dir.display()
            )));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directories() {
        let config = ConvertConfig::default();
        assert_eq!(config.input_dir, PathBuf::from("pre_encoded_imgs"));
        assert_eq!(config.output_dir, PathBuf::from("encoded_imgs"));
        assert!(!config.continue_on_error);
        assert!(!config.dry_run);
    }

    #[test]
    fn builder_sets_fields() {
        let config = ConvertConfig::builder()
            .input_dir("in")
            .output_dir("out")
            .continue_on_error(true)
            .dry_run(true)
            .build()
            .expect("valid config");
        assert_eq!(config.input_dir, PathBuf::from("in"));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert!(config.continue_on_error);
        assert!(config.dry_run);
    }

    #[test]
    fn same_directory_is_rejected() {
        let err = ConvertConfig::builder()
            .input_dir("imgs")
            .output_dir("imgs")
            .build()
            .unwrap_err();
        assert!(matches!(err, Img2B64Error::InvalidConfig(_)));
    }

    #[test]
    fn empty_directory_is_rejected() {
        let err = ConvertConfig::builder().input_dir("").build().unwrap_err();
        assert!(matches!(err, Img2B64Error::InvalidConfig(_)));
    }

    #[test]
    fn debug_elides_callback() {
        use crate::progress::NoopProgressCallback;
        use std::sync::Arc;

        let config = ConvertConfig::builder()
            .progress_callback(Arc::new(NoopProgressCallback))
            .build()
            .expect("valid config");
        let dbg = format!("{config:?}");
        assert!(dbg.contains("ConvertProgressCallback"));
    }
}
