//! Progress-callback trait for per-file conversion events.
//!
//! Inject an [`Arc<dyn ConvertProgressCallback>`] via
//! [`crate::config::ConvertConfigBuilder::progress_callback`] to receive
//! events as the run processes each image.
//!
//! Callbacks are the least-invasive integration point: callers can forward
//! events to a terminal progress display, a log file, or a GUI without the
//! library knowing anything about how the host application communicates.
//! The run itself is strictly sequential, but the trait is `Send + Sync`
//! so an `Arc` of it can be shared with other threads of the host.

use std::path::Path;
use std::sync::Arc;

/// Called by the conversion run as it processes each image.
///
/// All methods have default no-op implementations so callers only
/// override what they care about.
pub trait ConvertProgressCallback: Send + Sync {
    /// Called once before anything is enumerated.
    fn on_run_start(&self, input_dir: &Path, output_dir: &Path) {
        let _ = (input_dir, output_dir);
    }

    /// Called at most once, when the output directory was absent and has
    /// just been created. Not called when it already existed.
    fn on_output_dir_created(&self, output_dir: &Path) {
        let _ = output_dir;
    }

    /// Called when an image has been selected, before it is read.
    fn on_file_start(&self, file_name: &str) {
        let _ = file_name;
    }

    /// Called when an image has been encoded, its artifact written, and
    /// the original moved.
    ///
    /// # Arguments
    /// * `file_name`  — name of the processed image
    /// * `output_dir` — directory now holding the artifact and the image
    /// * `text_len`   — byte length of the base64 text
    fn on_file_complete(&self, file_name: &str, output_dir: &Path, text_len: usize) {
        let _ = (file_name, output_dir, text_len);
    }

    /// Called when an image failed in a continue-on-error run.
    fn on_file_error(&self, file_name: &str, error: String) {
        let _ = (file_name, error);
    }

    /// Called once after the enumeration is exhausted.
    ///
    /// # Arguments
    /// * `candidates` — images that matched the filter
    /// * `converted`  — images processed without error
    fn on_run_complete(&self, candidates: usize, converted: usize) {
        let _ = (candidates, converted);
    }
}

/// A no-op implementation for callers that don't need progress events.
///
/// This is the default when no callback is configured.
pub struct NoopProgressCallback;

impl ConvertProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in [`crate::config::ConvertConfig`].
pub type ProgressCallback = Arc<dyn ConvertProgressCallback>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct TrackingCallback {
        starts: AtomicUsize,
        completes: AtomicUsize,
        errors: AtomicUsize,
        dir_created: AtomicUsize,
        final_converted: AtomicUsize,
    }

    impl ConvertProgressCallback for TrackingCallback {
        fn on_output_dir_created(&self, _output_dir: &Path) {
            self.dir_created.fetch_add(1, Ordering::SeqCst);
        }

        fn on_file_start(&self, _file_name: &str) {
            self.starts.fetch_add(1, Ordering::SeqCst);
        }

        fn on_file_complete(&self, _file_name: &str, _output_dir: &Path, _text_len: usize) {
            self.completes.fetch_add(1, Ordering::SeqCst);
        }

        fn on_file_error(&self, _file_name: &str, _error: String) {
            self.errors.fetch_add(1, Ordering::SeqCst);
        }

        fn on_run_complete(&self, _candidates: usize, converted: usize) {
            self.final_converted.store(converted, Ordering::SeqCst);
        }
    }

    #[test]
    fn noop_callback_does_not_panic() {
        let cb = NoopProgressCallback;
        cb.on_run_start(Path::new("in"), Path::new("out"));
        cb.on_output_dir_created(Path::new("out"));
        cb.on_file_start("cat.png");
        cb.on_file_complete("cat.png", Path::new("out"), 4);
        cb.on_file_error("dog.png", "boom".to_string());
        cb.on_run_complete(2, 1);
    }

    #[test]
    fn tracking_callback_receives_events() {
        let tracker = TrackingCallback {
            starts: AtomicUsize::new(0),
            completes: AtomicUsize::new(0),
            errors: AtomicUsize::new(0),
            dir_created: AtomicUsize::new(0),
            final_converted: AtomicUsize::new(0),
        };

        tracker.on_output_dir_created(Path::new("out"));
        tracker.on_file_start("a.png");
        tracker.on_file_complete("a.png", Path::new("out"), 100);
        tracker.on_file_start("b.jpg");
        tracker.on_file_error("b.jpg", "read failed".to_string());
        tracker.on_run_complete(2, 1);

        assert_eq!(tracker.dir_created.load(Ordering::SeqCst), 1);
        assert_eq!(tracker.starts.load(Ordering::SeqCst), 2);
        assert_eq!(tracker.completes.load(Ordering::SeqCst), 1);
        assert_eq!(tracker.errors.load(Ordering::SeqCst), 1);
        assert_eq!(tracker.final_converted.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn arc_dyn_callback_works() {
        let cb: Arc<dyn ConvertProgressCallback> = Arc::new(NoopProgressCallback);
        cb.on_run_start(Path::new("in"), Path::new("out"));
        cb.on_file_complete("a.png", Path::new("out"), 512);
    }
}
