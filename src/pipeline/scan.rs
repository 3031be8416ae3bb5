//! Directory scanning: lazy enumeration of image candidates.
//!
//! The scan is a finite, non-restartable iterator over the entries of a
//! single directory (non-recursive). The orchestrator consumes it one
//! candidate at a time, so dry runs and continue-on-error handling sit
//! entirely outside this module. Order is whatever the underlying
//! directory listing yields; no sorting is applied.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File-name suffixes recognised as images, matched case-insensitively.
pub const IMAGE_EXTENSIONS: [&str; 3] = [".png", ".jpg", ".jpeg"];

/// One image file selected for conversion.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// File name including extension, e.g. `cat.png`.
    pub file_name: String,
    /// Full path inside the input directory.
    pub source_path: PathBuf,
}

impl Candidate {
    /// Name of the text artifact for this image: the file name with its
    /// extension replaced by `.txt`, e.g. `cat.png` → `cat.txt`.
    pub fn artifact_file_name(&self) -> String {
        let stem = Path::new(&self.file_name)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.file_name.clone());
        format!("{stem}.txt")
    }
}

/// Whether a file name qualifies as an image.
///
/// The name, lower-cased, must end with one of [`IMAGE_EXTENSIONS`].
/// Nothing but the name is inspected; content sniffing is out of scope.
pub fn is_image_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Enumerate `input_dir` and yield image candidates lazily.
///
/// Subdirectories and non-image files are skipped silently (logged at
/// `debug`). Errors while reading individual entries surface as `Err`
/// items so the caller decides whether to abort.
pub fn scan_dir(
    input_dir: &Path,
) -> io::Result<impl Iterator<Item = io::Result<Candidate>>> {
    let entries = fs::read_dir(input_dir)?;
    Ok(entries.filter_map(|entry| {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => return Some(Err(e)),
        };
        let path = entry.path();
        if path.is_dir() {
            debug!("Skipping directory entry: {}", path.display());
            return None;
        }
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if !is_image_name(&file_name) {
            debug!("Skipping non-image entry: {}", file_name);
            return None;
        }
        Some(Ok(Candidate {
            file_name,
            source_path: path,
        }))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn filter_accepts_recognised_extensions_case_insensitively() {
        assert!(is_image_name("cat.png"));
        assert!(is_image_name("CAT.PNG"));
        assert!(is_image_name("photo.jpg"));
        assert!(is_image_name("photo.JPEG"));
        assert!(is_image_name("archive.tar.jpeg"));
    }

    #[test]
    fn filter_rejects_everything_else() {
        assert!(!is_image_name("notes.txt"));
        assert!(!is_image_name("cat.png.bak"));
        assert!(!is_image_name("cat.gif"));
        assert!(!is_image_name("png"));
        assert!(!is_image_name(""));
    }

    #[test]
    fn artifact_name_replaces_extension() {
        let c = Candidate {
            file_name: "cat.png".into(),
            source_path: PathBuf::from("in/cat.png"),
        };
        assert_eq!(c.artifact_file_name(), "cat.txt");

        let dotted = Candidate {
            file_name: "archive.tar.jpeg".into(),
            source_path: PathBuf::from("in/archive.tar.jpeg"),
        };
        assert_eq!(dotted.artifact_file_name(), "archive.tar.txt");
    }

    #[test]
    fn scan_yields_only_images_and_skips_directories() {
        let tmp = TempDir::new().expect("temp dir");
        std::fs::write(tmp.path().join("a.png"), b"x").unwrap();
        std::fs::write(tmp.path().join("b.JPEG"), b"x").unwrap();
        std::fs::write(tmp.path().join("notes.txt"), b"x").unwrap();
        std::fs::create_dir(tmp.path().join("nested.png")).unwrap();

        let mut names: Vec<String> = scan_dir(tmp.path())
            .expect("scan")
            .map(|c| c.expect("entry").file_name)
            .collect();
        names.sort();
        assert_eq!(names, vec!["a.png", "b.JPEG"]);
    }

    #[test]
    fn scan_of_missing_directory_fails() {
        assert!(scan_dir(Path::new("/definitely/not/here")).is_err());
    }
}
