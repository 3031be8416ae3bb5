//! Artifact emission: write the base64 text, then relocate the original.
//!
//! Both operations silently overwrite an existing destination of the
//! same name; a rerun over the same batch replaces prior output rather
//! than failing.

use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Write `text` to `artifact_path`, creating the file or truncating an
/// existing one.
pub fn write_artifact(artifact_path: &Path, text: &str) -> io::Result<()> {
    fs::write(artifact_path, text)?;
    debug!("Wrote artifact {}", artifact_path.display());
    Ok(())
}

/// Move the image from `from` to `to`, replacing any existing file at
/// `to`.
///
/// `rename(2)` cannot cross filesystem boundaries; when it reports
/// `CrossesDevices` the file is copied and the source removed instead,
/// so an output directory on another mount still works. Any other
/// rename error propagates.
pub fn move_original(from: &Path, to: &Path) -> io::Result<()> {
    match fs::rename(from, to) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            fs::copy(from, to)?;
            fs::remove_file(from)?;
        }
        Err(e) => return Err(e),
    }
    debug!("Moved {} → {}", from.display(), to.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_creates_and_truncates() {
        let tmp = TempDir::new().expect("temp dir");
        let path = tmp.path().join("cat.txt");

        write_artifact(&path, "AQID").expect("first write");
        assert_eq!(fs::read_to_string(&path).unwrap(), "AQID");

        write_artifact(&path, "BB==").expect("overwrite");
        assert_eq!(fs::read_to_string(&path).unwrap(), "BB==");
    }

    #[test]
    fn move_relocates_the_file() {
        let tmp = TempDir::new().expect("temp dir");
        let from = tmp.path().join("cat.png");
        let to = tmp.path().join("moved").join("cat.png");
        fs::create_dir(tmp.path().join("moved")).unwrap();
        fs::write(&from, [1, 2, 3]).unwrap();

        move_original(&from, &to).expect("move");
        assert!(!from.exists());
        assert_eq!(fs::read(&to).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn move_overwrites_an_existing_destination() {
        let tmp = TempDir::new().expect("temp dir");
        let from = tmp.path().join("cat.png");
        let to = tmp.path().join("cat_dest.png");
        fs::write(&from, [1, 2, 3]).unwrap();
        fs::write(&to, [9, 9]).unwrap();

        move_original(&from, &to).expect("move");
        assert!(!from.exists());
        assert_eq!(fs::read(&to).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn move_of_missing_source_is_an_error() {
        let tmp = TempDir::new().expect("temp dir");
        let from = tmp.path().join("absent.png");
        let to = tmp.path().join("dest.png");
        assert!(move_original(&from, &to).is_err());
    }
}
