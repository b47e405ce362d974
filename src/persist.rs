//! Saving resolved text to disk

use crate::Result;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension appended to text output names
pub const TEXT_EXTENSION: &str = "txt";

/// Build `<dir>/<base_name>.<extension>`
///
/// The extension is appended, never substituted, so `notes.v2` becomes
/// `notes.v2.txt`.
pub fn output_path(dir: &Path, base_name: &str, extension: &str) -> PathBuf {
    dir.join(format!("{}.{}", base_name, extension))
}

/// Write `text` to `<dir>/<base_name>.txt`, replacing any existing file
pub fn persist_text(dir: &Path, base_name: &str, text: &str) -> Result<PathBuf> {
    let path = output_path(dir, base_name, TEXT_EXTENSION);
    debug!("Saving {} bytes of text to {:?}", text.len(), path);
    fs::write(&path, text)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_appends_extension() {
        let dir = Path::new("out");
        assert_eq!(
            output_path(dir, "notes.v2", "txt"),
            PathBuf::from("out/notes.v2.txt")
        );
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = persist_text(dir.path(), "save1", "Hello world").unwrap();

        assert_eq!(path, dir.path().join("save1.txt"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "Hello world");
    }

    #[test]
    fn test_overwrite_replaces_content() {
        let dir = tempfile::tempdir().unwrap();
        persist_text(dir.path(), "save", "a much longer first text").unwrap();
        let path = persist_text(dir.path(), "save", "short").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "short");
    }

    #[test]
    fn test_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(persist_text(&missing, "save", "text").is_err());
    }
}
