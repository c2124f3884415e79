// src/file.rs
// Reading and writing the digest and the page. Every failure carries its path.

use std::{
    fs,
    path::Path,
};

use crate::error::{Error, Result};

pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::file_io(path, e))
}

/// Write the whole file in one go, creating parent directories as needed.
pub fn write_text(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents).map_err(|e| Error::file_io(path, e))?;
    logd!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        let e = std::io::Error::new(std::io::ErrorKind::AlreadyExists, "path exists but is not a directory");
        return Err(Error::file_io(dir, e));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| Error::file_io(dir, e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_creates_parents_and_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/relics.md");
        write_text(&path, "# Primes\n").unwrap();
        assert_eq!(read_text(&path).unwrap(), "# Primes\n");
    }

    #[test]
    fn missing_file_reports_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.md");
        let err = read_text(&path).unwrap_err();
        assert!(matches!(err, Error::FileIo { .. }));
        assert!(err.to_string().contains("absent.md"));
    }

    #[test]
    fn file_in_place_of_directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();
        assert!(write_text(&blocker.join("page.html"), "x").is_err());
    }
}
