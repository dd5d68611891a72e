//! Atomic file writer
//!
//! Writes go to a temp file in the destination directory which is then
//! renamed over the target, so a crash never leaves a half-written file.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{IconError, IconResult};

/// Write content to a file atomically, creating parent directories
pub fn atomic_write(path: &Path, content: &[u8]) -> IconResult<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(|e| IconError::io(parent, e))?;

    let mut tmp = NamedTempFile::new_in(parent).map_err(|e| IconError::io(parent, e))?;
    tmp.write_all(content).map_err(|e| IconError::io(path, e))?;
    tmp.flush().map_err(|e| IconError::io(path, e))?;
    tmp.persist(path).map_err(|e| IconError::io(path, e.error))?;

    Ok(())
}

/// Remove a directory tree if it exists
///
/// A missing directory is fine; anything else that fails is an error.
pub fn clear_dir(path: &Path) -> IconResult<()> {
    match std::fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(IconError::io(path, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn atomic_write_new_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.js");

        atomic_write(&path, b"module.exports = 1;\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "module.exports = 1;\n");
    }

    #[test]
    fn atomic_write_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.js");

        fs::write(&path, "Original").unwrap();
        atomic_write(&path, b"Replaced").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Replaced");
    }

    #[test]
    fn atomic_write_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("outline").join("esm").join("index.js");

        atomic_write(&path, b"").unwrap();

        assert!(path.exists());
    }

    #[test]
    fn atomic_write_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        atomic_write(&dir.path().join("a.js"), b"a").unwrap();
        atomic_write(&dir.path().join("a.js"), b"b").unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("a.js")]);
    }

    #[test]
    fn clear_dir_removes_tree() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("outline");
        fs::create_dir_all(root.join("esm")).unwrap();
        fs::write(root.join("esm/Old.js"), "old").unwrap();

        clear_dir(&root).unwrap();

        assert!(!root.exists());
    }

    #[test]
    fn clear_dir_missing_is_ok() {
        let dir = tempdir().unwrap();
        clear_dir(&dir.path().join("never-built")).unwrap();
    }
}
