//! Disk I/O and file lifecycle.
//!
//! Downloads are held in memory until complete, then written to a `.part`
//! file, synced, and renamed onto the final name, so the final path only
//! ever holds a complete document.

mod part_file;

pub use part_file::PartFile;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Temporary file suffix used before the rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Mode for a newly created output directory (Unix).
pub const OUTPUT_DIR_MODE: u32 = 0o755;

/// Path for the temp file: appends `.part` to the final path (e.g. `a.pdf` → `a.pdf.part`).
pub fn part_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// True if a regular file (or anything that is not a directory) is at `path`.
pub fn file_exists(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|m| !m.is_dir())
        .unwrap_or(false)
}

/// Write `data` to `final_path` via a `.part` file. On any failure the `.part`
/// file is removed and `final_path` is left untouched. Returns bytes written.
pub fn write_atomically(final_path: &Path, data: &[u8]) -> Result<u64> {
    let mut part = PartFile::create(final_path)?;
    if let Err(e) = part.write_synced(data) {
        part.discard();
        return Err(e);
    }
    let temp = part.temp_path().to_path_buf();
    if let Err(e) = part.finalize() {
        let _ = std::fs::remove_file(&temp);
        return Err(e);
    }
    Ok(data.len() as u64)
}

/// Create the output directory if it does not exist yet (mode 0755 on Unix).
/// Returns true if it was created, false if it was already there.
pub fn ensure_output_dir(path: &Path) -> Result<bool> {
    if path.is_dir() {
        return Ok(false);
    }
    let mut builder = std::fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(OUTPUT_DIR_MODE);
    }
    builder
        .create(path)
        .with_context(|| format!("create output directory {}", path.display()))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_path_appends_suffix() {
        let p = part_path(Path::new("doc.pdf"));
        assert_eq!(p.to_string_lossy(), "doc.pdf.part");
        let p2 = part_path(Path::new("/tmp/PDFs/1_2_sds_fr_fr.pdf"));
        assert_eq!(p2.to_string_lossy(), "/tmp/PDFs/1_2_sds_fr_fr.pdf.part");
    }

    #[test]
    fn write_atomically_creates_exact_file_and_no_part() {
        let dir = tempfile::tempdir().unwrap();
        let final_path = dir.path().join("a.pdf");
        let n = write_atomically(&final_path, b"%PDF-1.7 body").unwrap();
        assert_eq!(n, 13);
        assert_eq!(std::fs::read(&final_path).unwrap(), b"%PDF-1.7 body");
        assert!(!part_path(&final_path).exists());
    }

    #[test]
    fn write_atomically_missing_dir_fails_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let final_path = dir.path().join("missing").join("a.pdf");
        assert!(write_atomically(&final_path, b"x").is_err());
        assert!(!final_path.exists());
        assert!(!part_path(&final_path).exists());
    }

    #[test]
    fn discard_removes_part_file() {
        let dir = tempfile::tempdir().unwrap();
        let final_path = dir.path().join("b.pdf");
        let mut part = PartFile::create(&final_path).unwrap();
        part.write_synced(b"partial").unwrap();
        assert!(part_path(&final_path).exists());
        part.discard();
        assert!(!part_path(&final_path).exists());
        assert!(!final_path.exists());
    }

    #[test]
    fn file_exists_ignores_directories() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!file_exists(dir.path()));
        let f = dir.path().join("c.pdf");
        assert!(!file_exists(&f));
        std::fs::write(&f, b"x").unwrap();
        assert!(file_exists(&f));
    }

    #[test]
    fn ensure_output_dir_creates_once() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("PDFs");
        assert!(ensure_output_dir(&out).unwrap());
        assert!(out.is_dir());
        std::fs::write(out.join("keep.pdf"), b"x").unwrap();
        assert!(!ensure_output_dir(&out).unwrap());
        assert!(out.join("keep.pdf").exists());
    }

    #[cfg(unix)]
    #[test]
    fn ensure_output_dir_mode() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("PDFs");
        ensure_output_dir(&out).unwrap();
        let mode = std::fs::metadata(&out).unwrap().permissions().mode() & 0o777;
        // umask may only remove bits
        assert_eq!(mode & !OUTPUT_DIR_MODE, 0);
    }

    #[test]
    fn ensure_output_dir_on_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let f = dir.path().join("PDFs");
        std::fs::write(&f, b"not a dir").unwrap();
        assert!(ensure_output_dir(&f).is_err());
    }
}
