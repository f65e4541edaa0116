//! Temp file written in full, then renamed onto the final path.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::part_path;

/// An open `<final>.part` file. `finalize` renames it onto the final path;
/// `discard` removes it. Dropping without either leaves the `.part` file behind.
pub struct PartFile {
    file: File,
    temp_path: PathBuf,
    final_path: PathBuf,
}

impl PartFile {
    /// Create (or truncate) the temp file next to `final_path`.
    pub fn create(final_path: &Path) -> Result<Self> {
        let temp_path = part_path(final_path);
        let file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("failed to create temp file: {}", temp_path.display()))?;
        Ok(PartFile {
            file,
            temp_path,
            final_path: final_path.to_path_buf(),
        })
    }

    /// Write all of `data` and sync it to disk.
    pub fn write_synced(&mut self, data: &[u8]) -> Result<()> {
        self.file
            .write_all(data)
            .with_context(|| format!("write {}", self.temp_path.display()))?;
        self.file
            .sync_all()
            .with_context(|| format!("sync {}", self.temp_path.display()))?;
        Ok(())
    }

    pub fn temp_path(&self) -> &Path {
        &self.temp_path
    }

    /// Rename the temp file to the final path. Consumes the writer and closes the file.
    pub fn finalize(self) -> Result<PathBuf> {
        let PartFile {
            file,
            temp_path,
            final_path,
        } = self;
        drop(file);
        std::fs::rename(&temp_path, &final_path).with_context(|| {
            format!(
                "failed to rename {} to {}",
                temp_path.display(),
                final_path.display()
            )
        })?;
        Ok(final_path)
    }

    /// Close and delete the temp file, ignoring a file that is already gone.
    pub fn discard(self) {
        let PartFile {
            file, temp_path, ..
        } = self;
        drop(file);
        if let Err(e) = std::fs::remove_file(&temp_path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("could not remove {}: {}", temp_path.display(), e);
            }
        }
    }
}
