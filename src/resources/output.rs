//! Writable output locations

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, resource};

/// Prefix of the throw-away file used to check that a directory is writable
const SCRATCH_PREFIX: &str = ".toolhost-write-check-";

/// Absolute directory that native tools may write files beneath
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLocation {
    path: PathBuf,
}

impl OutputLocation {
    /// Make sure `path` exists as a writable directory
    ///
    /// Creates the directory (and its parents) when absent. Existing content is left
    /// untouched. Fails with `StorageUnavailable` when the directory cannot be created
    /// or written to.
    pub fn prepare(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let absolute = std::path::absolute(path)
            .map_err(|e| resource::storage_unavailable(&display, e.to_string()))?;

        fs::create_dir_all(&absolute)
            .map_err(|e| resource::storage_unavailable(&display, e.to_string()))?;

        let canonical = dunce::canonicalize(&absolute)
            .map_err(|e| resource::storage_unavailable(&display, e.to_string()))?;

        if !canonical.is_dir() {
            return Err(resource::storage_unavailable(display, "not a directory"));
        }

        // Dropping the scratch file removes it again
        tempfile::Builder::new()
            .prefix(SCRATCH_PREFIX)
            .tempfile_in(&canonical)
            .map_err(|e| resource::storage_unavailable(&display, format!("not writable: {e}")))?;

        Ok(Self { path: canonical })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of `file_name` inside the location
    pub fn join(&self, file_name: impl AsRef<Path>) -> PathBuf {
        self.path.join(file_name)
    }
}
