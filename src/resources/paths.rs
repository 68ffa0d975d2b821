//! Resource path constants and default locations

use std::path::PathBuf;

use crate::error::{Result, resource};

/// Environment variable overriding the resource bundle root
pub const BUNDLE_DIR_ENV: &str = "TOOLHOST_BUNDLE_DIR";

/// Environment variable overriding the output directory
pub const OUTPUT_DIR_ENV: &str = "TOOLHOST_OUTPUT_DIR";

/// Application directory name under the platform data directory
const APP_DIR: &str = "toolhost";

/// Output subdirectory within the application data directory
pub const OUTPUT_DIR: &str = "output";

/// Get the default output directory path
///
/// Uses the platform's local data location (e.g. XDG on Linux, Application Support on
/// macOS) with a `toolhost/output` subdirectory. Can be overridden with the
/// `TOOLHOST_OUTPUT_DIR` environment variable.
pub fn default_output_dir() -> Result<PathBuf> {
    if let Ok(output_dir) = std::env::var(OUTPUT_DIR_ENV) {
        return Ok(PathBuf::from(output_dir));
    }

    let base = dirs::data_local_dir().ok_or_else(|| {
        resource::storage_unavailable("<platform data dir>", "Could not determine data directory")
    })?;

    Ok(base.join(APP_DIR).join(OUTPUT_DIR))
}
