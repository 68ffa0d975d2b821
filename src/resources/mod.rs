//! Resource provisioning
//!
//! Prepares the arguments a native invocation needs: a read-only [`ResourceBundle`]
//! and a writable [`OutputLocation`]. Resolution never touches native state; it only
//! turns configured paths into validated handles.

pub mod bundle;
pub mod output;
pub mod paths;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, resource};

pub use bundle::ResourceBundle;
pub use output::OutputLocation;

/// Resolves the resources a tool category requires
#[derive(Debug, Clone, Default)]
pub struct ProvisioningBridge {
    bundle_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
}

impl ProvisioningBridge {
    pub fn new(bundle_dir: Option<PathBuf>, output_dir: Option<PathBuf>) -> Self {
        Self {
            bundle_dir,
            output_dir,
        }
    }

    pub fn bundle_dir(&self) -> Option<&Path> {
        self.bundle_dir.as_deref()
    }

    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }

    /// Open the configured resource bundle
    pub fn resolve_bundle(&self) -> Result<ResourceBundle> {
        let root = self.bundle_dir.as_ref().ok_or_else(|| {
            resource::unavailable("<unset>", "no resource bundle directory configured")
        })?;

        let bundle = ResourceBundle::open(root)?;
        debug!(root = %bundle.root().display(), "resolved resource bundle");
        Ok(bundle)
    }

    /// Prepare the configured output directory, falling back to the platform default
    pub fn resolve_output_location(&self) -> Result<OutputLocation> {
        let dir = match &self.output_dir {
            Some(dir) => dir.clone(),
            None => paths::default_output_dir()?,
        };

        let location = OutputLocation::prepare(&dir)?;
        debug!(path = %location.path().display(), "resolved output location");
        Ok(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HostError;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_bundle_unset() {
        let bridge = ProvisioningBridge::default();
        let err = bridge.resolve_bundle().unwrap_err();
        assert!(matches!(err, HostError::ResourceUnavailable { .. }));
    }

    #[test]
    fn test_resolve_bundle_twice_is_deterministic() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("metadata.json"), "{}").unwrap();
        let bridge = ProvisioningBridge::new(Some(temp.path().to_path_buf()), None);

        let first = bridge.resolve_bundle().unwrap();
        let second = bridge.resolve_bundle().unwrap();

        assert_eq!(first.keys().unwrap(), second.keys().unwrap());
        assert_eq!(first.fingerprint().unwrap(), second.fingerprint().unwrap());
    }

    #[test]
    fn test_resolve_explicit_output() {
        let temp = TempDir::new().unwrap();
        let bridge = ProvisioningBridge::new(None, Some(temp.path().join("results")));

        let location = bridge.resolve_output_location().unwrap();
        assert!(location.path().ends_with("results"));
    }

    #[test]
    #[serial]
    fn test_resolve_output_from_env_default() {
        let temp = TempDir::new().unwrap();
        let env_dir = temp.path().join("env-output");
        unsafe {
            std::env::set_var(paths::OUTPUT_DIR_ENV, &env_dir);
        }
        let result = ProvisioningBridge::default().resolve_output_location();
        unsafe {
            std::env::remove_var(paths::OUTPUT_DIR_ENV);
        }

        let location = result.unwrap();
        assert!(location.path().ends_with("env-output"));
        assert!(env_dir.is_dir());
    }
}
