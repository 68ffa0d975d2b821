//! Command helper utilities

use std::path::{Path, PathBuf};

use crate::cli::HostArgs;
use crate::config::{CONFIG_FILE, HostConfig};
use crate::error::Result;
use crate::resources::ProvisioningBridge;

/// Configuration file named by `--config` / `TOOLHOST_CONFIG`, or `./toolhost.yaml`
pub fn config_path(host: &HostArgs) -> PathBuf {
    host.config
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
}

/// Load the configuration, failing when the file does not exist
pub fn load_config(host: &HostArgs) -> Result<HostConfig> {
    HostConfig::load(&config_path(host))
}

/// Load the configuration if there is one
///
/// An explicitly named file must exist. A missing default file yields an empty config.
pub fn load_optional_config(host: &HostArgs) -> Result<HostConfig> {
    match &host.config {
        Some(path) => HostConfig::load(path),
        None if Path::new(CONFIG_FILE).is_file() => HostConfig::load(Path::new(CONFIG_FILE)),
        None => Ok(HostConfig::default()),
    }
}

/// Command line and environment locations take precedence over the configuration file
pub fn provisioning_bridge(host: &HostArgs, config: &HostConfig) -> ProvisioningBridge {
    ProvisioningBridge::new(
        host.bundle.clone().or_else(|| config.bundle_dir.clone()),
        host.output.clone().or_else(|| config.output_dir.clone()),
    )
}
