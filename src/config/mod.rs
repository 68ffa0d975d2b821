//! Host configuration (toolhost.yaml)
//!
//! Declares the resource locations and the native tools a host can launch:
//!
//! ```yaml
//! bundle_dir: assets
//! output_dir: out
//! tools:
//!   regression:
//!     category: regression-tester
//!     program: ./build/compressor
//!     args: ["-test", "-config={config}", "-acl={clip}"]
//!     per_case: true
//! ```
//!
//! Relative paths are resolved against the directory holding the file.

pub mod tool;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, config, tool as tool_error};

pub use tool::ToolSpec;

/// Default configuration filename
pub const CONFIG_FILE: &str = "toolhost.yaml";

/// Environment variable naming the configuration file
pub const CONFIG_ENV: &str = "TOOLHOST_CONFIG";

/// Parsed toolhost.yaml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostConfig {
    /// Resource bundle root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle_dir: Option<PathBuf>,

    /// Output directory for tools that write artifacts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,

    /// Tools by name
    #[serde(default)]
    pub tools: BTreeMap<String, ToolSpec>,
}

impl HostConfig {
    /// Parse and validate configuration from a YAML string
    ///
    /// Paths are kept as written.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the configuration file at `path`, resolving relative paths against its directory
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(config::not_found(path.display().to_string()));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| config::parse_failed(path.display().to_string(), e.to_string()))?;
        let parsed: Self = serde_yaml::from_str(&content)
            .map_err(|e| config::parse_failed(path.display().to_string(), e.to_string()))?;
        parsed.validate()?;

        let base = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let base = std::path::absolute(base)?;

        debug!(path = %path.display(), tools = parsed.tools.len(), "loaded configuration");
        Ok(parsed.resolve_relative(&base))
    }

    pub fn validate(&self) -> Result<()> {
        for (name, spec) in &self.tools {
            if name.trim().is_empty() {
                return Err(config::invalid("tool names cannot be empty"));
            }
            spec.validate(name)?;
        }
        Ok(())
    }

    /// Make every relative path absolute against `base`
    ///
    /// A bare program name such as `sh` is left alone so it is still looked up on `PATH`.
    #[must_use]
    pub fn resolve_relative(mut self, base: &Path) -> Self {
        self.bundle_dir = self.bundle_dir.map(|dir| base.join(dir));
        self.output_dir = self.output_dir.map(|dir| base.join(dir));

        for spec in self.tools.values_mut() {
            if spec.program.components().count() > 1 {
                spec.program = base.join(&spec.program);
            }
        }

        self
    }

    /// Look up a tool by name
    pub fn tool(&self, name: &str) -> Result<&ToolSpec> {
        self.tools.get(name).ok_or_else(|| tool_error::not_found(name))
    }
}
