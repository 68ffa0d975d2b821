//! Manifest-driven regression testing
//!
//! [`ManifestRegressionTester`] reads `metadata.json` from the bundle root, which
//! lists compression configs and clips, and hands every config and clip pair to a
//! [`CaseRunner`]. Its return value follows the regression tester convention: zero,
//! the number of failed cases, or one of the negative manifest codes below.

pub mod runner;

use std::fs::File;
use std::path::PathBuf;

use serde_json::Value;
use tracing::{error, info, warn};

use crate::native::RegressionTester;
use crate::resources::ResourceBundle;

pub use runner::{CaseRunner, ProcessCaseRunner, RegressionCase};

/// Manifest entry at the bundle root
pub const METADATA_FILE: &str = "metadata.json";

/// `metadata.json` is missing or unreadable
pub const MANIFEST_MISSING: i32 = -1;

/// The manifest has no `configs` array
pub const CONFIGS_MISSING: i32 = -100;

/// The manifest has no `clips` array
pub const CLIPS_MISSING: i32 = -500;

/// The manifest is not a valid JSON document
pub const MANIFEST_MALFORMED: i32 = -1000;

/// Config and clip keys listed by a bundle's manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub configs: Vec<String>,
    pub clips: Vec<String>,
}

impl Manifest {
    /// Parse manifest bytes, returning the manifest return code on failure
    ///
    /// Array elements that are not strings are ignored.
    pub fn parse(bytes: &[u8]) -> Result<Self, i32> {
        let document: Value = serde_json::from_slice(bytes).map_err(|_| MANIFEST_MALFORMED)?;

        let configs = string_array(&document, "configs").ok_or(CONFIGS_MISSING)?;
        let clips = string_array(&document, "clips").ok_or(CLIPS_MISSING)?;

        Ok(Self { configs, clips })
    }

    /// Read and parse the manifest of `bundle`
    pub fn load(bundle: &ResourceBundle) -> Result<Self, i32> {
        let bytes = bundle.read(METADATA_FILE).map_err(|_| MANIFEST_MISSING)?;
        Self::parse(&bytes)
    }
}

fn string_array(document: &Value, field: &str) -> Option<Vec<String>> {
    let entries = document.get(field)?.as_array()?;
    Some(
        entries
            .iter()
            .filter_map(|entry| entry.as_str().map(str::to_string))
            .collect(),
    )
}

/// Regression tester running every manifest case through a [`CaseRunner`]
pub struct ManifestRegressionTester<R> {
    runner: R,
}

impl<R: CaseRunner> ManifestRegressionTester<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    fn run_config(&self, bundle: &ResourceBundle, config: &str, clips: &[String]) -> u32 {
        let Some(config_path) = readable_entry(bundle, config) else {
            warn!(config, "config entry cannot be read, skipping");
            return 0;
        };

        let total = clips.len();
        let mut failed = 0u32;
        for (index, clip) in clips.iter().enumerate() {
            let position = index + 1;

            if !self.runner.supports(clip) {
                warn!(clip, "clip not supported by the case runner, skipping ({position} / {total})");
                continue;
            }

            let Some(clip_path) = readable_entry(bundle, clip) else {
                warn!(clip, "clip entry cannot be read, skipping ({position} / {total})");
                continue;
            };

            let case = RegressionCase {
                config_key: config,
                clip_key: clip,
                config_path: &config_path,
                clip_path: &clip_path,
            };

            let code = self.runner.run_case(&case);
            if code == 0 {
                info!(config, clip, "Successful regression test for clip: {clip} ({position} / {total})");
            } else {
                failed += 1;
                error!(config, clip, code, "Failed regression test for clip: {clip} ({position} / {total})");
            }
        }

        failed
    }
}

/// Absolute path of `key` when the entry exists and can be opened for reading
fn readable_entry(bundle: &ResourceBundle, key: &str) -> Option<PathBuf> {
    let path = bundle.path_of(key).ok()?;
    if !path.is_file() {
        return None;
    }
    File::open(&path).ok()?;
    Some(path)
}

impl<R: CaseRunner> RegressionTester for ManifestRegressionTester<R> {
    fn run(&self, bundle: &ResourceBundle) -> i32 {
        let manifest = match Manifest::load(bundle) {
            Ok(manifest) => manifest,
            Err(code) => {
                error!(bundle = %bundle.root().display(), code, "invalid regression manifest");
                return code;
            }
        };

        let total = manifest.configs.len();
        let mut failed = 0u32;

        for (index, config) in manifest.configs.iter().enumerate() {
            info!(
                "Performing regression tests for configuration: {config} ({} / {total})",
                index + 1
            );
            failed = failed.saturating_add(self.run_config(bundle, config, &manifest.clips));
        }

        if failed != 0 {
            error!("Number of regression test failures: {failed}");
        }
        info!("Done!");

        i32::try_from(failed).unwrap_or(i32::MAX)
    }
}
