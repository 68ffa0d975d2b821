//! Per-case runners

use std::path::Path;

use tracing::debug;

use crate::native::process::ProcessTool;

/// Placeholder replaced by the config entry's absolute path
pub const CONFIG_PLACEHOLDER: &str = "{config}";

/// Placeholder replaced by the clip entry's absolute path
pub const CLIP_PLACEHOLDER: &str = "{clip}";

/// One config and clip pair taken from a manifest
#[derive(Debug, Clone, Copy)]
pub struct RegressionCase<'a> {
    pub config_key: &'a str,
    pub clip_key: &'a str,
    pub config_path: &'a Path,
    pub clip_path: &'a Path,
}

/// Runs a single regression case
pub trait CaseRunner: Send + Sync {
    /// Whether the runner can handle the clip at all
    fn supports(&self, _clip_key: &str) -> bool {
        true
    }

    /// Zero when the case passes
    fn run_case(&self, case: &RegressionCase<'_>) -> i32;
}

/// Runs each case as a child process
///
/// `{config}` and `{clip}` inside the argument template are substituted per case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessCaseRunner {
    template: ProcessTool,
}

impl ProcessCaseRunner {
    pub fn new(template: ProcessTool) -> Self {
        Self { template }
    }

    pub fn template(&self) -> &ProcessTool {
        &self.template
    }

    /// Arguments for one case
    pub fn case_args(&self, case: &RegressionCase<'_>) -> Vec<String> {
        let config = case.config_path.display().to_string();
        let clip = case.clip_path.display().to_string();

        self.template
            .args()
            .iter()
            .map(|arg| {
                arg.replace(CONFIG_PLACEHOLDER, &config)
                    .replace(CLIP_PLACEHOLDER, &clip)
            })
            .collect()
    }
}

impl CaseRunner for ProcessCaseRunner {
    fn run_case(&self, case: &RegressionCase<'_>) -> i32 {
        let args = self.case_args(case);
        debug!(clip = case.clip_key, ?args, "running regression case");
        self.template.with_args(args).execute()
    }
}
