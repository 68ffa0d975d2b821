//! Tool declarations

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, config};
use crate::native::NativeTool;
use crate::native::process::ProcessTool;
use crate::protocol::ToolCategory;
use crate::regression::{ManifestRegressionTester, ProcessCaseRunner};

/// A process-backed native tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolSpec {
    pub category: ToolCategory,

    /// Executable path or a program name looked up on `PATH`
    pub program: PathBuf,

    #[serde(default)]
    pub args: Vec<String>,

    /// Arguments that make a unit test runner print its case count
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub count_args: Vec<String>,

    /// Run the program once per manifest case instead of once per bundle
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub per_case: bool,
}

impl ToolSpec {
    pub fn new(category: ToolCategory, program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            category,
            program: program.into(),
            args,
            count_args: Vec::new(),
            per_case: false,
        }
    }

    pub fn validate(&self, name: &str) -> Result<()> {
        if self.program.as_os_str().is_empty() {
            return Err(config::invalid(format!("tool '{name}' has an empty program")));
        }

        if !self.count_args.is_empty() && self.category != ToolCategory::UnitTestRunner {
            return Err(config::invalid(format!(
                "tool '{name}': count_args only applies to unit-test-runner, not {}",
                self.category
            )));
        }

        if self.per_case && self.category != ToolCategory::RegressionTester {
            return Err(config::invalid(format!(
                "tool '{name}': per_case only applies to regression-tester, not {}",
                self.category
            )));
        }

        Ok(())
    }

    /// Bind the declaration to a loaded tool of its category
    pub fn build(&self) -> NativeTool {
        let process = ProcessTool::new(&self.program, self.args.clone())
            .with_count_args(self.count_args.clone());

        match self.category {
            ToolCategory::UnitTestRunner => NativeTool::unit_test_runner(process),
            ToolCategory::Compressor => NativeTool::compressor(process),
            ToolCategory::Decompressor => NativeTool::decompressor(process),
            ToolCategory::RegressionTester if self.per_case => NativeTool::regression_tester(
                ManifestRegressionTester::new(ProcessCaseRunner::new(process)),
            ),
            ToolCategory::RegressionTester => NativeTool::regression_tester(process),
        }
    }
}
