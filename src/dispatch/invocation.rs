//! Invocation values
//!
//! An invocation can only be built through the constructor of its category, so it
//! always carries exactly the resources that category's entry point accepts.

use crate::protocol::ToolCategory;
use crate::resources::{OutputLocation, ResourceBundle};

/// One call into a native tool, built right before dispatch
#[derive(Debug, Clone, Copy)]
pub struct Invocation<'a> {
    category: ToolCategory,
    bundle: Option<&'a ResourceBundle>,
    output: Option<&'a OutputLocation>,
}

impl<'a> Invocation<'a> {
    pub fn unit_test_runner() -> Self {
        Self {
            category: ToolCategory::UnitTestRunner,
            bundle: None,
            output: None,
        }
    }

    pub fn compressor() -> Self {
        Self {
            category: ToolCategory::Compressor,
            bundle: None,
            output: None,
        }
    }

    pub fn decompressor(bundle: &'a ResourceBundle, output: &'a OutputLocation) -> Self {
        Self {
            category: ToolCategory::Decompressor,
            bundle: Some(bundle),
            output: Some(output),
        }
    }

    pub fn regression_tester(bundle: &'a ResourceBundle) -> Self {
        Self {
            category: ToolCategory::RegressionTester,
            bundle: Some(bundle),
            output: None,
        }
    }

    pub fn category(&self) -> ToolCategory {
        self.category
    }

    pub fn bundle(&self) -> Option<&'a ResourceBundle> {
        self.bundle
    }

    pub fn output(&self) -> Option<&'a OutputLocation> {
        self.output
    }
}
