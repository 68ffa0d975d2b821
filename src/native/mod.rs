//! Native entry point contract
//!
//! One trait per tool category, each mirroring the entry points a native tool of that
//! category exposes. Return values stay raw `i32` codes: interpreting them is the job
//! of [`crate::protocol::classify`], never of an implementation.
//!
//! A loaded tool is represented by the [`NativeTool`] capability. Its variant fixes the
//! category, so the arguments passed to an entry point are checked by the compiler.
//!
//! Bindings:
//! - [`ffi`]: C ABI function pointers
//! - [`process`]: child processes

pub mod ffi;
pub mod process;

use crate::protocol::ToolCategory;
use crate::resources::{OutputLocation, ResourceBundle};

/// Return code used when a binding cannot produce a result of its own
pub const UNREADABLE_RESULT: i32 = -1;

/// Counts and runs a suite of unit test cases
pub trait UnitTestRunner: Send + Sync {
    /// Number of registered cases
    fn count_cases(&self) -> i32;

    /// Run every case, returning the number that failed
    fn run_all(&self) -> i32;
}

/// Single-shot tool without inputs
pub trait Compressor: Send + Sync {
    fn run(&self) -> i32;
}

/// Tool reading bundled inputs and writing artifacts to an output directory
pub trait Decompressor: Send + Sync {
    fn run(&self, bundle: &ResourceBundle, output: &OutputLocation) -> i32;
}

/// Tool running the regression cases found in a bundle
pub trait RegressionTester: Send + Sync {
    /// Zero on success, the number of failed cases, or a negative fatal code
    fn run(&self, bundle: &ResourceBundle) -> i32;
}

/// A loaded native tool, constructed once by the host
pub enum NativeTool {
    UnitTestRunner(Box<dyn UnitTestRunner>),
    Compressor(Box<dyn Compressor>),
    Decompressor(Box<dyn Decompressor>),
    RegressionTester(Box<dyn RegressionTester>),
}

impl NativeTool {
    pub fn unit_test_runner(tool: impl UnitTestRunner + 'static) -> Self {
        NativeTool::UnitTestRunner(Box::new(tool))
    }

    pub fn compressor(tool: impl Compressor + 'static) -> Self {
        NativeTool::Compressor(Box::new(tool))
    }

    pub fn decompressor(tool: impl Decompressor + 'static) -> Self {
        NativeTool::Decompressor(Box::new(tool))
    }

    pub fn regression_tester(tool: impl RegressionTester + 'static) -> Self {
        NativeTool::RegressionTester(Box::new(tool))
    }

    pub fn category(&self) -> ToolCategory {
        match self {
            NativeTool::UnitTestRunner(_) => ToolCategory::UnitTestRunner,
            NativeTool::Compressor(_) => ToolCategory::Compressor,
            NativeTool::Decompressor(_) => ToolCategory::Decompressor,
            NativeTool::RegressionTester(_) => ToolCategory::RegressionTester,
        }
    }
}

impl std::fmt::Debug for NativeTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("NativeTool").field(&self.category()).finish()
    }
}
