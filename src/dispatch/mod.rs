//! Invocation dispatch
//!
//! Performs one blocking call into the loaded tool. There is no timeout and no
//! cancellation: the calling thread is suspended until the native call returns. Hosts
//! that must stay responsive run the dispatch on a worker thread of their own.

pub mod invocation;

use tracing::info;

use crate::error::{Result, tool};
use crate::native::NativeTool;
use crate::protocol::{RawResult, ReturnCode};

pub use invocation::Invocation;

/// Owns the loaded native tool and calls into it
#[derive(Debug)]
pub struct Dispatcher {
    tool: NativeTool,
}

impl Dispatcher {
    pub fn new(tool: NativeTool) -> Self {
        Self { tool }
    }

    pub fn tool(&self) -> &NativeTool {
        &self.tool
    }

    /// Call the entry point matching the invocation and surface its raw result
    ///
    /// A unit test runner is queried twice, case count first, and both integers are
    /// returned. An invocation built for another category is rejected before any native
    /// code runs.
    pub fn invoke(&self, invocation: &Invocation<'_>) -> Result<RawResult> {
        let category = invocation.category();
        let mismatch = || tool::category_mismatch(category.as_str(), self.tool.category().as_str());

        if category != self.tool.category() {
            return Err(mismatch());
        }

        info!(%category, "invoking native tool");

        let raw = match (&self.tool, invocation.bundle(), invocation.output()) {
            (NativeTool::UnitTestRunner(runner), _, _) => {
                let total = ReturnCode(runner.count_cases());
                let failed = ReturnCode(runner.run_all());
                RawResult::UnitTests { total, failed }
            }
            (NativeTool::Compressor(compressor), _, _) => {
                RawResult::Single(ReturnCode(compressor.run()))
            }
            (NativeTool::Decompressor(decompressor), Some(bundle), Some(output)) => {
                RawResult::Single(ReturnCode(decompressor.run(bundle, output)))
            }
            (NativeTool::RegressionTester(tester), Some(bundle), _) => {
                RawResult::Single(ReturnCode(tester.run(bundle)))
            }
            _ => return Err(mismatch()),
        };

        info!(%category, code = %raw.deciding_code(), "native tool returned");
        Ok(raw)
    }
}
