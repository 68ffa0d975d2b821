//! Application entry point shared by every host
//!
//! [`run_tool`] provisions what the loaded tool's category needs, dispatches the call
//! and classifies the result. A GUI shell, the CLI and test harnesses all go through
//! it and only differ in how they present the returned [`ToolRun`].

use tracing::{info, warn};

use crate::dispatch::{Dispatcher, Invocation};
use crate::error::Result;
use crate::protocol::{Interpretation, Outcome, ToolCategory, UnitTestSummary, interpret, render};
use crate::resources::ProvisioningBridge;

/// Exit code of a host that could not start the tool at all
pub const HOST_ERROR_EXIT_CODE: u8 = 2;

/// Classified result of one tool run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolRun {
    pub category: ToolCategory,
    pub outcome: Outcome,
    pub summary: Option<UnitTestSummary>,
}

impl ToolRun {
    fn interpretation(&self) -> Interpretation {
        Interpretation {
            outcome: self.outcome,
            summary: self.summary,
        }
    }

    /// User-facing outcome text
    pub fn report(&self) -> String {
        render(self.category, &self.interpretation())
    }

    /// Process exit code for CLI and CI hosts
    pub fn exit_code(&self) -> u8 {
        self.outcome.exit_code()
    }
}

/// Run the dispatcher's tool once with resources from the bridge
///
/// Resource problems are returned as errors before the tool is called. Everything the
/// tool itself reports, including fatal codes, comes back as a [`ToolRun`].
pub fn run_tool(dispatcher: &Dispatcher, bridge: &ProvisioningBridge) -> Result<ToolRun> {
    let category = dispatcher.tool().category();

    let bundle = if category.requires_bundle() {
        Some(bridge.resolve_bundle()?)
    } else {
        None
    };
    let output = if category.requires_output() {
        Some(bridge.resolve_output_location()?)
    } else {
        None
    };

    let invocation = match (category, bundle.as_ref(), output.as_ref()) {
        (ToolCategory::Decompressor, Some(bundle), Some(output)) => {
            Invocation::decompressor(bundle, output)
        }
        (ToolCategory::RegressionTester, Some(bundle), _) => Invocation::regression_tester(bundle),
        (ToolCategory::Compressor, _, _) => Invocation::compressor(),
        _ => Invocation::unit_test_runner(),
    };

    let raw = dispatcher.invoke(&invocation)?;
    let Interpretation { outcome, summary } = interpret(category, raw);

    match outcome {
        Outcome::Success => info!(%category, "tool run succeeded"),
        Outcome::PartialFailure(count) => warn!(%category, count = count.get(), "tool run reported failed cases"),
        Outcome::FatalError(code) => warn!(%category, code, "tool run failed"),
    }

    Ok(ToolRun {
        category,
        outcome,
        summary,
    })
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::HostError;
    use crate::native::{Compressor, Decompressor, NativeTool, RegressionTester, UnitTestRunner};
    use crate::resources::{OutputLocation, ResourceBundle};
    use tempfile::TempDir;

    struct Suite {
        cases: i32,
        failed: i32,
    }

    impl UnitTestRunner for Suite {
        fn count_cases(&self) -> i32 {
            self.cases
        }

        fn run_all(&self) -> i32 {
            self.failed
        }
    }

    struct Fixed(i32);

    impl Compressor for Fixed {
        fn run(&self) -> i32 {
            self.0
        }
    }

    impl RegressionTester for Fixed {
        fn run(&self, _bundle: &ResourceBundle) -> i32 {
            self.0
        }
    }

    struct WritesResults;

    impl Decompressor for WritesResults {
        fn run(&self, bundle: &ResourceBundle, output: &OutputLocation) -> i32 {
            let Ok(metadata) = bundle.read("metadata.json") else {
                return 1;
            };
            match std::fs::write(output.join("benchmark_results.json"), metadata) {
                Ok(()) => 0,
                Err(_) => 2,
            }
        }
    }

    fn bundle_dir() -> TempDir {
        let temp = TempDir::new().expect("Failed to create temp directory");
        std::fs::write(temp.path().join("metadata.json"), "{}").expect("write metadata");
        temp
    }

    fn run(tool: NativeTool, bridge: &ProvisioningBridge) -> ToolRun {
        run_tool(&Dispatcher::new(tool), bridge).expect("tool run")
    }

    #[test]
    fn test_all_unit_tests_pass() {
        let result = run(
            NativeTool::unit_test_runner(Suite {
                cases: 42,
                failed: 0,
            }),
            &ProvisioningBridge::default(),
        );
        assert_eq!(result.outcome, Outcome::Success);
        assert_eq!(result.report(), "All 42 test cases ran successfully!");
        assert_eq!(result.exit_code(), 0);
    }

    #[test]
    fn test_some_unit_tests_fail() {
        let result = run(
            NativeTool::unit_test_runner(Suite {
                cases: 42,
                failed: 3,
            }),
            &ProvisioningBridge::default(),
        );
        assert_eq!(result.outcome, Outcome::from_failure_count(3));
        assert_eq!(result.report(), "3 test cases failed!");
        assert_eq!(result.exit_code(), 3);
    }

    #[test]
    fn test_compressor_success() {
        let result = run(NativeTool::compressor(Fixed(0)), &ProvisioningBridge::default());
        assert_eq!(result.outcome, Outcome::Success);
        assert_eq!(result.report(), "Success!");
    }

    #[test]
    fn test_compressor_failure() {
        let result = run(NativeTool::compressor(Fixed(7)), &ProvisioningBridge::default());
        assert_eq!(result.outcome, Outcome::FatalError(7));
        assert_eq!(result.report(), "Failed!");
        assert_eq!(result.exit_code(), 255);
    }

    #[test]
    fn test_regression_fatal() {
        let temp = bundle_dir();
        let bridge = ProvisioningBridge::new(Some(temp.path().to_path_buf()), None);
        let result = run(NativeTool::regression_tester(Fixed(-2)), &bridge);
        assert_eq!(result.outcome, Outcome::FatalError(-2));
        assert_eq!(result.report(), "Failed with error: -2");
    }

    #[test]
    fn test_regression_partial_failure() {
        let temp = bundle_dir();
        let bridge = ProvisioningBridge::new(Some(temp.path().to_path_buf()), None);
        let result = run(NativeTool::regression_tester(Fixed(5)), &bridge);
        assert_eq!(result.outcome, Outcome::from_failure_count(5));
        assert_eq!(result.report(), "Some regression tests failed: 5");
        assert_eq!(result.exit_code(), 5);
    }

    #[test]
    fn test_regression_without_bundle_is_an_error() {
        let err = run_tool(
            &Dispatcher::new(NativeTool::regression_tester(Fixed(0))),
            &ProvisioningBridge::default(),
        )
        .unwrap_err();
        assert!(matches!(err, HostError::ResourceUnavailable { .. }));
    }

    #[test]
    fn test_decompressor_gets_bundle_and_output() {
        let bundle = bundle_dir();
        let out = TempDir::new().expect("Failed to create temp directory");
        let output_dir = out.path().join("results");
        let bridge = ProvisioningBridge::new(
            Some(bundle.path().to_path_buf()),
            Some(output_dir.clone()),
        );

        let result = run(NativeTool::decompressor(WritesResults), &bridge);

        assert_eq!(result.report(), "Success!");
        assert!(output_dir.join("benchmark_results.json").is_file());
    }

    #[test]
    fn test_decompressor_without_storage_is_an_error() {
        let bundle = bundle_dir();
        let blocker = bundle.path().join("metadata.json");
        let bridge = ProvisioningBridge::new(Some(bundle.path().to_path_buf()), Some(blocker));

        let err = run_tool(&Dispatcher::new(NativeTool::decompressor(WritesResults)), &bridge)
            .unwrap_err();
        assert!(matches!(err, HostError::StorageUnavailable { .. }));
    }
}
