//! Outcome text
//!
//! The text shown to a user for an outcome is a pure function of the category, the
//! outcome and (for unit test runners) the case summary.

use super::{Interpretation, Outcome, ToolCategory};

/// Render the user-facing line for a classified invocation
pub fn render(category: ToolCategory, interpretation: &Interpretation) -> String {
    let outcome = interpretation.outcome;

    match (category, outcome) {
        (ToolCategory::UnitTestRunner, Outcome::Success) => {
            let total = interpretation.summary.map_or(0, |s| s.total_cases);
            format!("All {total} test cases ran successfully!")
        }
        (ToolCategory::UnitTestRunner, Outcome::PartialFailure(count)) => {
            format!("{count} test cases failed!")
        }
        (ToolCategory::Compressor | ToolCategory::Decompressor, Outcome::FatalError(_)) => {
            "Failed!".to_string()
        }
        (ToolCategory::RegressionTester, Outcome::PartialFailure(count)) => {
            format!("Some regression tests failed: {count}")
        }
        (_, Outcome::Success) => "Success!".to_string(),
        (_, Outcome::FatalError(code)) => format!("Failed with error: {code}"),
        // Binary categories never classify to a partial failure
        (_, Outcome::PartialFailure(count)) => format!("{count} cases failed"),
    }
}
