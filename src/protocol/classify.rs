//! Result interpretation
//!
//! Maps raw native return codes to typed outcomes. Classification depends only on the
//! tool category and the return code. Two policies exist:
//!
//! - **binary** (compressor, decompressor): zero is success, anything else is fatal
//! - **counted** (unit test runner, regression tester): zero is success, a positive
//!   code is the number of failed cases, a negative code is fatal

use tracing::warn;

use super::{Outcome, ReturnCode, ToolCategory, UnitTestSummary};

/// Raw integers surfaced by one dispatch, before classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawResult {
    /// Result of a single-entry-point tool
    Single(ReturnCode),
    /// Results of the two unit test runner queries, in call order
    UnitTests { total: ReturnCode, failed: ReturnCode },
}

impl RawResult {
    /// The code that decides the outcome
    pub fn deciding_code(&self) -> ReturnCode {
        match *self {
            RawResult::Single(code) | RawResult::UnitTests { failed: code, .. } => code,
        }
    }
}

/// Classified outcome plus the unit test summary when the category produces one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interpretation {
    pub outcome: Outcome,
    pub summary: Option<UnitTestSummary>,
}

/// Classify a raw return code for the given category
pub fn classify(category: ToolCategory, code: ReturnCode) -> Outcome {
    let r = code.value();
    if r == 0 {
        return Outcome::Success;
    }

    if category.reports_failure_count() {
        // Negative counts have no defined meaning for either counted category
        match u32::try_from(r) {
            Ok(count) => Outcome::from_failure_count(count),
            Err(_) => Outcome::FatalError(r),
        }
    } else {
        Outcome::FatalError(r)
    }
}

/// Classify a dispatch result, building the unit test summary where applicable
pub fn interpret(category: ToolCategory, raw: RawResult) -> Interpretation {
    let outcome = classify(category, raw.deciding_code());

    let summary = match raw {
        RawResult::UnitTests { total, failed } => {
            let total_cases = u32::try_from(total.value()).unwrap_or_else(|_| {
                warn!(count = total.value(), "unit test runner reported a negative case count");
                0
            });
            Some(UnitTestSummary {
                total_cases,
                failed_cases: outcome.failure_count(),
            })
        }
        RawResult::Single(_) => None,
    };

    Interpretation { outcome, summary }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn code(r: i32) -> ReturnCode {
        ReturnCode(r)
    }

    #[test]
    fn test_binary_policy() {
        for category in [ToolCategory::Compressor, ToolCategory::Decompressor] {
            assert_eq!(classify(category, code(0)), Outcome::Success);
            assert_eq!(classify(category, code(7)), Outcome::FatalError(7));
            assert_eq!(classify(category, code(-3)), Outcome::FatalError(-3));
        }
    }

    #[test]
    fn test_regression_tri_state() {
        let category = ToolCategory::RegressionTester;
        assert_eq!(classify(category, code(0)), Outcome::Success);
        assert_eq!(classify(category, code(5)), Outcome::from_failure_count(5));
        assert_eq!(classify(category, code(-2)), Outcome::FatalError(-2));
    }

    #[test]
    fn test_unit_test_negative_is_fatal() {
        assert_eq!(
            classify(ToolCategory::UnitTestRunner, code(-1)),
            Outcome::FatalError(-1)
        );
        assert_eq!(
            classify(ToolCategory::UnitTestRunner, code(i32::MIN)),
            Outcome::FatalError(i32::MIN)
        );
    }

    #[test]
    fn test_interpret_unit_tests_builds_summary() {
        let interpretation = interpret(
            ToolCategory::UnitTestRunner,
            RawResult::UnitTests {
                total: code(42),
                failed: code(3),
            },
        );
        assert_eq!(interpretation.outcome, Outcome::from_failure_count(3));
        assert_eq!(
            interpretation.summary,
            Some(UnitTestSummary {
                total_cases: 42,
                failed_cases: 3
            })
        );
    }

    #[test]
    fn test_interpret_negative_case_count() {
        let interpretation = interpret(
            ToolCategory::UnitTestRunner,
            RawResult::UnitTests {
                total: code(-1),
                failed: code(0),
            },
        );
        assert_eq!(interpretation.outcome, Outcome::Success);
        assert_eq!(interpretation.summary.map(|s| s.total_cases), Some(0));
    }

    #[test]
    fn test_interpret_single_has_no_summary() {
        let interpretation = interpret(ToolCategory::Compressor, RawResult::Single(code(0)));
        assert_eq!(interpretation.outcome, Outcome::Success);
        assert!(interpretation.summary.is_none());
    }

    proptest! {
        #[test]
        fn prop_binary_success_iff_zero(r in any::<i32>()) {
            for category in [ToolCategory::Compressor, ToolCategory::Decompressor] {
                let outcome = classify(category, code(r));
                if r == 0 {
                    prop_assert_eq!(outcome, Outcome::Success);
                } else {
                    prop_assert_eq!(outcome, Outcome::FatalError(r));
                }
            }
        }

        #[test]
        fn prop_counted_non_negative(r in 0..=i32::MAX) {
            for category in [ToolCategory::RegressionTester, ToolCategory::UnitTestRunner] {
                let outcome = classify(category, code(r));
                if r == 0 {
                    prop_assert_eq!(outcome, Outcome::Success);
                } else {
                    prop_assert_eq!(outcome.failure_count(), r.unsigned_abs());
                }
            }
        }

        #[test]
        fn prop_regression_negative_is_fatal(r in i32::MIN..0) {
            prop_assert_eq!(
                classify(ToolCategory::RegressionTester, code(r)),
                Outcome::FatalError(r)
            );
        }

        #[test]
        fn prop_partial_failure_never_zero(r in any::<i32>()) {
            for category in ToolCategory::ALL {
                if let Outcome::PartialFailure(count) = classify(category, code(r)) {
                    prop_assert!(count.get() > 0);
                }
            }
        }
    }
}
