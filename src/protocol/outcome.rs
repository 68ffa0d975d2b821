//! Return codes, outcomes and unit test summaries

use std::fmt;
use std::num::NonZeroU32;

/// Exit code reserved for fatal outcomes
pub const FATAL_EXIT_CODE: u8 = 255;

/// Largest exit code used to carry a failure count
pub const MAX_COUNT_EXIT_CODE: u8 = 254;

/// Raw signed integer returned by a native entry point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReturnCode(pub i32);

impl ReturnCode {
    pub const SUCCESS: ReturnCode = ReturnCode(0);

    pub fn value(self) -> i32 {
        self.0
    }
}

impl From<i32> for ReturnCode {
    fn from(code: i32) -> Self {
        ReturnCode(code)
    }
}

impl fmt::Display for ReturnCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Classified result of one invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Success,
    /// Some cases failed; the count is never zero
    PartialFailure(NonZeroU32),
    /// Uninterpretable or process-level failure, carrying the raw code
    FatalError(i32),
}

impl Outcome {
    /// Build an outcome from a failure count: zero failures is a success
    pub fn from_failure_count(count: u32) -> Self {
        match NonZeroU32::new(count) {
            Some(count) => Outcome::PartialFailure(count),
            None => Outcome::Success,
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }

    /// Number of failed cases, zero unless this is a partial failure
    pub fn failure_count(self) -> u32 {
        match self {
            Outcome::PartialFailure(count) => count.get(),
            Outcome::Success | Outcome::FatalError(_) => 0,
        }
    }

    /// Process exit code carrying this outcome
    ///
    /// Counts are clamped below [`FATAL_EXIT_CODE`] so that a large failure count is
    /// never read back as a fatal error.
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Success => 0,
            Outcome::PartialFailure(count) => u8::try_from(count.get())
                .unwrap_or(MAX_COUNT_EXIT_CODE)
                .min(MAX_COUNT_EXIT_CODE),
            Outcome::FatalError(_) => FATAL_EXIT_CODE,
        }
    }
}

/// Case counts reported by a unit test runner through its two queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnitTestSummary {
    pub total_cases: u32,
    pub failed_cases: u32,
}

impl UnitTestSummary {
    pub fn passed_cases(&self) -> u32 {
        self.total_cases.saturating_sub(self.failed_cases)
    }
}
