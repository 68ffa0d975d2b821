//! Native-invocation result protocol
//!
//! Pure types and functions shared by every host:
//! - [`category`]: the closed set of tool categories
//! - [`outcome`]: return codes, outcomes and exit code mapping
//! - [`classify`]: category-aware classification of return codes
//! - [`report`]: deterministic outcome text

pub mod category;
pub mod classify;
pub mod outcome;
pub mod report;

pub use category::ToolCategory;
pub use classify::{Interpretation, RawResult, classify, interpret};
pub use outcome::{FATAL_EXIT_CODE, MAX_COUNT_EXIT_CODE, Outcome, ReturnCode, UnitTestSummary};
pub use report::render;
