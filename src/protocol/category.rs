//! Tool categories
//!
//! The category of a native tool decides three things: which entry-point signature it
//! exposes, which resources the host must provision before calling it, and which
//! classification policy applies to its return code.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of native tool kinds a host can launch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ToolCategory {
    /// Counts its cases, then runs them all and returns the number that failed
    UnitTestRunner,
    /// Single-shot run without inputs; succeeds or fails as a whole
    Compressor,
    /// Reads the resource bundle and writes artifacts into the output location
    Decompressor,
    /// Runs every regression case in the resource bundle and returns the failure count
    RegressionTester,
}

impl ToolCategory {
    /// All categories in a stable order
    pub const ALL: [ToolCategory; 4] = [
        ToolCategory::UnitTestRunner,
        ToolCategory::Compressor,
        ToolCategory::Decompressor,
        ToolCategory::RegressionTester,
    ];

    /// Kebab-case name used on the command line and in configuration files
    pub fn as_str(self) -> &'static str {
        match self {
            ToolCategory::UnitTestRunner => "unit-test-runner",
            ToolCategory::Compressor => "compressor",
            ToolCategory::Decompressor => "decompressor",
            ToolCategory::RegressionTester => "regression-tester",
        }
    }

    pub fn requires_bundle(self) -> bool {
        matches!(
            self,
            ToolCategory::Decompressor | ToolCategory::RegressionTester
        )
    }

    pub fn requires_output(self) -> bool {
        matches!(self, ToolCategory::Decompressor)
    }

    /// Whether a positive return code is a count of failed cases rather than a failure code
    pub fn reports_failure_count(self) -> bool {
        matches!(
            self,
            ToolCategory::UnitTestRunner | ToolCategory::RegressionTester
        )
    }
}

impl fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn test_resource_requirements() {
        assert!(!ToolCategory::UnitTestRunner.requires_bundle());
        assert!(!ToolCategory::Compressor.requires_bundle());
        assert!(ToolCategory::Decompressor.requires_bundle());
        assert!(ToolCategory::RegressionTester.requires_bundle());

        assert!(ToolCategory::Decompressor.requires_output());
        assert!(!ToolCategory::RegressionTester.requires_output());
    }

    #[test]
    fn test_failure_count_categories() {
        assert!(ToolCategory::UnitTestRunner.reports_failure_count());
        assert!(ToolCategory::RegressionTester.reports_failure_count());
        assert!(!ToolCategory::Compressor.reports_failure_count());
        assert!(!ToolCategory::Decompressor.reports_failure_count());
    }

    #[test]
    fn test_names_match_clap_and_serde() {
        for category in ToolCategory::ALL {
            let parsed = ToolCategory::from_str(category.as_str(), false).unwrap();
            assert_eq!(parsed, category);

            let yaml = serde_yaml::to_string(&category).unwrap();
            assert_eq!(yaml.trim(), category.as_str());
        }
    }

    #[test]
    fn test_deserialize_from_yaml() {
        let category: ToolCategory = serde_yaml::from_str("regression-tester").unwrap();
        assert_eq!(category, ToolCategory::RegressionTester);
        assert!(serde_yaml::from_str::<ToolCategory>("benchmark").is_err());
    }
}
