//! Terminal presentation
//!
//! The report line is the only thing a run writes to stdout. Diagnostics and logs go
//! to stderr.

use console::Style;

use crate::config::HostConfig;
use crate::host::ToolRun;
use crate::protocol::{Outcome, ToolCategory};

/// Style for the report of an outcome
pub fn outcome_style(outcome: &Outcome) -> Style {
    match outcome {
        Outcome::Success => Style::new().green().bold(),
        Outcome::PartialFailure(_) => Style::new().yellow().bold(),
        Outcome::FatalError(_) => Style::new().red().bold(),
    }
}

/// Print the report of a finished run
pub fn print_report(run: &ToolRun) {
    println!("{}", outcome_style(&run.outcome).apply_to(run.report()));
}

/// Resources a category needs, for listings
pub fn requirements(category: ToolCategory) -> String {
    let mut needs = Vec::new();
    if category.requires_bundle() {
        needs.push("bundle");
    }
    if category.requires_output() {
        needs.push("output");
    }

    if needs.is_empty() {
        "-".to_string()
    } else {
        needs.join(", ")
    }
}

/// Print the tools declared in a configuration
pub fn print_tools(config: &HostConfig) {
    if config.tools.is_empty() {
        println!("No tools configured.");
        return;
    }

    println!("Configured tools ({}):", config.tools.len());
    println!();

    let bold = Style::new().bold();
    for (name, spec) in &config.tools {
        println!("  {}", Style::new().bold().yellow().apply_to(name));
        println!("    {} {}", bold.apply_to("Category:"), spec.category);
        println!("    {} {}", bold.apply_to("Program:"), spec.program.display());
        if !spec.args.is_empty() {
            println!("    {} {}", bold.apply_to("Args:"), spec.args.join(" "));
        }
        println!("    {} {}", bold.apply_to("Needs:"), requirements(spec.category));
        if spec.category.reports_failure_count() {
            let mode = if spec.per_case { ", one process per case" } else { "" };
            println!(
                "    {} {}",
                bold.apply_to("Result:"),
                Style::new().cyan().apply_to(format!("failure count{mode}"))
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requirements() {
        assert_eq!(requirements(ToolCategory::UnitTestRunner), "-");
        assert_eq!(requirements(ToolCategory::Compressor), "-");
        assert_eq!(requirements(ToolCategory::Decompressor), "bundle, output");
        assert_eq!(requirements(ToolCategory::RegressionTester), "bundle");
    }

    #[test]
    fn test_outcome_styles_differ() {
        let success = outcome_style(&Outcome::Success).force_styling(true);
        let fatal = outcome_style(&Outcome::FatalError(-1)).force_styling(true);
        assert_ne!(
            success.apply_to("x").to_string(),
            fatal.apply_to("x").to_string()
        );
    }
}
