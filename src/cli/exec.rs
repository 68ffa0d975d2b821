use clap::Parser;
use std::path::PathBuf;

use crate::protocol::ToolCategory;

/// Arguments for exec command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Run a compressor:\n    toolhost exec --category compressor -- ./compressor -in=clip.json\n\n\
                  Run a unit test binary that prints its case count with --count:\n    \
                  toolhost exec --category unit-test-runner --count-arg=--count -- ./unit_tests\n\n\
                  Run one compressor process per manifest case:\n    \
                  toolhost exec --category regression-tester --per-case --bundle ./assets \\\n      \
                  -- ./compressor -test '-config={config}' '-acl={clip}'")]
pub struct ExecArgs {
    /// Tool category
    #[arg(long, value_enum)]
    pub category: ToolCategory,

    /// Argument that makes a unit test runner print its case count (repeatable)
    #[arg(long = "count-arg", allow_hyphen_values = true)]
    pub count_args: Vec<String>,

    /// Run the program once per case listed in the bundle's metadata.json
    #[arg(long)]
    pub per_case: bool,

    /// Program to run
    pub program: PathBuf,

    /// Arguments passed to the program
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}
