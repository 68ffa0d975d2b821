//! CLI definitions using clap derive API
//!
//! Argument types per command:
//! - run: Run a configured tool
//! - exec: Run an ad-hoc process-backed tool
//! - tools: List configured tools
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod exec;
pub mod run;

pub use completions::CompletionsArgs;
pub use exec::ExecArgs;
pub use run::RunArgs;

use crate::config::CONFIG_ENV;
use crate::resources::paths::{BUNDLE_DIR_ENV, OUTPUT_DIR_ENV};

/// toolhost - native tool launcher
///
/// Runs native test and benchmark tools and turns their integer return codes into
/// readable outcomes and exit codes.
#[derive(Parser, Debug)]
#[command(
    name = "toolhost",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Launch native tools and classify their results",
    long_about = "toolhost launches native unit test runners, compressors, decompressors and \
                  regression testers, provisions their resource bundle and output directory, \
                  and reports what their return codes mean.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  toolhost run unit-tests                          \x1b[90m# Run a tool from toolhost.yaml\x1b[0m\n   \
                  toolhost run regression --bundle ./assets        \x1b[90m# Override the resource bundle\x1b[0m\n   \
                  toolhost exec --category compressor -- ./compress \x1b[90m# Run without a config file\x1b[0m\n   \
                  toolhost tools                                   \x1b[90m# List configured tools\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    #[command(flatten)]
    pub host: HostArgs,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Locations shared by every command
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct HostArgs {
    /// Configuration file (defaults to ./toolhost.yaml)
    #[arg(long, short = 'c', global = true, env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Resource bundle directory
    #[arg(long, short = 'b', global = true, env = BUNDLE_DIR_ENV)]
    pub bundle: Option<PathBuf>,

    /// Output directory for tools that write artifacts
    #[arg(long, short = 'o', global = true, env = OUTPUT_DIR_ENV)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a tool declared in the configuration file
    Run(RunArgs),

    /// Run a program as a native tool of the given category
    Exec(ExecArgs),

    /// List configured tools
    Tools,

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
