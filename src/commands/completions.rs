//! Shell completions command

use std::io::Write;

use clap::CommandFactory;

use crate::cli::CompletionsArgs;
use crate::error::Result;

/// Generate shell completions
pub fn run(args: CompletionsArgs) -> Result<()> {
    generate(args, &mut std::io::stdout().lock())
}

fn generate(args: CompletionsArgs, out: &mut dyn Write) -> Result<()> {
    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(args.shell, &mut cmd, name, out);
    out.flush()?;
    Ok(())
}
