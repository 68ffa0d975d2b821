//! Exec command implementation

use tracing::info;

use super::helpers;
use crate::cli::{ExecArgs, HostArgs};
use crate::config::ToolSpec;
use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::host::{ToolRun, run_tool};
use crate::ui;

/// Build a tool declaration from command line arguments
pub fn tool_spec(args: ExecArgs) -> ToolSpec {
    ToolSpec {
        category: args.category,
        program: args.program,
        args: args.args,
        count_args: args.count_args,
        per_case: args.per_case,
    }
}

/// Run an ad-hoc tool and print its report
///
/// Resource locations still fall back to the configuration file when one exists.
pub fn run(host: &HostArgs, args: ExecArgs) -> Result<ToolRun> {
    let spec = tool_spec(args);
    spec.validate(&spec.program.display().to_string())?;

    let config = helpers::load_optional_config(host)?;
    info!(program = %spec.program.display(), category = %spec.category, "running ad-hoc tool");

    let dispatcher = Dispatcher::new(spec.build());
    let result = run_tool(&dispatcher, &helpers::provisioning_bridge(host, &config))?;

    ui::print_report(&result);
    Ok(result)
}
