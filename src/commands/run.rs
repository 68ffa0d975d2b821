//! Run command implementation
//!
//! Looks the tool up in the configuration file, binds it and runs it once.

use tracing::info;

use super::helpers;
use crate::cli::{HostArgs, RunArgs};
use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::host::{ToolRun, run_tool};
use crate::ui;

/// Run a configured tool and print its report
pub fn run(host: &HostArgs, args: RunArgs) -> Result<ToolRun> {
    let config = helpers::load_config(host)?;
    let spec = config.tool(&args.tool)?;
    info!(tool = %args.tool, category = %spec.category, "running configured tool");

    let dispatcher = Dispatcher::new(spec.build());
    let result = run_tool(&dispatcher, &helpers::provisioning_bridge(host, &config))?;

    ui::print_report(&result);
    Ok(result)
}
