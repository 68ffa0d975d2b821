//! Tools command implementation

use super::helpers;
use crate::cli::HostArgs;
use crate::error::Result;
use crate::ui;

/// List configured tools with their categories and requirements
pub fn run(host: &HostArgs) -> Result<()> {
    let config = helpers::load_config(host)?;
    ui::print_tools(&config);
    Ok(())
}
