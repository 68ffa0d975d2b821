//! Version command implementation

use crate::error::Result;
use crate::protocol::ToolCategory;

/// Run version command
pub fn run() -> Result<()> {
    println!("toolhost {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());
    println!("  Tool categories: {}", categories());

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}

fn categories() -> String {
    ToolCategory::ALL
        .iter()
        .map(|category| category.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
