//! toolhost - native tool launcher
//!
//! Hosts native test and benchmark tools behind a small integer-return protocol. A host
//! loads one tool of a fixed [`ToolCategory`], provisions the resources that category
//! needs, makes a single blocking call and turns the returned integer into an
//! [`Outcome`] with a user-facing report.
//!
//! ```no_run
//! use toolhost::{Dispatcher, NativeTool, ProvisioningBridge, run_tool};
//! use toolhost::native::process::ProcessTool;
//!
//! let tool = NativeTool::compressor(ProcessTool::new("./compressor", Vec::new()));
//! let run = run_tool(&Dispatcher::new(tool), &ProvisioningBridge::default())?;
//! println!("{}", run.report());
//! # Ok::<(), toolhost::HostError>(())
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod host;
pub mod native;
pub mod protocol;
pub mod regression;
pub mod resources;
pub mod ui;

pub use dispatch::{Dispatcher, Invocation};
pub use error::{HostError, Result};
pub use host::{HOST_ERROR_EXIT_CODE, ToolRun, run_tool};
pub use native::NativeTool;
pub use protocol::{Outcome, RawResult, ReturnCode, ToolCategory, UnitTestSummary};
pub use resources::{OutputLocation, ProvisioningBridge, ResourceBundle};
