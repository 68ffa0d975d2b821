//! Error types and handling for toolhost
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`resource`]: Resource bundle and output storage errors
//! - [`config`]: Configuration errors
//! - [`tool`]: Tool lookup and invocation binding errors
//!
//! Note that a failing native tool is *not* an error here. Failure counts and fatal
//! return codes are outcomes (see [`crate::protocol::Outcome`]); the variants below are
//! host-level problems that stop an invocation before the native call is made.

pub mod config;
pub mod resource;
pub mod tool;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for toolhost operations
#[derive(Error, Diagnostic, Debug)]
pub enum HostError {
    // Resource errors
    #[error("Resource bundle unavailable at '{path}': {reason}")]
    #[diagnostic(
        code(toolhost::resource::unavailable),
        help("Point --bundle, TOOLHOST_BUNDLE_DIR or `bundle_dir` at a readable directory")
    )]
    ResourceUnavailable { path: String, reason: String },

    #[error("Output storage unavailable at '{path}': {reason}")]
    #[diagnostic(
        code(toolhost::storage::unavailable),
        help("Point --output, TOOLHOST_OUTPUT_DIR or `output_dir` at a writable directory")
    )]
    StorageUnavailable { path: String, reason: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(toolhost::config::not_found),
        help("Create toolhost.yaml or pass --config, or use `toolhost exec` for ad-hoc runs")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(toolhost::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(toolhost::config::invalid))]
    ConfigInvalid { message: String },

    // Tool errors
    #[error("Tool '{name}' is not configured")]
    #[diagnostic(
        code(toolhost::tool::not_found),
        help("Run 'toolhost tools' to list the configured tools")
    )]
    ToolNotFound { name: String },

    #[error("Invocation for {requested} cannot be dispatched to a {loaded} entry point")]
    #[diagnostic(code(toolhost::tool::category_mismatch))]
    CategoryMismatch { requested: String, loaded: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(toolhost::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for HostError {
    fn from(err: std::io::Error) -> Self {
        HostError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for HostError {
    fn from(err: serde_yaml::Error) -> Self {
        HostError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for HostError {
    fn from(err: serde_json::Error) -> Self {
        HostError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, HostError>;
