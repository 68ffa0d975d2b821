//! Tool lookup and binding errors

use super::HostError;

/// Creates a tool not found error
pub fn not_found(name: impl Into<String>) -> HostError {
    HostError::ToolNotFound { name: name.into() }
}

/// Creates an error for an invocation whose category differs from the loaded tool
pub fn category_mismatch(requested: impl Into<String>, loaded: impl Into<String>) -> HostError {
    HostError::CategoryMismatch {
        requested: requested.into(),
        loaded: loaded.into(),
    }
}
