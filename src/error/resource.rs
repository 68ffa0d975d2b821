//! Resource bundle and output storage errors

use super::HostError;

/// Creates a resource unavailable error
pub fn unavailable(path: impl Into<String>, reason: impl Into<String>) -> HostError {
    HostError::ResourceUnavailable {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a storage unavailable error
pub fn storage_unavailable(path: impl Into<String>, reason: impl Into<String>) -> HostError {
    HostError::StorageUnavailable {
        path: path.into(),
        reason: reason.into(),
    }
}
