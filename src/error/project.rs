//! Project discovery and configuration errors

use super::AstricalError;

/// Creates a project not found error
pub fn not_found(path: impl Into<String>) -> AstricalError {
    AstricalError::ProjectNotFound { path: path.into() }
}

/// Creates a configuration parse error
pub fn config_parse_failed(path: impl Into<String>, reason: impl Into<String>) -> AstricalError {
    AstricalError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a workspace sync error
pub fn sync_failed(command: impl Into<String>, message: impl Into<String>) -> AstricalError {
    AstricalError::SyncFailed {
        command: command.into(),
        message: message.into(),
    }
}
