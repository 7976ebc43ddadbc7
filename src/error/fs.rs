//! File system errors

use super::AstricalError;

/// Creates a target-not-empty error
pub fn target_not_empty(path: impl Into<String>) -> AstricalError {
    AstricalError::TargetNotEmpty { path: path.into() }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> AstricalError {
    AstricalError::IoError {
        message: message.into(),
    }
}
