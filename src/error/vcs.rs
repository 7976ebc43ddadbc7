//! Version-control errors

use super::AstricalError;

/// Creates an error for a git invocation that exited non-zero
pub fn operation_failed(operation: impl Into<String>, message: impl Into<String>) -> AstricalError {
    AstricalError::VcsOperationFailed {
        operation: operation.into(),
        message: message.into(),
    }
}
