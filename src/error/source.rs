//! Module reference parsing errors

use super::AstricalError;

/// Creates an invalid reference error
pub fn invalid_reference(reference: impl Into<String>, reason: impl Into<String>) -> AstricalError {
    AstricalError::InvalidReference {
        reference: reference.into(),
        reason: reason.into(),
    }
}
