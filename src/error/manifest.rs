//! Module manifest errors

use super::AstricalError;

/// Creates a manifest not found error
pub fn not_found(location: impl Into<String>) -> AstricalError {
    AstricalError::ManifestNotFound {
        location: location.into(),
    }
}

/// Creates an invalid manifest error
pub fn invalid(location: impl Into<String>, reason: impl Into<String>) -> AstricalError {
    AstricalError::ManifestInvalid {
        location: location.into(),
        reason: reason.into(),
    }
}
