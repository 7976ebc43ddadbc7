//! Dependency errors

use super::AstricalError;

/// Creates a dependency conflict error naming both origins
pub fn conflict(
    name: impl Into<String>,
    existing: impl Into<String>,
    requested: impl Into<String>,
) -> AstricalError {
    AstricalError::DependencyConflict {
        name: name.into(),
        existing: existing.into(),
        requested: requested.into(),
    }
}

/// Creates a module not found error
pub fn module_not_found(name: impl Into<String>) -> AstricalError {
    AstricalError::ModuleNotFound { name: name.into() }
}
