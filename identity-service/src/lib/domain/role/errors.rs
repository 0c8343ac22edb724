use thiserror::Error;

/// Error for role name validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoleNameError {
    #[error("Role name must be {min}-{max} characters, got {actual}")]
    InvalidLength {
        min: usize,
        max: usize,
        actual: usize,
    },
}

/// Error for role description validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoleDescriptionError {
    #[error("Role description must be {min}-{max} characters, got {actual}")]
    InvalidLength {
        min: usize,
        max: usize,
        actual: usize,
    },
}

/// Error surfaced by the role store on any underlying failure.
///
/// Converted into generic failure envelopes at the manager boundary.
#[derive(Debug, Clone, Error)]
pub enum RoleStoreError {
    #[error("Role name already exists: {0}")]
    DuplicateName(String),

    #[error("Unknown user or role in link")]
    UnknownUserOrRole,

    #[error("Database error: {0}")]
    Database(String),
}
