use thiserror::Error;

/// Error for user name validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserNameError {
    #[error("User name too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("User name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for email validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for phone number validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PhoneNumberError {
    #[error("Phone number must be {min}-{max} characters, got {actual}")]
    InvalidLength {
        min: usize,
        max: usize,
        actual: usize,
    },
}

/// Error for password policy violations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("Password too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },
}

/// Error surfaced by the user store on any underlying failure.
///
/// Never reaches a client directly; managers convert every variant into a
/// generic failure envelope at their boundary.
#[derive(Debug, Clone, Error)]
pub enum UserStoreError {
    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Error from the credential hashing collaborator.
#[derive(Debug, Clone, Error)]
pub enum CredentialError {
    #[error("Credential hashing failed: {0}")]
    Hash(String),

    #[error("Credential verification failed: {0}")]
    Verify(String),
}
