use crate::domain::user::errors::CredentialError;
use crate::domain::user::ports::CredentialHasher;

/// Argon2id credential hasher, adapting the shared auth library to the
/// domain port.
pub struct Argon2CredentialHasher {
    hasher: auth::PasswordHasher,
}

impl Argon2CredentialHasher {
    pub fn new() -> Self {
        Self {
            hasher: auth::PasswordHasher::new(),
        }
    }
}

impl Default for Argon2CredentialHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialHasher for Argon2CredentialHasher {
    fn hash(&self, plain: &str) -> Result<String, CredentialError> {
        self.hasher
            .hash(plain)
            .map_err(|e| CredentialError::Hash(e.to_string()))
    }

    fn verify(&self, plain: &str, hash: &str) -> Result<bool, CredentialError> {
        self.hasher
            .verify(plain, hash)
            .map_err(|e| CredentialError::Verify(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify_through_port() {
        let hasher = Argon2CredentialHasher::new();

        let hash = hasher.hash("pass_word!").expect("hashing failed");
        assert!(hash.starts_with("$argon2"));

        assert!(hasher.verify("pass_word!", &hash).expect("verify failed"));
        assert!(!hasher.verify("wrong", &hash).expect("verify failed"));
    }

    #[test]
    fn test_verify_garbage_hash_is_error() {
        let hasher = Argon2CredentialHasher::new();
        assert!(hasher.verify("pass_word!", "not-a-hash").is_err());
    }
}
