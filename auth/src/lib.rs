//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure for the identity and
//! gateway services:
//! - Password hashing (Argon2id)
//! - JWT token generation and validation (HS256)
//! - Typed identity claims carrying the subject's role list
//!
//! Each service defines its own ports and adapts these implementations.
//! This avoids coupling services through shared domain logic while reducing
//! code duplication.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Identity Tokens
//! ```
//! use auth::{IdentityClaims, JwtHandler};
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = IdentityClaims::new(
//!     7,
//!     "alice@example.com".to_string(),
//!     "alice".to_string(),
//!     vec!["EMPLOYEE".to_string()],
//!     24,
//! );
//! let token = handler.encode(&claims).unwrap();
//! let decoded: IdentityClaims = handler.decode(&token).unwrap();
//! assert_eq!(decoded.subject_id(), Some(7));
//! ```

pub mod claims;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use claims::IdentityClaims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
