use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::user::errors::EmailError;
use crate::domain::user::errors::PasswordPolicyError;
use crate::domain::user::errors::PhoneNumberError;
use crate::domain::user::errors::UserNameError;

/// User aggregate entity.
///
/// Represents a registered account. The password hash never leaves the
/// service; outward DTOs are built without it.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub user_name: UserName,
    pub email: EmailAddress,
    pub phone_number: PhoneNumber,
    pub password_hash: String,
    pub date_created: DateTime<Utc>,
    /// Role names attached via the user-role join; empty unless the read
    /// path loads them.
    pub roles: Vec<String>,
}

/// User unique identifier, assigned by the store at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i32);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// User name value type, 2-50 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    const MIN_LENGTH: usize = 2;
    const MAX_LENGTH: usize = 50;

    /// Create a new valid user name.
    ///
    /// # Errors
    /// * `TooShort` / `TooLong` - Length outside 2-50 characters
    pub fn new(user_name: String) -> Result<Self, UserNameError> {
        let length = user_name.chars().count();
        if length < Self::MIN_LENGTH {
            return Err(UserNameError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            });
        }
        if length > Self::MAX_LENGTH {
            return Err(UserNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }
        Ok(Self(user_name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type.
///
/// Validates format using an RFC 5322 compliant parser. Comparisons over
/// the wire are case-insensitive; the original casing is preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Phone number value type, 3-20 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    const MIN_LENGTH: usize = 3;
    const MAX_LENGTH: usize = 20;

    /// Create a new valid phone number.
    ///
    /// # Errors
    /// * `InvalidLength` - Length outside 3-20 characters
    pub fn new(phone_number: String) -> Result<Self, PhoneNumberError> {
        let length = phone_number.chars().count();
        if length < Self::MIN_LENGTH || length > Self::MAX_LENGTH {
            return Err(PhoneNumberError::InvalidLength {
                min: Self::MIN_LENGTH,
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }
        Ok(Self(phone_number))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Plaintext password accepted at registration or reset, minimum 8
/// characters. Debug output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    const MIN_LENGTH: usize = 8;

    /// Create a new password value.
    ///
    /// # Errors
    /// * `TooShort` - Fewer than 8 characters
    pub fn new(password: String) -> Result<Self, PasswordPolicyError> {
        let length = password.chars().count();
        if length < Self::MIN_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            });
        }
        Ok(Self(password))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Command to register a new user with validated fields.
#[derive(Debug)]
pub struct NewUser {
    pub user_name: UserName,
    pub email: EmailAddress,
    pub phone_number: PhoneNumber,
    pub password: Password,
}

impl NewUser {
    pub fn new(
        user_name: UserName,
        email: EmailAddress,
        phone_number: PhoneNumber,
        password: Password,
    ) -> Self {
        Self {
            user_name,
            email,
            phone_number,
            password,
        }
    }
}

/// Command to overwrite a user's mutable fields (email and phone number).
#[derive(Debug)]
pub struct UserUpdate {
    pub email: EmailAddress,
    pub phone_number: PhoneNumber,
}
