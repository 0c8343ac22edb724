use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::role::errors::RoleDescriptionError;
use crate::domain::role::errors::RoleNameError;

/// Role entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Role {
    pub id: RoleId,
    pub name: RoleName,
    pub description: RoleDescription,
    pub date_created: DateTime<Utc>,
}

/// Role unique identifier, assigned by the store at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoleId(pub i32);

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Role name value type, 2-50 characters, unique across roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleName(String);

impl RoleName {
    const MIN_LENGTH: usize = 2;
    const MAX_LENGTH: usize = 50;

    /// Create a new valid role name.
    ///
    /// # Errors
    /// * `InvalidLength` - Length outside 2-50 characters
    pub fn new(name: String) -> Result<Self, RoleNameError> {
        let length = name.chars().count();
        if length < Self::MIN_LENGTH || length > Self::MAX_LENGTH {
            return Err(RoleNameError::InvalidLength {
                min: Self::MIN_LENGTH,
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Role description value type, 3-200 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleDescription(String);

impl RoleDescription {
    const MIN_LENGTH: usize = 3;
    const MAX_LENGTH: usize = 200;

    /// Create a new valid role description.
    ///
    /// # Errors
    /// * `InvalidLength` - Length outside 3-200 characters
    pub fn new(description: String) -> Result<Self, RoleDescriptionError> {
        let length = description.chars().count();
        if length < Self::MIN_LENGTH || length > Self::MAX_LENGTH {
            return Err(RoleDescriptionError::InvalidLength {
                min: Self::MIN_LENGTH,
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }
        Ok(Self(description))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_name_length_bounds() {
        assert!(RoleName::new("HR".to_string()).is_ok());
        assert!(RoleName::new("X".to_string()).is_err());
        assert!(RoleName::new("x".repeat(51)).is_err());
    }

    #[test]
    fn test_role_description_length_bounds() {
        assert!(RoleDescription::new("Handles people".to_string()).is_ok());
        assert!(RoleDescription::new("ab".to_string()).is_err());
        assert!(RoleDescription::new("x".repeat(201)).is_err());
    }
}
