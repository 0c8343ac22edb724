use std::collections::HashSet;

use thiserror::Error;

/// The authenticated caller, reconstructed from validated token claims.
#[derive(Debug, Clone)]
pub struct Caller {
    pub user_id: i32,
    pub roles: HashSet<String>,
}

impl Caller {
    pub fn new(user_id: i32, roles: HashSet<String>) -> Self {
        Self { user_id, roles }
    }

    fn holds_any(&self, roles: &[String]) -> bool {
        roles.iter().any(|role| self.roles.contains(role))
    }
}

/// What a route demands of its caller.
#[derive(Debug, Clone)]
pub enum Requirement<'a> {
    /// Caller must hold at least one of these roles.
    AnyRole(&'a [String]),
    /// Caller must be the target user, with no role bypass.
    SelfOnly { target: i32 },
    /// Caller must be the target user, or hold one of these roles.
    SelfOrRole { target: i32, roles: &'a [String] },
}

/// Denial reasons, mapped to distinct HTTP statuses by the transport layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AccessDenied {
    #[error("You can only access your own record.")]
    NotOwner,

    #[error("Caller lacks a required role.")]
    MissingRole,
}

/// Decide whether the caller may proceed.
///
/// Runs before any outbound call; a denial never reaches the identity
/// service.
pub fn authorize(caller: &Caller, requirement: &Requirement<'_>) -> Result<(), AccessDenied> {
    match requirement {
        Requirement::AnyRole(roles) => {
            if caller.holds_any(roles) {
                Ok(())
            } else {
                Err(AccessDenied::MissingRole)
            }
        }
        Requirement::SelfOnly { target } => {
            if caller.user_id == *target {
                Ok(())
            } else {
                Err(AccessDenied::NotOwner)
            }
        }
        Requirement::SelfOrRole { target, roles } => {
            if caller.user_id == *target || caller.holds_any(roles) {
                Ok(())
            } else {
                Err(AccessDenied::NotOwner)
            }
        }
    }
}

/// Role names that carry elevated access, loaded from configuration.
#[derive(Debug, Clone)]
pub struct RolePolicy {
    admin_roles: Vec<String>,
    elevated_roles: Vec<String>,
}

impl RolePolicy {
    /// # Arguments
    /// * `admin_role` - The single fully-privileged role
    /// * `elevated_roles` - Roles allowed on management routes (usually a
    ///   superset containing the admin role)
    pub fn new(admin_role: String, elevated_roles: Vec<String>) -> Self {
        Self {
            admin_roles: vec![admin_role],
            elevated_roles,
        }
    }

    /// Roles accepted on admin-only routes.
    pub fn admin(&self) -> &[String] {
        &self.admin_roles
    }

    /// Roles accepted on management routes.
    pub fn elevated(&self) -> &[String] {
        &self.elevated_roles
    }
}
