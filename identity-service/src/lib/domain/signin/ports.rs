use crate::domain::result::OpResult;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Turns a validated identity and its role set into a signed token.
///
/// Implementations must fold every internal error into the envelope; the
/// pipeline normalizes anything unsuccessful to a single message.
pub trait TokenIssuer: Send + Sync + 'static {
    fn generate_token(&self, subject: UserId, user: &User, roles: &[String]) -> OpResult<String>;
}
