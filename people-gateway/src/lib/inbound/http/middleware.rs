use auth::IdentityClaims;
use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::Value;

use crate::domain::authz::policy::Caller;
use crate::domain::result::Envelope;
use crate::inbound::http::router::AppState;

/// Middleware that validates bearer tokens and attaches the caller's
/// identity and role claims to the request.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    let claims: IdentityClaims = state.jwt.decode(token).map_err(|e| {
        tracing::warn!(error = %e, "Token validation failed");
        unauthorized("Invalid or expired token")
    })?;

    let user_id = claims.subject_id().ok_or_else(|| {
        tracing::warn!(sub = %claims.sub, "Token subject is not a user id");
        unauthorized("Invalid token format")
    })?;

    let caller = Caller::new(user_id, claims.role_set());
    req.extensions_mut().insert(caller);

    Ok(next.run(req).await)
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(Envelope::<Value>::failure(message)),
    )
        .into_response()
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| unauthorized("Missing Authorization header"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| unauthorized("Invalid Authorization header"))?;

    if !auth_str.starts_with("Bearer ") {
        return Err(unauthorized(
            "Invalid Authorization header format. Expected: Bearer <token>",
        ));
    }

    Ok(auth_str.trim_start_matches("Bearer "))
}
