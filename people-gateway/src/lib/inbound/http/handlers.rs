use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::Value;

use crate::domain::authz::policy::AccessDenied;
use crate::domain::result::Envelope;

pub mod people;
pub mod roles;

/// Turn a forwarded envelope into a response, re-deriving the status the
/// same way the identity service does: "unexpected" marks server faults,
/// "not found" marks missing records, anything else is a business failure.
pub fn reply(envelope: Envelope<Value>) -> Response {
    (status_for(&envelope), Json(envelope)).into_response()
}

pub fn status_for<T>(envelope: &Envelope<T>) -> StatusCode {
    if envelope.is_success {
        return StatusCode::OK;
    }

    let lowered = envelope.error.as_deref().unwrap_or_default().to_lowercase();
    if lowered.contains("unexpected") {
        StatusCode::INTERNAL_SERVER_ERROR
    } else if lowered.contains("not found") {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::BAD_REQUEST
    }
}

/// Turn a policy denial into a response without contacting the identity
/// service: ownership violations are 401, missing role claims are 403.
pub fn denied(denial: AccessDenied) -> Response {
    let status = match denial {
        AccessDenied::NotOwner => StatusCode::UNAUTHORIZED,
        AccessDenied::MissingRole => StatusCode::FORBIDDEN,
    };

    (status, Json(Envelope::<Value>::failure(denial.to_string()))).into_response()
}
