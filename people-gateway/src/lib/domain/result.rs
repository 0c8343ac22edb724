use serde::Deserialize;
use serde::Serialize;

/// The result envelope exchanged with the identity service.
///
/// The gateway deserializes this from upstream responses, re-derives an
/// HTTP status from it, and re-serializes it to the caller unchanged. The
/// gateway's own authorization failures are expressed in the same shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub is_success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            is_success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            is_success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}
