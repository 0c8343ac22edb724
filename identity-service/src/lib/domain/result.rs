use serde::Deserialize;
use serde::Serialize;

/// Uniform success/data/error envelope returned by every business operation.
///
/// Exactly one of the two states holds: success with a populated `data`, or
/// failure with a populated `error`. The envelope crosses the service
/// boundary as-is, so the JSON field names are part of the wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpResult<T> {
    pub is_success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> OpResult<T> {
    /// Build a successful result carrying `data`.
    pub fn success(data: T) -> Self {
        Self {
            is_success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Build a failed result carrying an error message.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            is_success: false,
            data: None,
            error: Some(error.into()),
        }
    }

    /// Map the payload into another type.
    ///
    /// A failed result propagates its error unchanged. A successful result
    /// whose payload is absent degrades to `failure("No data.")` - callers
    /// must treat "success with no data" exactly like a failure, since the
    /// transport layer derives status codes from this envelope alone.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> OpResult<U> {
        if !self.is_success {
            return OpResult {
                is_success: false,
                data: None,
                error: self.error,
            };
        }

        match self.data {
            Some(data) => OpResult::success(f(data)),
            None => OpResult::failure("No data."),
        }
    }

    /// Re-wrap a failure under a different payload type, keeping the error
    /// message byte-for-byte. A successful input loses its payload.
    pub fn propagate<U>(self) -> OpResult<U> {
        OpResult {
            is_success: self.is_success,
            data: None,
            error: self.error,
        }
    }
}
