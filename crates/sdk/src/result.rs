//! The uniform result shape returned by every upstream call.

use serde::Serialize;
use serde_json::Value;

/// Status code used when a lookup is rejected before contacting upstream.
pub const LOCAL_REJECTION_STATUS: u16 = 400;
/// Status code used when the upstream could not be reached or sent garbage.
pub const BAD_GATEWAY_STATUS: u16 = 502;
/// Status code used when the upstream call exceeded the configured timeout.
pub const GATEWAY_TIMEOUT_STATUS: u16 = 504;

/// Outcome of one upstream call.
///
/// A successful call carries the upstream body untouched. Every failure is
/// folded into an [`ErrorPayload`] so callers always receive well-formed
/// JSON and must inspect `result` themselves.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UpstreamResult {
    Body(Value),
    Error(ErrorPayload),
}

/// `{data: {}, result: <status>, message: <text>}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorPayload {
    pub data: Value,
    pub result: u16,
    pub message: String,
}

impl UpstreamResult {
    /// Payload for a non-200 upstream response.
    pub fn upstream_error(status: u16, body: &str) -> Self {
        Self::error(status, format!("Error: {}", body))
    }

    /// Payload with an arbitrary status and message.
    pub fn error(status: u16, message: impl Into<String>) -> Self {
        Self::Error(ErrorPayload {
            data: Value::Object(Default::default()),
            result: status,
            message: message.into(),
        })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Status embedded in the payload. Passthrough bodies report their own
    /// `result` field when present and 200 otherwise.
    pub fn result_code(&self) -> u16 {
        match self {
            Self::Error(payload) => payload.result,
            Self::Body(body) => body
                .get("result")
                .and_then(Value::as_u64)
                .and_then(|code| u16::try_from(code).ok())
                .unwrap_or(200),
        }
    }

    /// JSON form of the result, as sent to gateway callers.
    pub fn into_value(self) -> Value {
        match self {
            Self::Body(body) => body,
            // Plain struct of JSON-native fields, serialization cannot fail.
            Self::Error(payload) => serde_json::to_value(payload).unwrap_or_default(),
        }
    }
}
