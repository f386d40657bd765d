//! Normalized API error.
//!
//! Every service call surfaces failures as one [`ApiError`], whether the
//! request never got a response, the server answered with a non-2xx status,
//! or the body could not be decoded.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message used when no other source provides one.
pub const FALLBACK_MESSAGE: &str = "Something went wrong";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiErrorKind {
    /// No HTTP response reached the client.
    Transport,
    /// Non-2xx response with (possibly) a structured body.
    Application,
    /// 2xx response whose body did not match the expected shape.
    Decode,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub status: Option<u16>,
    pub message: String,
}

/// Error bodies come as `{status, message}` or `{status, error: {message}}`,
/// some endpoints also answer `{error: "text"}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorDetail {
    Object {
        #[serde(default)]
        message: Option<String>,
    },
    Text(String),
}

impl ErrorDetail {
    fn message(self) -> Option<String> {
        match self {
            ErrorDetail::Object { message } => message,
            ErrorDetail::Text(text) => Some(text),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl ApiError {
    /// Error raised when the request did not produce a response at all.
    pub fn transport(message: impl Into<String>) -> Self {
        let message = non_empty(Some(message.into())).unwrap_or_else(|| FALLBACK_MESSAGE.into());
        Self {
            kind: ApiErrorKind::Transport,
            status: None,
            message,
        }
    }

    /// Conflict detected on the client, reported like a server refusal.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Application,
            status: Some(409),
            message: message.into(),
        }
    }

    pub fn decode(status: u16, message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Decode,
            status: Some(status),
            message: message.into(),
        }
    }

    /// Builds the error for a non-2xx response.
    ///
    /// Message precedence: body `message`, then body `error.message`, then
    /// the transport-level status text, then [`FALLBACK_MESSAGE`].
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<ErrorBody>(body).ok();
        let (message, detail) = match parsed {
            Some(body) => (body.message, body.error),
            None => (None, None),
        };

        let message = non_empty(message)
            .or_else(|| non_empty(detail.and_then(ErrorDetail::message)))
            .or_else(|| non_empty(Some(Self::status_text(status))))
            .unwrap_or_else(|| FALLBACK_MESSAGE.into());

        Self {
            kind: ApiErrorKind::Application,
            status: Some(status),
            message,
        }
    }

    /// The text a transport library reports for a failed status code.
    pub fn status_text(status: u16) -> String {
        format!("Request failed with status code {status}")
    }

    /// Stable error name, mirrors the `name` field consumers read.
    pub fn name(&self) -> &'static str {
        match self.kind {
            ApiErrorKind::Transport => "TransportError",
            ApiErrorKind::Application => "ApplicationError",
            ApiErrorKind::Decode => "DecodeError",
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(401)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            kind: ApiErrorKind::Decode,
            status: None,
            message: format!("Failed to parse response: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_keeps_transport_message() {
        let err = ApiError::transport("NetworkError when attempting to fetch resource.");
        assert_eq!(err.message, "NetworkError when attempting to fetch resource.");
        assert_eq!(err.status, None);
        assert_eq!(err.name(), "TransportError");
    }

    #[test]
    fn empty_transport_message_falls_back() {
        assert_eq!(ApiError::transport("  ").message, FALLBACK_MESSAGE);
    }

    #[test]
    fn not_found_body_message_wins() {
        let err = ApiError::from_response(404, r#"{"status":404,"message":"Not found"}"#);
        assert_eq!(err.status, Some(404));
        assert_eq!(err.message, "Not found");
        assert_eq!(err.name(), "ApplicationError");
    }

    #[test]
    fn nested_error_object_is_second() {
        let err = ApiError::from_response(
            422,
            r#"{"status":422,"error":{"message":"Coupon code already exists"}}"#,
        );
        assert_eq!(err.message, "Coupon code already exists");
    }

    #[test]
    fn top_level_message_beats_nested_one() {
        let err = ApiError::from_response(
            400,
            r#"{"message":"Bad input","error":{"message":"ignored"}}"#,
        );
        assert_eq!(err.message, "Bad input");
    }

    #[test]
    fn plain_text_error_field_is_accepted() {
        let err = ApiError::from_response(500, r#"{"error":"database unavailable"}"#);
        assert_eq!(err.message, "database unavailable");
    }

    #[test]
    fn unstructured_body_uses_status_text() {
        let err = ApiError::from_response(502, "<html>Bad gateway</html>");
        assert_eq!(err.message, "Request failed with status code 502");
        assert_eq!(err.status, Some(502));
    }

    #[test]
    fn unauthorized_is_detected() {
        assert!(ApiError::from_response(401, "").is_unauthorized());
        assert!(!ApiError::from_response(403, "").is_unauthorized());
        assert!(!ApiError::transport("offline").is_unauthorized());
    }
}
