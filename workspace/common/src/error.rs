use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Shown when the query service gives nothing better to display.
pub const FALLBACK_ERROR: &str = "Failed to get response";

/// Error types for the chat client
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// Submitted question was empty or whitespace
    #[error("Please enter a question")]
    EmptyQuestion,

    /// Turn id does not belong to the conversation
    #[error("Unknown turn: {0}")]
    UnknownTurn(usize),

    /// Turn already carries a response
    #[error("Turn {0} is already resolved")]
    AlreadyResolved(usize),

    /// Query failed; carries the message to show under the input
    #[error("{0}")]
    Query(String),
}

/// Error body some query services return alongside a non-2xx status.
///
/// Fields stay raw so a non-string `error` does not hide a usable `message`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
}

impl ErrorResponse {
    pub fn error_text(&self) -> Option<&str> {
        self.error.as_ref().and_then(Value::as_str)
    }

    pub fn message_text(&self) -> Option<&str> {
        self.message.as_ref().and_then(Value::as_str)
    }
}

/// Pick the message shown for a failed query.
///
/// Order: server `error`, server `message`, transport message, fallback.
/// Empty strings are skipped at every step.
pub fn query_error_message(body: Option<&ErrorResponse>, transport: Option<&str>) -> String {
    let non_empty = |s: &&str| !s.trim().is_empty();

    body.and_then(|b| b.error_text().filter(non_empty))
        .or_else(|| body.and_then(|b| b.message_text().filter(non_empty)))
        .or_else(|| transport.filter(non_empty))
        .unwrap_or(FALLBACK_ERROR)
        .to_string()
}

/// Transport message for a non-2xx status.
pub fn status_error_message(status: u16) -> String {
    format!("Request failed with status code {status}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(error: Option<&str>, message: Option<&str>) -> ErrorResponse {
        ErrorResponse {
            error: error.map(Value::from),
            message: message.map(Value::from),
        }
    }

    #[test]
    fn test_server_error_wins() {
        let b = body(Some("rate limited"), Some("slow down"));
        let msg = query_error_message(Some(&b), Some(&status_error_message(429)));
        assert_eq!(msg, "rate limited");
    }

    #[test]
    fn test_message_then_transport_then_fallback() {
        let b = body(None, Some("index is rebuilding"));
        assert_eq!(query_error_message(Some(&b), Some("x")), "index is rebuilding");

        let b = body(Some(""), None);
        assert_eq!(
            query_error_message(Some(&b), Some("Request failed with status code 502")),
            "Request failed with status code 502"
        );

        assert_eq!(query_error_message(None, None), FALLBACK_ERROR);
        assert_eq!(query_error_message(None, Some("  ")), FALLBACK_ERROR);
    }

    #[test]
    fn test_error_body_deserializes_partially() {
        let b: ErrorResponse = serde_json::from_str(r#"{ "error": "rate limited" }"#).unwrap();
        assert_eq!(b.error_text(), Some("rate limited"));
        assert!(b.message.is_none());
    }

    #[test]
    fn test_non_string_error_falls_through_to_message() {
        let b: ErrorResponse =
            serde_json::from_str(r#"{ "error": { "code": 429 }, "message": "slow down" }"#).unwrap();
        assert_eq!(b.error_text(), None);
        assert_eq!(
            query_error_message(Some(&b), Some(&status_error_message(429))),
            "slow down"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ChatError::EmptyQuestion.to_string(), "Please enter a question");
        assert_eq!(ChatError::Query("rate limited".into()).to_string(), "rate limited");
    }
}
