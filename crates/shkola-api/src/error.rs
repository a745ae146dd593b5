//! API Errors
//!
//! Every failure a resource call can produce. The UI does not branch on the
//! kind; it only asks for a message to show.

use serde::Deserialize;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Non-2xx response carrying the server's `{ message, field }` body
    #[error("{message}")]
    Server {
        status: u16,
        message: String,
        field: Option<String>,
    },

    /// Non-2xx response without a readable body
    #[error("Request failed with status {0}")]
    Status(u16),

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Unexpected response: {0}")]
    Decode(String),

    /// 2xx response whose envelope said `success: false`
    #[error("{0}")]
    Rejected(String),

    /// Form buffer could not be turned into a payload
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// Message for a notification: the server's or validator's own text if
    /// there is one, the generic fallback otherwise.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Server { message, .. } if !message.trim().is_empty() => message.clone(),
            ApiError::Validation(message) => message.clone(),
            _ => fallback.to_string(),
        }
    }

    /// Name of the offending form field, when the server reported one.
    pub fn field(&self) -> Option<&str> {
        match self {
            ApiError::Server { field, .. } => field.as_deref(),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Error body returned by the server on non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ServerMessage {
    pub message: String,
    #[serde(default)]
    pub field: Option<String>,
}

impl ApiError {
    /// Build the error for a non-2xx status from whatever body came back.
    pub(crate) fn from_status(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ServerMessage>(body) {
            Ok(ServerMessage { message, field }) => ApiError::Server {
                status,
                message,
                field,
            },
            Err(_) => ApiError::Status(status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_body_parsed() {
        let err = ApiError::from_status(
            400,
            r#"{"message":"Неправильный телефон или пароль","field":null,"success":false}"#,
        );
        assert_eq!(
            err,
            ApiError::Server {
                status: 400,
                message: "Неправильный телефон или пароль".to_string(),
                field: None,
            }
        );
        assert_eq!(err.user_message("Failed to login."), "Неправильный телефон или пароль");
    }

    #[test]
    fn test_unreadable_body_falls_back_to_status() {
        let err = ApiError::from_status(502, "<html>bad gateway</html>");
        assert_eq!(err, ApiError::Status(502));
        assert_eq!(err.user_message("Failed to update room."), "Failed to update room.");
    }

    #[test]
    fn test_field_exposed() {
        let err = ApiError::from_status(400, r#"{"message":"занято","field":"phone"}"#);
        assert_eq!(err.field(), Some("phone"));
    }

    #[test]
    fn test_transport_uses_fallback() {
        let err = ApiError::Transport("connection refused".to_string());
        assert_eq!(err.user_message("Failed to delete class."), "Failed to delete class.");
    }
}
