// ── Failure taxonomy ──
//
// Every call through the client resolves with a parsed body or rejects
// with exactly one of these variants. Callers pattern-match; nothing in
// this layer retries.

use serde_json::Value;
use thiserror::Error;

/// How far an error body got parsed, decided once at the response boundary
/// by inspecting the `Content-Type` header.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorBody {
    /// `application/json` (or compatible) body, parsed.
    Json(Value),
    /// Anything else, kept as raw text.
    Text(String),
    /// No body, or the body could not be read.
    Empty,
}

impl ErrorBody {
    /// The server-supplied human message, when one can be found.
    ///
    /// JSON bodies are probed for a top-level `message` field (the
    /// gateway's envelope shape); text bodies are returned as-is.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Json(value) => value.get("message").and_then(Value::as_str),
            Self::Text(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }

    /// Short single-line rendering for error display.
    pub fn preview(&self) -> String {
        match self {
            Self::Json(value) => {
                let raw = value.to_string();
                raw[..raw.len().min(200)].to_owned()
            }
            Self::Text(text) => text[..text.len().min(200)].to_owned(),
            Self::Empty => String::from("<empty body>"),
        }
    }
}

/// The closed failure taxonomy for calls against the gateway admin API.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure before any HTTP response was received.
    #[error("network error: {message}")]
    Network { message: String },

    /// The client-side timeout fired before the call settled. Carries the
    /// configured duration, not the elapsed one.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// Non-success HTTP response.
    #[error("HTTP {status} {status_text}: {}", .body.preview())]
    Http {
        status: u16,
        status_text: String,
        body: ErrorBody,
    },

    /// HTTP success whose envelope signalled failure (`code != 200`).
    /// Never raised by the transport client itself — mapping services
    /// detect it after unwrapping. Client-side validation failures use
    /// the same variant with code 400.
    #[error("gateway error {code}: {message}")]
    Application { code: i64, message: String },

    /// A success-status body that did not parse as the expected shape.
    /// The message embeds a body preview; `body` keeps the full text.
    #[error("invalid response body: {message}")]
    Decode { message: String, body: String },
}

impl Error {
    /// True for the 401 shape the transport intercepts for session expiry.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Http { status: 401, .. })
    }

    /// The message a UI should surface: the server's own wording when
    /// available, else the error's display form.
    pub fn surface_message(&self) -> String {
        match self {
            Self::Http { body, .. } => body
                .message()
                .map_or_else(|| self.to_string(), str::to_owned),
            Self::Application { message, .. } if !message.is_empty() => message.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_body_message_extraction() {
        let body = ErrorBody::Json(json!({"code": 500, "message": "provider offline"}));
        assert_eq!(body.message(), Some("provider offline"));
    }

    #[test]
    fn text_body_message_is_raw() {
        let body = ErrorBody::Text("Bad Gateway".into());
        assert_eq!(body.message(), Some("Bad Gateway"));
        assert_eq!(ErrorBody::Empty.message(), None);
    }

    #[test]
    fn surface_message_prefers_server_wording() {
        let err = Error::Http {
            status: 500,
            status_text: "Internal Server Error".into(),
            body: ErrorBody::Json(json!({"message": "quota exhausted"})),
        };
        assert_eq!(err.surface_message(), "quota exhausted");

        let fallback = Error::Http {
            status: 502,
            status_text: "Bad Gateway".into(),
            body: ErrorBody::Empty,
        };
        assert!(fallback.surface_message().contains("502"));
    }
}
