use serde::Deserialize;

/// Failure talking to the HR API. Carries the HTTP status when the server
/// answered at all, and a human-readable message lifted from the response
/// body (or the transport error) for display in the error slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: Option<u16>,
    pub message: String,
}

/// Shape of a structured error body, e.g. `{"detail": "..."}`.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(alias = "message", alias = "error")]
    detail: String,
}

impl ApiError {
    /// Builds the error for a non-success response. A JSON body has its
    /// detail field extracted; any other non-empty body is taken verbatim,
    /// matching what the server chose to say; an empty body falls back to
    /// a generic string.
    pub fn from_response(status: u16, body: &str) -> Self {
        let trimmed = body.trim();
        let message = if trimmed.is_empty() {
            format!("request failed (HTTP {status})")
        } else {
            match serde_json::from_str::<ErrorBody>(trimmed) {
                Ok(parsed) => parsed.detail,
                Err(_) => trimmed.to_string(),
            }
        };
        Self {
            status: Some(status),
            message,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(code) => write!(f, "{} (HTTP {code})", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self {
            status: err.status().map(|code| code.as_u16()),
            message: err.to_string(),
        }
    }
}
