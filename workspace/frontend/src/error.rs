use model::ValidationError;
use thiserror::Error;

/// Everything that can go wrong while fetching from the backend.
///
/// Fetch errors never escape as panics: every component converts them into
/// its own error state at the point of the request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Network unreachable, connection refused, DNS failure, timeout
    #[error("Request failed: {0}")]
    Transport(String),

    /// Non-2xx response status
    #[error("HTTP {status}: {reason}")]
    Http { status: u16, reason: String },

    /// Payload failed shape or field validation
    #[error("Invalid data format received from server: {0}")]
    MalformedResponse(String),

    /// Backend answered with `success: false`
    #[error("{0}")]
    Application(String),
}

/// Discriminant of [`FetchError`], handy for matching in callers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchErrorKind {
    Transport,
    Http,
    MalformedResponse,
    Application,
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Transport(_) => FetchErrorKind::Transport,
            FetchError::Http { .. } => FetchErrorKind::Http,
            FetchError::MalformedResponse(_) => FetchErrorKind::MalformedResponse,
            FetchError::Application(_) => FetchErrorKind::Application,
        }
    }

    /// HTTP status code, for [`FetchError::Http`] only.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<ValidationError> for FetchError {
    fn from(error: ValidationError) -> Self {
        FetchError::MalformedResponse(error.to_string())
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            FetchError::MalformedResponse(error.to_string())
        } else if let Some(status) = error.status() {
            FetchError::Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            }
        } else {
            FetchError::Transport(error.to_string())
        }
    }
}
