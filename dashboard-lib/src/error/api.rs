//! Transport and HTTP failures

use std::time::Duration;

/// A request to the admin API that did not produce a usable response.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    ///
    /// `message` is the body's `message` field when it had one, otherwise the
    /// operation's own failure text (e.g. "Failed to fetch users").
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The request never got an answer.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    /// The base URL could not be turned into an endpoint.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The user-facing failure text of an HTTP error.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Http { message, .. } => Some(message),
            _ => None,
        }
    }

    /// `true` for 401 and 403: the session is missing, expired or not an admin.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status_code(), Some(401 | 403))
    }

    /// `true` when repeating the same request later may succeed.
    ///
    /// Nothing in this crate retries; hosts decide.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http { status, .. } => *status == 429 || (500..600).contains(status),
            Self::Network(_) | Self::Timeout(_) => true,
            Self::InvalidUrl(_) => false,
        }
    }
}
