//! Authentication error types

/// Errors raised by the session lifecycle and the auth endpoints.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The operation needs a bearer token but nobody is logged in.
    #[error("No token")]
    NoToken,

    /// The login/register response did not carry a token under any known key.
    #[error("Authentication response did not include a token")]
    MissingToken,

    /// The session store could not be read or written.
    #[error("Session store error: {0}")]
    Store(String),
}
