//! Error types

mod api;
mod auth;
mod field;

pub use api::*;
pub use auth::*;
pub use field::*;

/// Top-level error returned by client operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transport or HTTP-level failure.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Missing or unusable session.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Typed field access failed.
    #[error(transparent)]
    Field(#[from] FieldError),
}

impl Error {
    /// Returns the HTTP status code if the API answered with an error status.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(err) => err.status_code(),
            _ => None,
        }
    }
}
