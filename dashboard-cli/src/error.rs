//! CLI error type

use dashboard_lib::error::{AuthError, Error};
use dashboard_lib::model::UnknownResource;

use crate::settings::SettingsError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Api(#[from] Error),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Resource(#[from] UnknownResource),

    #[error("unknown setting '{0}' (expected api.base_url or table.page_size)")]
    UnknownSetting(String),

    #[error("invalid value for {key}: {message}")]
    InvalidSetting { key: &'static str, message: String },

    #[error("no data directory available on this platform")]
    NoDataDir,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The arguments parsed but do not make sense together.
    #[error("{0}")]
    Usage(String),
}

impl CliError {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    /// A follow-up suggestion printed under the error.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Api(Error::Auth(AuthError::NoToken)) => Some("run `dashboard login` first"),
            Self::Api(Error::Api(api)) if api.is_unauthorized() => {
                Some("the session was rejected; run `dashboard login` again")
            }
            Self::Api(Error::Api(api)) if api.is_retryable() => Some("this may be temporary; try again"),
            _ => None,
        }
    }
}

impl From<AuthError> for CliError {
    fn from(e: AuthError) -> Self {
        Self::Api(e.into())
    }
}

#[cfg(test)]
mod tests {
    use dashboard_lib::error::ApiError;

    use super::*;

    #[test]
    fn test_hints() {
        assert!(CliError::from(AuthError::NoToken).hint().unwrap().contains("login"));
        let expired = CliError::Api(ApiError::http(401, "jwt expired").into());
        assert!(expired.hint().unwrap().contains("login"));
        let down = CliError::Api(ApiError::http(503, "Failed to fetch users").into());
        assert_eq!(down.hint(), Some("this may be temporary; try again"));
        assert_eq!(CliError::usage("nope").hint(), None);
    }
}
