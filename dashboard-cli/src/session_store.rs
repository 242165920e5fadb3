//! Session persistence in the settings database.

use async_trait::async_trait;
use dashboard_lib::auth::{Session, SessionStore};
use dashboard_lib::error::AuthError;

use crate::settings::SettingsProvider;

const SESSION_KEY: &str = "session";

/// Keeps the logged-in session under the `session` settings key.
///
/// The session is stored as JSON text; its user row is free-form and bincode
/// cannot represent it directly.
pub struct SettingsSessionStore {
    settings: SettingsProvider,
}

impl SettingsSessionStore {
    pub fn new(settings: SettingsProvider) -> Self {
        Self { settings }
    }
}

fn store_error(e: impl std::fmt::Display) -> AuthError {
    AuthError::Store(e.to_string())
}

#[async_trait]
impl SessionStore for SettingsSessionStore {
    async fn load(&self) -> Result<Option<Session>, AuthError> {
        let Some(text) = self
            .settings
            .get::<String>(SESSION_KEY)
            .await
            .map_err(store_error)?
        else {
            return Ok(None);
        };
        serde_json::from_str(&text).map(Some).map_err(store_error)
    }

    async fn save(&self, session: &Session) -> Result<(), AuthError> {
        let text = serde_json::to_string(session).map_err(store_error)?;
        self.settings
            .set(SESSION_KEY, &text)
            .await
            .map_err(store_error)
    }

    async fn clear(&self) -> Result<(), AuthError> {
        self.settings.delete(SESSION_KEY).await.map_err(store_error)
    }
}
