//! Login, registration and logout

use serde_json::json;
use serde_json::Value as Json;

use super::envelope::body_row;
use super::request::{Auth, Call};
use crate::auth::Session;
use crate::client::AdminClient;
use crate::error::AuthError;
use crate::error::Error;
use crate::model::Fallback;
use crate::model::Row;

/// Fields for a new admin account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewAdmin {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
}

impl NewAdmin {
    fn to_json(&self) -> Json {
        let mut body = json!({
            "username": self.username,
            "full_name": self.full_name,
            "email": self.email,
            "password": self.password,
            "role": "admin",
        });
        if let Some(phone) = &self.phone {
            body["phone"] = json!(phone);
        }
        body
    }
}

/// Builds a session from a login or register response.
fn session_from(body: Json, fallback_user: Row) -> Result<Session, AuthError> {
    let row = body_row(body);
    let token = Fallback::truthy(["token", "accessToken", "jwt", "data.token"])
        .resolve_string(&row)
        .ok_or(AuthError::MissingToken)?;
    Ok(Session::new(token, user_from(&row, fallback_user)))
}

fn user_from(row: &Row, fallback: Row) -> Row {
    Fallback::truthy(["user", "data.user"])
        .resolve(row)
        .and_then(|user| user.as_row())
        .cloned()
        .unwrap_or(fallback)
}

impl AdminClient {
    /// Logs in and stores the resulting session.
    ///
    /// A session that cannot be persisted is still kept for this process.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, Error> {
        let body = self
            .send(
                Call::post("/api/auth/login", "Login failed")
                    .auth(Auth::Anonymous)
                    .json(json!({ "email": email, "password": password })),
            )
            .await?;

        let session = session_from(body, Row::new().set("email", email))?;
        self.store_session(&session).await;
        log::info!("Logged in as {}", email);
        Ok(session)
    }

    /// Registers a member account and stores the resulting session.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<Session, Error> {
        let body = self
            .send(
                Call::post("/api/auth/register", "Register failed")
                    .auth(Auth::Anonymous)
                    .json(json!({ "name": name, "email": email, "password": password })),
            )
            .await?;

        let session = session_from(body, Row::new().set("name", name).set("email", email))?;
        self.store_session(&session).await;
        log::info!("Registered {}", email);
        Ok(session)
    }

    /// Creates an admin account and returns its user record.
    ///
    /// The current session is sent if there is one and is left untouched.
    pub async fn register_admin(&self, admin: &NewAdmin) -> Result<Row, Error> {
        let body = self
            .send(
                Call::post("/api/auth/register", "Admin register failed")
                    .auth(Auth::Optional)
                    .json(admin.to_json()),
            )
            .await?;

        let fallback = Row::new()
            .set("email", admin.email.as_str())
            .set("full_name", admin.full_name.as_str())
            .set("username", admin.username.as_str())
            .set("role", "admin");
        log::info!("Created admin {}", admin.email);
        Ok(user_from(&body_row(body), fallback))
    }

    /// Forgets the session in memory and in its store.
    pub async fn logout(&self) -> Result<(), Error> {
        self.inner.session.clear().await?;
        log::info!("Logged out");
        Ok(())
    }

    async fn store_session(&self, session: &Session) {
        if let Err(e) = self.inner.session.set(session.clone()).await {
            log::warn!("Could not persist session: {}", e);
        }
    }
}
