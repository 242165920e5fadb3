//! Session state and its persistence seam

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;
use tokio::sync::RwLock;

use crate::error::AuthError;
use crate::model::Fallback;
use crate::model::Row;

/// A logged-in admin: the bearer token plus the user object the API returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token sent on authenticated requests.
    pub token: String,
    /// The user record from the login response.
    #[serde(default)]
    pub user: Row,
}

impl Session {
    /// Creates a session.
    pub fn new(token: impl Into<String>, user: Row) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }

    /// Returns the token as an authorization header value.
    pub fn as_bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// The logged-in user's identifier, under whichever key the API used.
    pub fn user_id(&self) -> Option<String> {
        Fallback::truthy(["id", "_id", "uuid", "user_id"]).resolve_string(&self.user)
    }
}

/// Where a session survives between runs.
///
/// The library ships [`MemorySessionStore`]; hosts plug in durable storage.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Reads the persisted session, if any.
    async fn load(&self) -> Result<Option<Session>, AuthError>;

    /// Persists `session`, replacing any previous one.
    async fn save(&self, session: &Session) -> Result<(), AuthError>;

    /// Removes the persisted session.
    async fn clear(&self) -> Result<(), AuthError>;
}

/// A session store that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: RwLock<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `session`.
    pub fn with_session(session: Session) -> Self {
        Self {
            session: RwLock::new(Some(session)),
        }
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self) -> Result<Option<Session>, AuthError> {
        Ok(self.session.read().await.clone())
    }

    async fn save(&self, session: &Session) -> Result<(), AuthError> {
        *self.session.write().await = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), AuthError> {
        *self.session.write().await = None;
        Ok(())
    }
}

/// Shared handle to the current session.
///
/// Cloning is cheap; all clones see the same session. Every change is written
/// through to the backing [`SessionStore`].
#[derive(Clone)]
pub struct SessionHandle {
    current: Arc<RwLock<Option<Session>>>,
    store: Arc<dyn SessionStore>,
}

impl SessionHandle {
    /// A logged-out handle backed by a [`MemorySessionStore`].
    pub fn in_memory() -> Self {
        Self::empty(MemorySessionStore::new())
    }

    /// A logged-out handle backed by `store`, without reading it.
    pub fn empty(store: impl SessionStore + 'static) -> Self {
        Self {
            current: Arc::new(RwLock::new(None)),
            store: Arc::new(store),
        }
    }

    /// Restores the session persisted in `store`.
    ///
    /// A store that cannot be read leaves the handle logged out.
    pub async fn init(store: impl SessionStore + 'static) -> Self {
        let handle = Self::empty(store);
        match handle.store.load().await {
            Ok(Some(session)) => {
                log::debug!("Restored session");
                *handle.current.write().await = Some(session);
            }
            Ok(None) => {}
            Err(e) => log::warn!("Could not restore session: {}", e),
        }
        handle
    }

    /// Replaces the current session and persists it.
    ///
    /// The in-memory session is updated even if persisting fails.
    pub async fn set(&self, session: Session) -> Result<(), AuthError> {
        *self.current.write().await = Some(session.clone());
        self.store.save(&session).await
    }

    /// Logs out: forgets the session in memory and in the store.
    pub async fn clear(&self) -> Result<(), AuthError> {
        *self.current.write().await = None;
        self.store.clear().await
    }

    /// The current session, if logged in.
    pub async fn current(&self) -> Option<Session> {
        self.current.read().await.clone()
    }

    /// The current bearer token, if logged in.
    pub async fn token(&self) -> Option<String> {
        self.current
            .read()
            .await
            .as_ref()
            .map(|session| session.token.clone())
    }

    /// The current user record, if logged in.
    pub async fn user(&self) -> Option<Row> {
        self.current
            .read()
            .await
            .as_ref()
            .map(|session| session.user.clone())
    }

    pub async fn is_authenticated(&self) -> bool {
        self.current.read().await.is_some()
    }
}

impl fmt::Debug for SessionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionHandle").finish_non_exhaustive()
    }
}
