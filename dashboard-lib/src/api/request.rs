//! Request plumbing shared by every endpoint

use reqwest::header::ACCEPT;
use reqwest::Method;
use serde_json::Map;
use serde_json::Value as Json;
use url::Url;

use crate::client::AdminClient;
use crate::error::ApiError;
use crate::error::AuthError;
use crate::error::Error;

/// Whether an endpoint needs the bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Auth {
    /// Fail with [`AuthError::NoToken`] when logged out.
    Required,
    /// Send the token if there is one.
    Optional,
    /// Never send a token.
    Anonymous,
}

/// One API call: method, path, query, body and the message used when the
/// server fails without saying why.
#[derive(Debug)]
pub(crate) struct Call {
    method: Method,
    path: String,
    query: Vec<(&'static str, String)>,
    body: Option<Json>,
    auth: Auth,
    failure: &'static str,
}

impl Call {
    fn new(method: Method, path: impl Into<String>, failure: &'static str) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            auth: Auth::Required,
            failure,
        }
    }

    pub(crate) fn get(path: impl Into<String>, failure: &'static str) -> Self {
        Self::new(Method::GET, path, failure)
    }

    pub(crate) fn post(path: impl Into<String>, failure: &'static str) -> Self {
        Self::new(Method::POST, path, failure)
    }

    pub(crate) fn patch(path: impl Into<String>, failure: &'static str) -> Self {
        Self::new(Method::PATCH, path, failure)
    }

    pub(crate) fn delete(path: impl Into<String>, failure: &'static str) -> Self {
        Self::new(Method::DELETE, path, failure)
    }

    pub(crate) fn query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    pub(crate) fn json(mut self, body: Json) -> Self {
        self.body = Some(body);
        self
    }

    pub(crate) fn auth(mut self, auth: Auth) -> Self {
        self.auth = auth;
        self
    }
}

/// Percent-encodes an identifier for use as a path segment.
pub(crate) fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

impl AdminClient {
    /// Sends `call` and returns the JSON body.
    ///
    /// Bodies that are empty or not JSON come back as `{}`. Non-2xx statuses
    /// become [`ApiError::Http`] carrying the body's `message`, or the call's
    /// default message.
    pub(crate) async fn send(&self, call: Call) -> Result<Json, Error> {
        let token = match call.auth {
            Auth::Required => Some(self.inner.session.token().await.ok_or(AuthError::NoToken)?),
            Auth::Optional => self.inner.session.token().await,
            Auth::Anonymous => None,
        };

        let url = self.endpoint(&call.path, &call.query)?;
        log::debug!("{} {}", call.method, url.path());

        let mut request = self
            .inner
            .http_client
            .request(call.method.clone(), url)
            .header(ACCEPT, "application/json");

        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        if let Some(body) = &call.body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| self.transport_error(e))?;
        let status = response.status();
        let text = response.text().await.map_err(|e| self.transport_error(e))?;
        let body = serde_json::from_str::<Json>(&text).unwrap_or_else(|_| Json::Object(Map::new()));

        if !status.is_success() {
            let message = body
                .get("message")
                .and_then(Json::as_str)
                .filter(|message| !message.is_empty())
                .unwrap_or(call.failure);
            log::warn!(
                "{} {} failed with {}: {}",
                call.method,
                call.path,
                status.as_u16(),
                message
            );
            return Err(ApiError::http(status.as_u16(), message).into());
        }

        Ok(body)
    }

    fn endpoint(&self, path: &str, query: &[(&'static str, String)]) -> Result<Url, Error> {
        let raw = format!("{}{}", self.inner.base_url, path);
        let mut url = Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", raw, e)))?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(key, value)| (*key, value.as_str())));
        }
        Ok(url)
    }

    fn transport_error(&self, error: reqwest::Error) -> Error {
        match self.inner.timeout {
            Some(timeout) if error.is_timeout() => ApiError::Timeout(timeout).into(),
            _ => ApiError::Network(error).into(),
        }
    }
}
