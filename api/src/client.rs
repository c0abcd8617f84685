//! HTTP client for the backend REST API.
//!
//! [`Api`] is a cheap-to-clone handle shared by every page. It owns the base
//! URL, the session token mirror, and the durable [`SessionStore`]. Two
//! cross-cutting concerns live here so call sites never re-implement them:
//!
//! - every request carries `Authorization: Token <token>` while a token is
//!   set (DRF token auth convention);
//! - any 401 response tears the session down (store cleared, registered
//!   callback fired) before the error reaches the caller. The callback is
//!   registered by the auth layer at startup; this module knows nothing
//!   about session-manager internals.

use std::cell::RefCell;
use std::rc::Rc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::session::SessionStore;

type UnauthorizedHook = Rc<dyn Fn()>;

/// Handle to the backend API. Clones share one underlying client and token.
#[derive(Clone)]
pub struct Api {
    inner: Rc<Inner>,
}

struct Inner {
    base_url: String,
    http: reqwest::Client,
    session: Box<dyn SessionStore>,
    /// In-memory mirror of the stored token, read on every request.
    token: RefCell<Option<String>>,
    on_unauthorized: RefCell<Option<UnauthorizedHook>>,
}

impl Api {
    /// Client against the build-time configured backend ([`crate::BASE_URL`]).
    pub fn new(session: impl SessionStore + 'static) -> Self {
        Self::with_base_url(crate::BASE_URL, session)
    }

    pub fn with_base_url(base_url: &str, session: impl SessionStore + 'static) -> Self {
        let token = session.get();
        Self {
            inner: Rc::new(Inner {
                base_url: base_url.to_string(),
                http: reqwest::Client::new(),
                session: Box::new(session),
                token: RefCell::new(token),
                on_unauthorized: RefCell::new(None),
            }),
        }
    }

    /// The current session token, if any.
    pub fn token(&self) -> Option<String> {
        self.inner.token.borrow().clone()
    }

    /// Persist a new token and use it for all subsequent requests.
    pub fn set_token(&self, token: &str) {
        self.inner.session.set(token);
        *self.inner.token.borrow_mut() = Some(token.to_string());
    }

    /// Forget the token, durably. Subsequent requests go out unauthenticated.
    pub fn clear_token(&self) {
        self.inner.session.clear();
        *self.inner.token.borrow_mut() = None;
    }

    /// Register the single 401 handler. Replaces any previous one.
    pub fn on_unauthorized(&self, hook: impl Fn() + 'static) {
        *self.inner.on_unauthorized.borrow_mut() = Some(Rc::new(hook));
    }

    /// `Authorization` header value for the current token.
    pub fn auth_header(&self) -> Option<String> {
        self.inner.token.borrow().as_ref().map(|t| format!("Token {t}"))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.send(Method::GET, path, None::<&()>).await?;
        Self::decode(resp).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let resp = self.send(Method::POST, path, Some(body)).await?;
        Self::decode(resp).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let resp = self.send(Method::PUT, path, Some(body)).await?;
        Self::decode(resp).await
    }

    pub async fn patch<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let resp = self.send(Method::PATCH, path, Some(body)).await?;
        Self::decode(resp).await
    }

    /// DELETE returns 204 with no body on success.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(Method::DELETE, path, None::<&()>).await?;
        Ok(())
    }

    async fn send<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response, ApiError> {
        let url = format!("{}{}", self.inner.base_url, path);
        let mut request = self.inner.http.request(method, &url);
        if let Some(header) = self.auth_header() {
            request = request.header("Authorization", header);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if status.as_u16() == 401 {
            self.auth_failed();
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Full session teardown on an authentication failure from the backend.
    fn auth_failed(&self) {
        tracing::warn!("backend rejected session token, clearing session");
        self.inner.session.clear();
        *self.inner.token.borrow_mut() = None;
        // Clone the hook out first: it may want to re-borrow this Api.
        let hook = self.inner.on_unauthorized.borrow().clone();
        if let Some(hook) = hook {
            hook();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryStore;
    use std::cell::Cell;

    #[test]
    fn test_token_read_from_store_on_construction() {
        let store = MemoryStore::new();
        store.set("abc123");
        let api = Api::with_base_url("http://farm.test/api/", store);
        assert_eq!(api.token(), Some("abc123".to_string()));
        assert_eq!(api.auth_header(), Some("Token abc123".to_string()));
    }

    #[test]
    fn test_no_token_means_no_auth_header() {
        let api = Api::with_base_url("http://farm.test/api/", MemoryStore::new());
        assert_eq!(api.token(), None);
        assert_eq!(api.auth_header(), None);
    }

    #[test]
    fn test_set_token_persists_to_store() {
        let store = MemoryStore::new();
        let api = Api::with_base_url("http://farm.test/api/", store.clone());
        api.set_token("abc123");
        assert_eq!(store.get(), Some("abc123".to_string()));
        assert_eq!(api.auth_header(), Some("Token abc123".to_string()));
    }

    #[test]
    fn test_auth_failure_clears_store_and_fires_hook() {
        let store = MemoryStore::new();
        store.set("stale");
        let api = Api::with_base_url("http://farm.test/api/", store.clone());

        let fired = Rc::new(Cell::new(0u32));
        let seen = fired.clone();
        api.on_unauthorized(move || seen.set(seen.get() + 1));

        api.auth_failed();
        assert_eq!(api.token(), None);
        assert_eq!(store.get(), None);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_clear_token_needs_no_hook() {
        let api = Api::with_base_url("http://farm.test/api/", MemoryStore::new());
        api.set_token("abc123");
        api.clear_token();
        assert_eq!(api.token(), None);
    }
}
