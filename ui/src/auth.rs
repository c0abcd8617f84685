//! Authentication context and hooks.
//!
//! There is exactly one session owner in the app: [`AuthProvider`] constructs
//! the [`Api`] handle, mirrors its token into an [`AuthState`] signal, and is
//! the only code that writes the current user. Everything else reads through
//! [`use_auth`].
//!
//! Lifecycle: on startup, a stored token moves the state to loading and
//! triggers one `users/me/` fetch; no token means anonymous with no network
//! call. [`AuthSession::login`] re-runs the same resolution path.
//! A 401 from *any* request tears the session down via the callback
//! registered with the client here.

use api::{Api, ApiError, User};
use dioxus::prelude::*;

/// Observable session state.
///
/// `loading` distinguishes "definitely logged out" from "don't know yet":
/// guards must not redirect while it is set.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
}

impl AuthState {
    pub fn anonymous() -> Self {
        Self {
            user: None,
            token: None,
            loading: false,
        }
    }

    fn resolving(token: String) -> Self {
        Self {
            user: None,
            token: Some(token),
            loading: true,
        }
    }

    fn authenticated(token: String, user: User) -> Self {
        Self {
            user: Some(user),
            token: Some(token),
            loading: false,
        }
    }
}

/// Handle for login/logout and session reads, shared through context.
#[derive(Clone)]
pub struct AuthSession {
    api: Api,
    state: Signal<AuthState>,
}

impl AuthSession {
    pub fn state(&self) -> AuthState {
        (self.state)()
    }

    pub fn api(&self) -> Api {
        self.api.clone()
    }

    /// Persist a freshly issued token and resolve the user behind it.
    pub async fn login(&self, token: &str) {
        self.api.set_token(token);
        self.resolve().await;
    }

    /// Clear everything, synchronously. No network call involved.
    pub fn logout(&self) {
        let mut state = self.state;
        self.api.clear_token();
        state.set(AuthState::anonymous());
    }

    /// Resolve the current token to a user. Exactly one fetch per token
    /// change; a result whose token is no longer current is discarded, so
    /// the latest login always wins.
    pub async fn resolve(&self) {
        let mut state = self.state;
        let Some(token) = self.api.token() else {
            state.set(AuthState::anonymous());
            return;
        };
        state.set(AuthState::resolving(token.clone()));

        let result = self.api.get::<User>("users/me/").await;
        match settle(&token, self.api.token().as_deref(), result) {
            Settled::Authenticated(user) => state.set(AuthState::authenticated(token, user)),
            Settled::TornDown => {
                // An unresolvable token is a dead session, not a half-open one.
                self.api.clear_token();
                state.set(AuthState::anonymous());
            }
            Settled::Stale => {}
        }
    }
}

enum Settled {
    Authenticated(User),
    TornDown,
    Stale,
}

/// Decide what a finished user-fetch means given the token it started with
/// and the token that is current now.
fn settle(started: &str, current: Option<&str>, result: Result<User, ApiError>) -> Settled {
    if current != Some(started) {
        // The token changed (new login, logout, or 401 teardown) while this
        // fetch was in flight; its result no longer speaks for the session.
        return Settled::Stale;
    }
    match result {
        Ok(user) => Settled::Authenticated(user),
        Err(err) => {
            tracing::warn!("failed to resolve current user: {err}");
            Settled::TornDown
        }
    }
}

/// Get the current session. Panics outside an [`AuthProvider`].
pub fn use_auth() -> AuthSession {
    use_context::<AuthSession>()
}

/// Get the shared API handle.
pub fn use_api() -> Api {
    use_context::<Api>()
}

/// Provider component owning the session. Wrap the router with it.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let api = use_context_provider(default_api);

    let state = use_signal(|| {
        let token = api.token();
        AuthState {
            user: None,
            loading: token.is_some(),
            token,
        }
    });
    let session = use_context_provider(|| AuthSession {
        api: api.clone(),
        state,
    });

    // Server-side invalidation: any 401 anywhere flips the session to
    // anonymous. Registered here so the transport layer stays ignorant of
    // session semantics.
    use_hook(|| {
        api.on_unauthorized(move || {
            tracing::warn!("session invalidated by server");
            let mut state = state;
            state.set(AuthState::anonymous());
        });
    });

    // Resolve the persisted token once at startup.
    use_future(move || {
        let session = session.clone();
        async move {
            session.resolve().await;
        }
    });

    rsx! {
        {children}
    }
}

fn default_api() -> Api {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Api::new(api::LocalStorageStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        Api::new(api::MemoryStore::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::Role;

    fn user() -> User {
        User {
            id: 1,
            email: "a@b.com".to_string(),
            full_name: "Asha B".to_string(),
            role: Role::FarmManager,
            phone: String::new(),
            avatar: None,
        }
    }

    #[test]
    fn test_settle_applies_result_for_current_token() {
        match settle("t1", Some("t1"), Ok(user())) {
            Settled::Authenticated(u) => assert_eq!(u.id, 1),
            _ => panic!("expected authenticated"),
        }
    }

    #[test]
    fn test_settle_discards_superseded_fetch() {
        // login(T1) then login(T2) before T1 resolves: T1's result is stale.
        assert!(matches!(settle("t1", Some("t2"), Ok(user())), Settled::Stale));
        // Even a failure of the stale fetch must not tear down T2's session.
        assert!(matches!(
            settle("t1", Some("t2"), Err(ApiError::Network("offline".into()))),
            Settled::Stale
        ));
    }

    #[test]
    fn test_settle_discards_after_teardown() {
        // A 401 mid-flight already cleared the token; don't resurrect state.
        assert!(matches!(settle("t1", None, Ok(user())), Settled::Stale));
    }

    #[test]
    fn test_settle_tears_down_on_fetch_failure() {
        assert!(matches!(
            settle("t1", Some("t1"), Err(ApiError::Network("offline".into()))),
            Settled::TornDown
        ));
    }
}
