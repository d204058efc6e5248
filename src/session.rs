//! Session lifecycle: init on mount, login, register, logout.
//!
//! Operates on the `AuthState` and `ToastState` signals provided by the
//! root `App`. Every transition pushes exactly one user-visible toast.
//!
//! Registration contract: the register response is treated as already
//! authenticating. A token in that response is persisted directly;
//! there is no chained login call.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{AuthResponse, User};
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::token;

/// Resolve the initial session state from token presence.
///
/// The backend exposes no identity endpoint, so a stored token restores
/// the session with a placeholder identity rather than a re-fetched
/// one; the next authenticated request is what actually validates it.
pub fn init(auth: RwSignal<AuthState>) {
    auth.set(restored_state(token::is_present()));
}

/// Session state after checking the token store on page load.
pub(crate) fn restored_state(token_present: bool) -> AuthState {
    if token_present {
        AuthState::authenticated(User::placeholder(""))
    } else {
        AuthState::unauthenticated()
    }
}

/// Token and user to install for a successful auth response, or `None`
/// when the response carries no token (treated as a failed attempt;
/// nothing is persisted).
pub(crate) fn auth_outcome(resp: &AuthResponse, fallback_email: &str) -> Option<(String, User)> {
    let token = resp.token.clone()?;
    let user = resp
        .user
        .clone()
        .unwrap_or_else(|| User::placeholder(fallback_email));
    Some((token, user))
}

/// Authenticate with email and password. Returns whether the session is
/// now authenticated.
pub async fn login(
    auth: RwSignal<AuthState>,
    toasts: RwSignal<ToastState>,
    email: &str,
    password: &str,
) -> bool {
    auth.update(|a| a.loading = true);
    let result = api::login(email, password).await;
    finish_auth(
        auth,
        toasts,
        result,
        email,
        ("Login successful", "Welcome back!"),
        "Login failed",
    )
}

/// Create an account and authenticate from the register response.
pub async fn register(
    auth: RwSignal<AuthState>,
    toasts: RwSignal<ToastState>,
    email: &str,
    password: &str,
    name: Option<&str>,
) -> bool {
    auth.update(|a| a.loading = true);
    let result = api::register(email, password, name).await;
    finish_auth(
        auth,
        toasts,
        result,
        email,
        ("Registration successful", "Welcome to AI Interview Screener!"),
        "Registration failed",
    )
}

/// End the session. The backend call is best-effort; local token and
/// user state are cleared regardless of its outcome.
pub async fn logout(auth: RwSignal<AuthState>, toasts: RwSignal<ToastState>) {
    let _ = api::logout().await;
    token::clear();
    auth.set(AuthState::unauthenticated());
    toasts.update(|t| t.success("Logged out", "You have been logged out."));
}

fn finish_auth(
    auth: RwSignal<AuthState>,
    toasts: RwSignal<ToastState>,
    result: Result<AuthResponse, ApiError>,
    email: &str,
    ok_toast: (&str, &str),
    err_title: &str,
) -> bool {
    match result {
        Ok(resp) => match auth_outcome(&resp, email) {
            Some((tok, user)) => {
                token::set(&tok);
                auth.set(AuthState::authenticated(user));
                toasts.update(|t| t.success(ok_toast.0, ok_toast.1));
                true
            }
            None => {
                auth.set(AuthState::unauthenticated());
                let detail = resp
                    .message
                    .unwrap_or_else(|| "The response carried no session token.".to_owned());
                toasts.update(|t| t.error(err_title, detail));
                false
            }
        },
        Err(err) => {
            auth.set(AuthState::unauthenticated());
            toasts.update(|t| t.error(err_title, err.user_message()));
            false
        }
    }
}
