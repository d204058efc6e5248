#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Session state tracking the current user and loading status.
///
/// Provided as an `RwSignal` context from the root `App`; the
/// transitions live in [`crate::session`]. `loading` starts `true` and
/// resolves once token presence has been checked on mount.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    /// Resolved, signed-in state.
    pub fn authenticated(user: User) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }

    /// Resolved, signed-out state.
    pub fn unauthenticated() -> Self {
        Self {
            user: None,
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
