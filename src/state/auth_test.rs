use super::*;

// =============================================================
// AuthState defaults and transitions
// =============================================================

#[test]
fn auth_state_default_has_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn auth_state_starts_loading() {
    // The initial render must not redirect before token presence has
    // been checked.
    let state = AuthState::default();
    assert!(state.loading);
}

#[test]
fn authenticated_state_holds_user_and_is_resolved() {
    let state = AuthState::authenticated(User::placeholder("jo@example.com"));
    assert!(state.is_authenticated());
    assert!(!state.loading);
}

#[test]
fn unauthenticated_state_is_resolved_without_user() {
    let state = AuthState::unauthenticated();
    assert!(!state.is_authenticated());
    assert!(!state.loading);
}
