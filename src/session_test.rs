use super::*;

// =============================================================
// Session restore on page load
// =============================================================

#[test]
fn stored_token_restores_an_authenticated_session() {
    let state = restored_state(true);
    assert!(state.is_authenticated());
    assert!(!state.loading);
}

#[test]
fn missing_token_restores_an_unauthenticated_session() {
    let state = restored_state(false);
    assert!(!state.is_authenticated());
    assert!(!state.loading);
}

// =============================================================
// Auth response handling
// =============================================================

#[test]
fn response_with_token_and_user_authenticates_as_that_user() {
    let resp = AuthResponse {
        token: Some("tok-1".to_owned()),
        user: Some(User {
            id: 5,
            email: "jo@example.com".to_owned(),
            name: Some("Jo".to_owned()),
        }),
        message: None,
    };
    let (tok, user) = auth_outcome(&resp, "fallback@example.com").unwrap();
    assert_eq!(tok, "tok-1");
    assert_eq!(user.id, 5);
    assert_eq!(user.display_name(), "Jo");
}

#[test]
fn response_without_user_falls_back_to_submitted_email() {
    let resp = AuthResponse {
        token: Some("tok-2".to_owned()),
        user: None,
        message: None,
    };
    let (_, user) = auth_outcome(&resp, "jo@example.com").unwrap();
    assert_eq!(user.email, "jo@example.com");
    assert_eq!(user.id, 0);
}

#[test]
fn response_without_token_is_a_failed_attempt() {
    let resp = AuthResponse {
        token: None,
        user: Some(User::placeholder("jo@example.com")),
        message: Some("account disabled".to_owned()),
    };
    assert!(auth_outcome(&resp, "jo@example.com").is_none());
}
