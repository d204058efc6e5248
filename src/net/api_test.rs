use super::*;
use futures::executor::block_on;

// =============================================================
// URL construction
// =============================================================

#[test]
fn urls_are_rooted_at_api_base() {
    assert_eq!(url("/campaigns"), "/api/campaigns");
    assert_eq!(url("/campaigns/7/start"), "/api/campaigns/7/start");
    assert_eq!(url("/auth/login"), "/api/auth/login");
}

// =============================================================
// Session purge (the global 401 handler)
// =============================================================

#[test]
fn purge_session_clears_stored_token() {
    token::set("tok-401");
    purge_session();
    assert!(token::get().is_none());
}

#[test]
fn purge_session_is_idempotent() {
    token::clear();
    purge_session();
    purge_session();
    assert!(token::get().is_none());
}

// =============================================================
// Host stubs
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn host_build_reports_http_unavailable() {
    let err = block_on(login("jo@example.com", "pw")).unwrap_err();
    assert_eq!(err, ApiError::Unavailable);

    let err = block_on(fetch_campaigns()).unwrap_err();
    assert_eq!(err, ApiError::Unavailable);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn failed_login_persists_nothing() {
    token::clear();
    let _ = block_on(login("jo@example.com", "pw"));
    assert!(token::get().is_none());
}
