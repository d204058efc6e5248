use super::*;

// Host builds back the store with a thread-local slot; every test
// starts from an explicit state so ordering never matters.

#[test]
fn set_then_get_round_trips() {
    set("tok-123");
    assert_eq!(get().as_deref(), Some("tok-123"));
    assert!(is_present());
}

#[test]
fn set_overwrites_previous_token() {
    set("first");
    set("second");
    assert_eq!(get().as_deref(), Some("second"));
}

#[test]
fn clear_removes_token() {
    set("tok-123");
    clear();
    assert!(get().is_none());
    assert!(!is_present());
}

#[test]
fn clear_on_empty_store_is_a_no_op() {
    clear();
    clear();
    assert!(get().is_none());
}

#[test]
fn auth_header_is_bearer_formatted() {
    assert_eq!(auth_header_value("abc"), "Bearer abc");
}
