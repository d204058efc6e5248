use super::*;

#[test]
fn starts_empty() {
    assert!(ToastState::default().toasts.is_empty());
}

#[test]
fn push_records_title_detail_and_kind() {
    let mut state = ToastState::default();
    state.error("Login failed", "Invalid credentials");
    assert_eq!(state.toasts.len(), 1);
    let toast = &state.toasts[0];
    assert_eq!(toast.title, "Login failed");
    assert_eq!(toast.detail, "Invalid credentials");
    assert_eq!(toast.kind, ToastKind::Error);
}

#[test]
fn each_toast_gets_a_distinct_id() {
    let mut state = ToastState::default();
    state.success("a", "");
    state.success("b", "");
    assert_ne!(state.toasts[0].id, state.toasts[1].id);
}

#[test]
fn dismiss_removes_only_the_matching_toast() {
    let mut state = ToastState::default();
    state.success("keep", "");
    state.error("drop", "");
    let drop_id = state.toasts[1].id;
    state.dismiss(drop_id);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].title, "keep");
}

#[test]
fn dismissing_unknown_id_is_a_no_op() {
    let mut state = ToastState::default();
    state.success("keep", "");
    state.dismiss(Uuid::new_v4());
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn queue_drops_oldest_beyond_capacity() {
    let mut state = ToastState::default();
    for i in 0..6 {
        state.info(&format!("t{i}"), "");
    }
    assert_eq!(state.toasts.len(), 4);
    assert_eq!(state.toasts.first().unwrap().title, "t2");
    assert_eq!(state.toasts.last().unwrap().title, "t5");
}

#[test]
fn kinds_map_to_distinct_css_classes() {
    assert_ne!(
        ToastKind::Success.css_class(),
        ToastKind::Error.css_class()
    );
    assert_ne!(ToastKind::Info.css_class(), ToastKind::Error.css_class());
}
