use super::*;

// =============================================================
// Status mapping
// =============================================================

#[test]
fn status_401_maps_to_unauthorized() {
    let err = ApiError::from_status(401, Some("expired".to_owned()));
    assert_eq!(err, ApiError::Unauthorized);
}

#[test]
fn status_401_maps_to_unauthorized_without_message() {
    assert_eq!(ApiError::from_status(401, None), ApiError::Unauthorized);
}

#[test]
fn other_statuses_keep_code_and_message() {
    let err = ApiError::from_status(422, Some("name is required".to_owned()));
    assert_eq!(
        err,
        ApiError::Status {
            code: 422,
            message: Some("name is required".to_owned()),
        }
    );
}

// =============================================================
// User-facing text
// =============================================================

#[test]
fn backend_message_is_surfaced_verbatim() {
    let err = ApiError::from_status(400, Some("campaign has no candidates".to_owned()));
    assert_eq!(err.user_message(), "campaign has no candidates");
}

#[test]
fn missing_message_falls_back_to_status_text() {
    let err = ApiError::from_status(500, None);
    assert_eq!(err.user_message(), "request failed with status 500");
}

#[test]
fn network_error_includes_cause() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.user_message(), "network error: connection refused");
}
