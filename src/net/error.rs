#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure modes for backend requests.
///
/// `Unauthorized` is handled globally by the request layer (token purge
/// plus redirect); everything else surfaces to the calling page as a
/// single notification. Pages never retry.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// 401 from any endpoint. The session has already been purged by
    /// the time this reaches a caller.
    #[error("authentication required")]
    Unauthorized,

    /// Non-success response from the backend. Carries the backend's
    /// `message` field verbatim when one was provided.
    #[error("request failed with status {code}")]
    Status { code: u16, message: Option<String> },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The response body could not be decoded.
    #[error("unexpected response format: {0}")]
    Decode(String),

    /// HTTP is only available in the browser build.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Map a response status and optional backend message to an error.
    pub fn from_status(code: u16, message: Option<String>) -> Self {
        if code == 401 {
            Self::Unauthorized
        } else {
            Self::Status { code, message }
        }
    }

    /// Text shown to the user: the backend-provided message when one
    /// exists, otherwise the generic error text.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status {
                message: Some(msg), ..
            } => msg.clone(),
            other => other.to_string(),
        }
    }
}
