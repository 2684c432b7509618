use thiserror::Error;

/// Failure categories for the summarization call.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("authentication failed; check your OpenAI API key")]
    AuthenticationFailed,

    #[error("rate limit exceeded; please try again later")]
    RateLimited,

    #[error("OpenAI API error (HTTP {status}): {message}")]
    Provider { status: u16, message: String },

    #[error("request to OpenAI failed: {0}")]
    Transport(String),

    #[error("no choices returned from OpenAI")]
    EmptyResponse,
}

/// Map an HTTP outcome onto the error taxonomy. Total over every combination
/// of (status present, status value); `message` is the provider's error text
/// for provider-side failures, or the transport failure text when no status
/// was ever received.
pub fn classify_status(status: Option<u16>, message: String) -> LlmError {
    match status {
        Some(401) => LlmError::AuthenticationFailed,
        Some(429) => LlmError::RateLimited,
        Some(status) => LlmError::Provider { status, message },
        None => LlmError::Transport(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_maps_to_authentication() {
        assert!(matches!(
            classify_status(Some(401), "ignored".into()),
            LlmError::AuthenticationFailed
        ));
    }

    #[test]
    fn too_many_requests_maps_to_rate_limit() {
        assert!(matches!(
            classify_status(Some(429), "ignored".into()),
            LlmError::RateLimited
        ));
    }

    #[test]
    fn other_statuses_keep_the_provider_message() {
        let err = classify_status(Some(503), "upstream overloaded".into());
        match err {
            LlmError::Provider { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "upstream overloaded");
            }
            other => panic!("expected Provider, got {other:?}"),
        }
    }

    #[test]
    fn missing_status_is_a_transport_failure() {
        let err = classify_status(None, "connection reset".into());
        match err {
            LlmError::Transport(message) => assert_eq!(message, "connection reset"),
            other => panic!("expected Transport, got {other:?}"),
        }
    }
}
