use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NacApiError {
    #[error("HTTP error: {status} {url}: {body}")]
    Http { status: u16, url: String, body: String },

    #[error("Rate limited (429): retry after {retry_after}s")]
    RateLimited { retry_after: u64 },

    #[error("Service unavailable (503)")]
    ServiceUnavailable,

    #[error("Unauthorized (401): bearer token rejected")]
    Unauthorized,

    #[error("Unexpected status: expected {expected}, got {got}")]
    UnexpectedStatus { expected: u16, got: u16 },

    #[error("Auth failed: {reason}")]
    Auth { reason: String },

    #[error("{var} not set in environment")]
    MissingEnv { var: &'static str },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Deserialization: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("Network: {0}")]
    Network(#[from] reqwest::Error),
}

impl NacApiError {
    /// Transient failures worth another attempt. Unauthorized is here
    /// because the client invalidates its cached token on 401 and the next
    /// attempt re-authenticates.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimited { .. } | Self::ServiceUnavailable | Self::Unauthorized | Self::Network(_)
        )
    }

    /// Server-dictated delay, when the error carries one.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::RateLimited { retry_after } => Some(Duration::from_secs(*retry_after)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_set() {
        assert!(NacApiError::RateLimited { retry_after: 5 }.is_retryable());
        assert!(NacApiError::ServiceUnavailable.is_retryable());
        assert!(NacApiError::Unauthorized.is_retryable());
        assert!(!NacApiError::UnexpectedStatus { expected: 202, got: 200 }.is_retryable());
        assert!(!NacApiError::Auth { reason: "bad client id".into() }.is_retryable());
        assert!(
            !NacApiError::Http { status: 404, url: "https://example".into(), body: String::new() }
                .is_retryable()
        );
    }

    #[test]
    fn test_retry_after_only_for_rate_limit() {
        assert_eq!(
            NacApiError::RateLimited { retry_after: 7 }.retry_after(),
            Some(Duration::from_secs(7))
        );
        assert_eq!(NacApiError::ServiceUnavailable.retry_after(), None);
    }
}
