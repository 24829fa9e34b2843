//! Retry utilities for transient provider failures.
//!
//! Provides classification of retryable errors, exponential backoff, and a
//! helper that runs one provider call under a per-attempt timeout.

use crate::error::ProviderError;
use std::future::Future;
use std::time::Duration;

/// Attempts, backoff and per-attempt timeout for one kind of provider call.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    pub retry_attempts: u32,
    /// Base backoff delay in milliseconds
    pub retry_delay_ms: u64,
    /// Per-attempt timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retry_attempts: 2,
            retry_delay_ms: 1000,
            timeout_ms: 60_000,
        }
    }
}

/// Determine whether a provider error is worth retrying.
///
/// Retryable errors: timeouts, connection failures, rate limits (429), server
/// errors (5xx). Non-retryable: auth failures, bad requests, empty or
/// malformed replies.
pub fn is_retryable(error: &ProviderError) -> bool {
    match error {
        ProviderError::Timeout { .. } | ProviderError::Connection { .. } => true,
        ProviderError::Http { status_code, .. } => {
            status_code.is_some_and(|code| code == 429 || (500..=599).contains(&code))
        }
        ProviderError::EmptyResponse { .. } | ProviderError::NotConfigured(_) => false,
    }
}

/// Classify a failed `send()`.
///
/// Connect and timeout failures become [`ProviderError::Connection`]; anything
/// else reqwest reports before a response arrives is permanent.
pub(crate) fn send_error(provider: &str, err: reqwest::Error) -> ProviderError {
    if err.is_connect() || err.is_timeout() {
        ProviderError::Connection {
            provider: provider.to_string(),
            message: err.to_string(),
        }
    } else {
        ProviderError::Http {
            provider: provider.to_string(),
            message: err.to_string(),
            status_code: None,
        }
    }
}

/// Calculate exponential backoff duration for a given attempt.
///
/// Uses `base_delay * 2^attempt` with a cap at 30 seconds.
pub fn backoff_duration(attempt: u32, base_delay_ms: u64) -> Duration {
    let delay = base_delay_ms.saturating_mul(2u64.saturating_pow(attempt));
    Duration::from_millis(delay.min(30_000))
}

/// Run `call` until it succeeds, fails permanently, or runs out of attempts.
///
/// `stage` names the call in logs and timeout errors. The last error is
/// returned when every attempt fails.
pub async fn with_retry<T, F, Fut>(
    policy: &RetryPolicy,
    stage: &str,
    mut call: F,
) -> Result<T, ProviderError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ProviderError>>,
{
    let mut attempt = 0;
    loop {
        if attempt > 0 {
            let delay = backoff_duration(attempt - 1, policy.retry_delay_ms);
            tracing::debug!(
                "Retry {attempt}/{} for {stage} after {delay:?}",
                policy.retry_attempts
            );
            tokio::time::sleep(delay).await;
        }

        let error = match tokio::time::timeout(
            Duration::from_millis(policy.timeout_ms),
            call(),
        )
        .await
        {
            Ok(Ok(value)) => return Ok(value),
            Ok(Err(e)) => e,
            Err(_) => ProviderError::Timeout {
                stage: stage.to_string(),
                timeout_ms: policy.timeout_ms,
            },
        };

        if !is_retryable(&error) || attempt >= policy.retry_attempts {
            tracing::warn!("{stage} failed after {} attempt(s): {error}", attempt + 1);
            return Err(error);
        }
        attempt += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn http_error(status: Option<u16>, message: &str) -> ProviderError {
        ProviderError::Http {
            provider: "test".to_string(),
            message: message.to_string(),
            status_code: status,
        }
    }

    fn fast_policy(retry_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            retry_attempts,
            retry_delay_ms: 1,
            timeout_ms: 1_000,
        }
    }

    #[test]
    fn test_timeout_is_retryable() {
        let err = ProviderError::Timeout {
            stage: "generate".to_string(),
            timeout_ms: 60000,
        };
        assert!(is_retryable(&err));
    }

    #[test]
    fn test_rate_limit_and_server_errors_are_retryable() {
        assert!(is_retryable(&http_error(Some(429), "rate limit exceeded")));
        assert!(is_retryable(&http_error(Some(503), "service unavailable")));
    }

    #[test]
    fn test_auth_error_not_retryable() {
        assert!(!is_retryable(&http_error(Some(401), "unauthorized")));
    }

    #[test]
    fn test_message_with_500_in_body_not_retryable_without_status() {
        assert!(!is_retryable(&http_error(None, "Processed 500 tokens successfully")));
    }

    #[test]
    fn test_connection_error_retryable() {
        let err = ProviderError::Connection {
            provider: "test".to_string(),
            message: "error sending request for url (http://127.0.0.1:1/)".to_string(),
        };
        assert!(is_retryable(&err));
    }

    #[test]
    fn test_statusless_http_error_not_retryable() {
        assert!(!is_retryable(&http_error(None, "error trying to connect")));
    }

    #[tokio::test]
    async fn test_refused_connection_is_classified_retryable() {
        let err = reqwest::Client::new()
            .get("http://127.0.0.1:1/")
            .send()
            .await
            .unwrap_err();
        let classified = send_error("test", err);
        assert!(matches!(classified, ProviderError::Connection { .. }));
        assert!(is_retryable(&classified));
    }

    #[test]
    fn test_empty_response_not_retryable() {
        let err = ProviderError::EmptyResponse {
            provider: "gemini".into(),
            message: "no image".into(),
        };
        assert!(!is_retryable(&err));
    }

    #[test]
    fn test_backoff_exponential() {
        assert_eq!(backoff_duration(0, 1000), Duration::from_millis(1000));
        assert_eq!(backoff_duration(1, 1000), Duration::from_millis(2000));
        assert_eq!(backoff_duration(2, 1000), Duration::from_millis(4000));
    }

    #[test]
    fn test_backoff_capped_at_30s() {
        assert_eq!(backoff_duration(10, 1000), Duration::from_millis(30_000));
    }

    #[tokio::test]
    async fn test_with_retry_recovers_from_transient_failure() {
        let calls = AtomicU32::new(0);
        let result = with_retry(&fast_policy(2), "test", || {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if n == 0 {
                    Err(http_error(Some(503), "busy"))
                } else {
                    Ok(n)
                }
            }
        })
        .await;
        assert_eq!(result.unwrap(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_with_retry_stops_on_permanent_failure() {
        let calls = AtomicU32::new(0);
        let result: Result<(), _> = with_retry(&fast_policy(3), "test", || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(http_error(Some(400), "bad request")) }
        })
        .await;
        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_with_retry_gives_up_after_attempts() {
        let calls = AtomicU32::new(0);
        let result: Result<(), _> = with_retry(&fast_policy(2), "test", || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(http_error(Some(500), "boom")) }
        })
        .await;
        assert!(matches!(result, Err(ProviderError::Http { status_code: Some(500), .. })));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_with_retry_times_out_slow_calls() {
        let policy = RetryPolicy {
            retry_attempts: 0,
            retry_delay_ms: 1,
            timeout_ms: 10,
        };
        let result: Result<(), _> = with_retry(&policy, "generate", || async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        })
        .await;
        assert!(matches!(result, Err(ProviderError::Timeout { timeout_ms: 10, .. })));
    }
}
