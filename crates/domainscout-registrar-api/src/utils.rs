//! Common utilities for adapter implementations

use std::time::Duration;

use crate::{
    AdapterError,
    AdapterResult,
};

/// Installs the process-wide rustls crypto provider if none is set yet.
///
/// HTTP clients are built with `rustls-no-provider`; call this before
/// `reqwest::Client::builder().build()`.
pub fn ensure_crypto_provider() {
    if rustls::crypto::CryptoProvider::get_default().is_none() {
        let _ = rustls::crypto::ring::default_provider().install_default();
    }
}

/// Retry policy configuration
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of attempts
    pub max_retries: usize,
    /// Initial delay between retries
    pub initial_delay: Duration,
    /// Whether to use exponential backoff
    pub exponential_backoff: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_millis(100),
            exponential_backoff: true,
        }
    }
}

impl RetryPolicy {
    /// Creates a new retry policy with custom settings
    pub fn new(max_retries: usize, initial_delay: Duration, exponential_backoff: bool) -> Self {
        Self {
            max_retries,
            initial_delay,
            exponential_backoff,
        }
    }

    /// Single attempt, no retries
    pub fn none() -> Self {
        Self::new(1, Duration::ZERO, false)
    }

    /// Executes an operation with retry logic
    ///
    /// Only transient errors (network and upstream API failures) are retried.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use domainscout_registrar_api::utils::RetryPolicy;
    ///
    /// let policy = RetryPolicy::default();
    /// let result = policy.retry(|| async {
    ///     // Your async operation here
    ///     Ok(())
    /// }).await?;
    /// ```
    pub async fn retry<F, Fut, T>(&self, operation: F) -> AdapterResult<T>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = AdapterResult<T>>,
    {
        let mut delay = self.initial_delay;
        let mut last_error = None;

        for attempt in 0..self.max_retries.max(1) {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(e) if e.is_transient() && attempt + 1 < self.max_retries => {
                    last_error = Some(e);
                    tokio::time::sleep(delay).await;
                    if self.exponential_backoff {
                        delay *= 2;
                    }
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error
            .unwrap_or_else(|| AdapterError::NetworkError("Max retries exceeded".to_string())))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[tokio::test]
    async fn test_retry_success() {
        let policy = RetryPolicy::default();
        let result = policy.retry(|| async { Ok::<_, AdapterError>(42) }).await;
        assert_eq!(result.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_retry_eventual_success() {
        let policy = RetryPolicy::new(3, Duration::from_millis(10), false);
        let attempts = Cell::new(0);

        let result = policy
            .retry(|| async {
                let count = attempts.get() + 1;
                attempts.set(count);
                if count < 2 {
                    Err(AdapterError::NetworkError("Temporary failure".to_string()))
                } else {
                    Ok(42)
                }
            })
            .await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(attempts.get(), 2);
    }

    #[tokio::test]
    async fn test_retry_gives_up_on_permanent_errors() {
        let policy = RetryPolicy::new(3, Duration::from_millis(10), false);
        let attempts = Cell::new(0);

        let result: AdapterResult<()> = policy
            .retry(|| async {
                attempts.set(attempts.get() + 1);
                Err(AdapterError::InvalidResponse("garbage".to_string()))
            })
            .await;

        assert!(matches!(result, Err(AdapterError::InvalidResponse(_))));
        assert_eq!(attempts.get(), 1);
    }

    #[tokio::test]
    async fn test_retry_exhaustion_returns_last_error() {
        let policy = RetryPolicy::new(2, Duration::from_millis(1), true);
        let attempts = Cell::new(0);

        let result: AdapterResult<()> = policy
            .retry(|| async {
                attempts.set(attempts.get() + 1);
                Err(AdapterError::ApiError("503".to_string()))
            })
            .await;

        assert!(matches!(result, Err(AdapterError::ApiError(_))));
        assert_eq!(attempts.get(), 2);
    }
}
