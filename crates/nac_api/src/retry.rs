use crate::error::NacApiError;
use nac_domain::HttpPolicy;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::warn;

/// Capped exponential backoff for transient failures. Defaults give five
/// attempts with delays inside a 4-10s window.
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_retries: 4, base_delay: Duration::from_secs(4), max_delay: Duration::from_secs(10) }
    }
}

impl From<&HttpPolicy> for RetryPolicy {
    fn from(policy: &HttpPolicy) -> Self {
        Self {
            max_retries: policy.max_retries,
            base_delay: policy.backoff_base,
            max_delay: policy.backoff_max,
        }
    }
}

impl RetryPolicy {
    pub async fn execute<F, Fut, T>(&self, mut op: F) -> Result<T, NacApiError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, NacApiError>>,
    {
        let mut attempt = 0;
        loop {
            match op().await {
                Ok(val) => return Ok(val),
                Err(e) if e.is_retryable() && attempt < self.max_retries => {
                    // A server-dictated Retry-After wins over the computed backoff.
                    let delay = match e.retry_after() {
                        Some(after) => after,
                        None => {
                            let delay_secs = self.base_delay.as_secs_f64() * 2f64.powi(attempt as i32);
                            Duration::from_secs_f64(delay_secs.min(self.max_delay.as_secs_f64()) + rand_jitter())
                        }
                    };
                    warn!(attempt, ?delay, error = %e, "Retrying after error");
                    sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

fn rand_jitter() -> f64 {
    // Simple deterministic jitter based on current time nanoseconds
    let ns = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .subsec_nanos();
    (ns % 1000) as f64 / 1000.0
}
