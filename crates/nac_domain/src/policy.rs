use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Transport knobs for the API client: per-request timeout plus the
/// retry/backoff window for transient failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpPolicy {
    #[serde(with = "duration_secs")]
    pub request_timeout: Duration,
    pub max_retries: u32,
    #[serde(with = "duration_secs")]
    pub backoff_base: Duration,
    #[serde(with = "duration_secs")]
    pub backoff_max: Duration,
}

impl Default for HttpPolicy {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            max_retries: 4,
            backoff_base: Duration::from_secs(4),
            backoff_max: Duration::from_secs(10),
        }
    }
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(d.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(d)?;
        Ok(Duration::from_secs_f64(secs))
    }
}
