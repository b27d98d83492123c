use crate::error::NacApiError;
use chrono::{DateTime, Utc};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::{debug, info};
use url::Url;

pub const ENV_BASE_URL: &str = "NINTEX_BASE_URL";
pub const ENV_CLIENT_ID: &str = "NINTEX_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "NINTEX_CLIENT_SECRET";
pub const ENV_GRANT_TYPE: &str = "NINTEX_GRANT_TYPE";

const TOKEN_PATH: &str = "/authentication/v1/token";

/// A token within this many seconds of expiry is treated as expired, so a
/// request never departs with a token about to lapse mid-flight.
const EXPIRY_LEEWAY_SECS: i64 = 60;

/// Client-credentials grant material for a NAC tenant.
#[derive(Clone)]
pub struct Credentials {
    pub base_url: Url,
    pub client_id: String,
    pub client_secret: SecretString,
    pub grant_type: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("base_url", &self.base_url.as_str())
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("grant_type", &self.grant_type)
            .finish()
    }
}

impl Credentials {
    /// Read the tenant configuration from `NINTEX_BASE_URL`,
    /// `NINTEX_CLIENT_ID`, `NINTEX_CLIENT_SECRET` and `NINTEX_GRANT_TYPE`.
    pub fn from_env() -> Result<Self, NacApiError> {
        let base_url = read_env(ENV_BASE_URL)?;
        let client_id = read_env(ENV_CLIENT_ID)?;
        let client_secret = read_env(ENV_CLIENT_SECRET)?;
        let grant_type = read_env(ENV_GRANT_TYPE)?;

        Ok(Self {
            base_url: Url::parse(&base_url)?,
            client_id,
            client_secret: SecretString::new(client_secret.into()),
            grant_type,
        })
    }
}

fn read_env(var: &'static str) -> Result<String, NacApiError> {
    std::env::var(var).map_err(|_| NacApiError::MissingEnv { var })
}

/// A cached bearer token with its expiry instant.
#[derive(Clone)]
pub struct BearerToken {
    access_token: SecretString,
    expires_at: Option<DateTime<Utc>>,
}

impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerToken")
            .field("access_token", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

impl BearerToken {
    pub fn new(access_token: SecretString, expires_at: Option<DateTime<Utc>>) -> Self {
        Self { access_token, expires_at }
    }

    /// Expired, or within the leeway window of expiring. A token without
    /// expiry information never self-expires.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => Utc::now() + chrono::Duration::seconds(EXPIRY_LEEWAY_SECS) >= expires_at,
            None => false,
        }
    }

    /// Value for the `Authorization` header.
    pub fn authorization_value(&self) -> String {
        format!("Bearer {}", self.access_token.expose_secret())
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    // RFC 6749 field; the tenant also reports an absolute expires_at.
    #[serde(default)]
    expires_in: Option<u64>,
    #[serde(default)]
    expires_at: Option<DateTime<Utc>>,
}

/// Acquire a bearer token from `{base}/authentication/v1/token` with the
/// client-credentials grant.
pub async fn fetch_token(client: &Client, credentials: &Credentials) -> Result<BearerToken, NacApiError> {
    let url = credentials.base_url.join(TOKEN_PATH)?;

    let response = client
        .post(url)
        .header(reqwest::header::ACCEPT, "application/json")
        .form(&[
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.expose_secret()),
            ("grant_type", credentials.grant_type.as_str()),
        ])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(NacApiError::Auth {
            reason: format!("token endpoint returned {}: {}", status.as_u16(), body),
        });
    }

    let token: TokenResponse = response.json().await.map_err(|e| NacApiError::Auth {
        reason: format!("malformed token response: {e}"),
    })?;

    let expires_at = match token.expires_in {
        Some(secs) => Some(Utc::now() + chrono::Duration::seconds(secs as i64)),
        None => token.expires_at,
    };

    info!(endpoint = TOKEN_PATH, "bearer token acquired");
    debug!(?expires_at, "token expiry");

    Ok(BearerToken::new(SecretString::new(token.access_token.into()), expires_at))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(expires_at: Option<DateTime<Utc>>) -> BearerToken {
        BearerToken::new(SecretString::new("tok".to_string().into()), expires_at)
    }

    #[test]
    fn test_fresh_token_not_expired() {
        let t = token(Some(Utc::now() + chrono::Duration::hours(1)));
        assert!(!t.is_expired());
    }

    #[test]
    fn test_token_inside_leeway_is_expired() {
        let t = token(Some(Utc::now() + chrono::Duration::seconds(30)));
        assert!(t.is_expired());
    }

    #[test]
    fn test_token_without_expiry_never_expires() {
        assert!(!token(None).is_expired());
    }

    #[test]
    fn test_authorization_value() {
        assert_eq!(token(None).authorization_value(), "Bearer tok");
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let credentials = Credentials {
            base_url: Url::parse("https://us.nintex.io").unwrap(),
            client_id: "id".into(),
            client_secret: SecretString::new("hunter2".to_string().into()),
            grant_type: "client_credentials".into(),
        };
        let rendered = format!("{credentials:?}");
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("hunter2"));

        let rendered = format!("{:?}", token(None));
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("tok"));
    }
}
