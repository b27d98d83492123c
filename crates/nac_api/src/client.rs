use crate::auth::{self, BearerToken, Credentials};
use crate::error::NacApiError;
use crate::retry::RetryPolicy;
use nac_domain::HttpPolicy;
use reqwest::{Method, Response, StatusCode, header};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use url::Url;

const DEFAULT_RATE_LIMIT_DELAY_SECS: u64 = 5;

/// Async client for a Nintex Automation Cloud tenant.
///
/// Acquires a bearer token lazily, caches it until expiry, and retries
/// transient failures per the configured [`HttpPolicy`].
pub struct NacClient {
    http: reqwest::Client,
    credentials: Credentials,
    token: Arc<RwLock<Option<BearerToken>>>,
    retry: RetryPolicy,
}

impl NacClient {
    pub fn new(credentials: Credentials) -> Self {
        Self::with_policy(credentials, HttpPolicy::default())
    }

    pub fn with_policy(credentials: Credentials, policy: HttpPolicy) -> Self {
        let http = reqwest::ClientBuilder::new()
            .user_agent(concat!("nacwrap-rs/", env!("CARGO_PKG_VERSION")))
            .timeout(policy.request_timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            credentials,
            token: Arc::new(RwLock::new(None)),
            retry: RetryPolicy::from(&policy),
        }
    }

    /// Build a client from the `NINTEX_*` environment variables.
    pub fn from_env() -> Result<Self, NacApiError> {
        Ok(Self::new(Credentials::from_env()?))
    }

    pub fn base_url(&self) -> &Url {
        &self.credentials.base_url
    }

    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, NacApiError> {
        Ok(self.credentials.base_url.join(path)?)
    }

    /// Cached token, re-acquired when absent or expired.
    async fn bearer(&self) -> Result<BearerToken, NacApiError> {
        {
            let token = self.token.read().await;
            if let Some(token) = token.as_ref() {
                if !token.is_expired() {
                    return Ok(token.clone());
                }
            }
        }

        let fresh = auth::fetch_token(&self.http, &self.credentials).await?;
        *self.token.write().await = Some(fresh.clone());
        Ok(fresh)
    }

    async fn invalidate_token(&self) {
        *self.token.write().await = None;
    }

    /// One authenticated attempt. A 401 drops the cached token before
    /// surfacing, so the retry path re-authenticates.
    async fn try_request(
        &self,
        method: &Method,
        url: &Url,
        params: Option<&[(String, String)]>,
        body: Option<&serde_json::Value>,
    ) -> Result<Response, NacApiError> {
        let token = self.bearer().await?;

        let mut builder = self
            .http
            .request(method.clone(), url.clone())
            .header(header::AUTHORIZATION, token.authorization_value())
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(params) = params {
            builder = builder.query(params);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        debug!(%method, endpoint = url.path(), status = status.as_u16(), "api call");

        if status.is_success() {
            return Ok(response);
        }

        match status {
            StatusCode::UNAUTHORIZED => {
                self.invalidate_token().await;
                Err(NacApiError::Unauthorized)
            }
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after = response
                    .headers()
                    .get(header::RETRY_AFTER)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(DEFAULT_RATE_LIMIT_DELAY_SECS);
                Err(NacApiError::RateLimited { retry_after })
            }
            StatusCode::SERVICE_UNAVAILABLE => Err(NacApiError::ServiceUnavailable),
            _ => Err(NacApiError::Http {
                status: status.as_u16(),
                url: url.to_string(),
                body: response.text().await.unwrap_or_default(),
            }),
        }
    }

    /// Authenticated request with retry. Success means any 2xx; operations
    /// with a stricter contract check the status on the returned response.
    pub(crate) async fn request(
        &self,
        method: Method,
        url: Url,
        params: Option<&[(String, String)]>,
        body: Option<&serde_json::Value>,
    ) -> Result<Response, NacApiError> {
        let method = &method;
        let url = &url;
        self.retry
            .execute(move || async move { self.try_request(method, url, params, body).await })
            .await
    }

    pub(crate) async fn get_json(
        &self,
        url: Url,
        params: Option<&[(String, String)]>,
    ) -> Result<serde_json::Value, NacApiError> {
        let response = self.request(Method::GET, url, params, None).await?;
        Ok(response.json().await?)
    }
}
