//! Bearer-authenticated JSON client for the backend.

use std::sync::Arc;

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    config::ApiConfig,
    error::ApiError,
    http_utils::token_store::TokenStore,
};

/// Error codes of a 401 response that a token refresh can fix.
pub const REFRESHABLE_AUTH_CODES: [&str; 3] = [
    "AUTH_TOKEN_INVALID",
    "AUTH_TOKEN_EXPIRED",
    "AUTH_TOKEN_MISSING",
];

pub const REFRESH_PATH: &str = "/token/refresh/";

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    tokens: Arc<dyn TokenStore>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(config: ApiConfig, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            http: build_http_client(&config),
            config,
            tokens,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn tokens(&self) -> &dyn TokenStore {
        self.tokens.as_ref()
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(String, String)]) -> Result<T, ApiError> {
        self.send(Method::GET, path, query, |request| request).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let body = serde_json::to_value(body)?;
        self.send(Method::POST, path, &[], |request| request.json(&body)).await
    }

    /// Sends a request, refreshing the access token and retrying once when the
    /// backend rejects it with one of [`REFRESHABLE_AUTH_CODES`].
    ///
    /// `attach_body` runs for every attempt, so bodies that are consumed on
    /// send (multipart forms) are rebuilt for the retry.
    pub async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        attach_body: impl Fn(RequestBuilder) -> RequestBuilder,
    ) -> Result<T, ApiError> {
        let mut retried = false;
        loop {
            let request = attach_body(self.request(method.clone(), path, query));
            let response = request.send().await?;
            let status = response.status();
            let text = response.text().await?;

            if status == StatusCode::UNAUTHORIZED && !retried && is_refreshable(&text) {
                retried = true;
                debug!(path, "access token rejected, refreshing");
                if let Err(e) = self.refresh_access_token().await {
                    warn!("Token refresh failed: {e}");
                    self.tokens.clear();
                    return Err(ApiError::Unauthorized);
                }
                continue;
            }

            if !status.is_success() {
                return Err(ApiError::Status { status, body: text });
            }
            // empty bodies decode as JSON null
            let text = if text.trim().is_empty() { "null" } else { text.as_str() };
            return Ok(serde_json::from_str(text)?);
        }
    }

    /// Exchanges the refresh token for a new access token and stores it.
    pub async fn refresh_access_token(&self) -> Result<String, ApiError> {
        let refresh = self.tokens.refresh_token().ok_or(ApiError::MissingRefreshToken)?;
        let response = self
            .request(Method::POST, REFRESH_PATH, &[])
            .json(&serde_json::json!({ "refresh": refresh }))
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Status { status, body: text });
        }
        let value: Value = serde_json::from_str(&text)?;
        let access = value
            .get("access")
            .and_then(Value::as_str)
            .ok_or(ApiError::Unauthorized)?;
        self.tokens.set_access_token(access);
        Ok(access.to_string())
    }

    fn request(&self, method: Method, path: &str, query: &[(String, String)]) -> RequestBuilder {
        let mut request = self.http.request(method, self.config.endpoint(path));
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = self.tokens.access_token() {
            request = request.bearer_auth(token);
        }
        request
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http_client(config: &ApiConfig) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(config.timeout)
        .build()
        .unwrap_or_else(|e| {
            warn!("Falling back to default HTTP client: {e}");
            reqwest::Client::new()
        })
}

// the browser fetch API owns timeouts
#[cfg(target_arch = "wasm32")]
fn build_http_client(_config: &ApiConfig) -> reqwest::Client {
    reqwest::Client::new()
}

/// Whether a 401 body carries an error code that a refresh can fix.
pub fn is_refreshable(body: &str) -> bool {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| value.get("code")?.as_str().map(str::to_string))
        .is_some_and(|code| REFRESHABLE_AUTH_CODES.contains(&code.as_str()))
}
