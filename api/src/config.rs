use std::{env, fmt::Display, str::FromStr, time::Duration};

use tracing::{info, warn};

pub const DEFAULT_BASE_URL: &str = "http://89.106.206.119:8000/api";
pub const DEFAULT_PER_PAGE: u64 = 10;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub per_page: u64,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            per_page: DEFAULT_PER_PAGE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn from_env() -> Self {
        let base_url: String = try_load("ELMOSYAR_API_BASE_URL", DEFAULT_BASE_URL.to_string());
        Self {
            per_page: try_load("ELMOSYAR_API_PER_PAGE", DEFAULT_PER_PAGE),
            timeout: Duration::from_secs(try_load("ELMOSYAR_API_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)),
            ..Self::new(base_url)
        }
    }

    /// Absolute URL for an endpoint path such as `/posts/`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn try_load<T: FromStr + Display>(key: &str, default: T) -> T
where
    T::Err: Display,
{
    let Ok(raw) = env::var(key) else {
        info!("{key} not set, using default: {default}");
        return default;
    };
    raw.parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
        default
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let config = ApiConfig::new("http://localhost:8000/api/");
        assert_eq!(config.endpoint("/posts/"), "http://localhost:8000/api/posts/");
        assert_eq!(config.endpoint("login/"), "http://localhost:8000/api/login/");
    }

    #[test]
    fn try_load_uses_default_when_unset() {
        let value: u64 = try_load("ELMOSYAR_TEST_UNSET_KEY_FOR_CONFIG", 17);
        assert_eq!(value, 17);
    }
}
