//! Shared HTTP client for the Sofra backend.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{RemoteError, Result};

/// Default backend base URL (Cloudflare Worker proxy).
pub const DEFAULT_BASE_URL: &str = "https://food-suggestion-api.ugurer.workers.dev";

/// Remote API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Backend base URL, without a trailing slash.
    pub base_url: String,
    /// Daily allowance for AI recommendation calls.
    pub ai_daily_limit: u32,
    /// Daily allowance for Places searches.
    pub places_daily_limit: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            ai_daily_limit: sofra_core::rate_limit::DEFAULT_AI_DAILY_LIMIT,
            places_daily_limit: sofra_core::rate_limit::DEFAULT_PLACES_DAILY_LIMIT,
        }
    }
}

/// HTTP client bound to the backend base URL.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Whether the backend answers its health endpoint.
    pub async fn health(&self) -> bool {
        let url = format!("{}/health", self.config.base_url);
        match self.http.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    /// GET a JSON document from a backend path.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.config.base_url, path);
        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(RemoteError::Api(format!(
                "GET {} returned {}",
                path,
                response.status()
            )));
        }

        Ok(response.json().await?)
    }

    /// POST a JSON body to a backend path and decode the JSON reply.
    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{}{}", self.config.base_url, path);
        let response = self.http.post(&url).json(body).send().await?;

        if !response.status().is_success() {
            return Err(RemoteError::Api(format!(
                "POST {} returned {}",
                path,
                response.status()
            )));
        }

        Ok(response.json().await?)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_carries_the_documented_limits() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.ai_daily_limit, 20);
        assert_eq!(config.places_daily_limit, 20);
    }
}
