use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use url::Url;

use crate::errors::ProviderError;
use crate::providers::DictionarySource;

/// Client for the Wiktionary REST v1 API
#[derive(Debug)]
pub struct WiktionaryClient {
    /// Base URL of the service (scheme + host)
    base_url: String,
    /// HTTP client for making requests
    client: Client,
    /// Maximum number of retry attempts
    max_retries: u32,
    /// Base backoff time in milliseconds for exponential backoff
    backoff_base_ms: u64,
}

impl WiktionaryClient {
    /// Create a new client with default retry settings
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_config(endpoint, 30, 3, 1000)
    }

    /// Create a new client with explicit timeout and retry configuration
    pub fn with_config(
        endpoint: impl Into<String>,
        timeout_secs: u64,
        max_retries: u32,
        backoff_base_ms: u64,
    ) -> Self {
        Self {
            base_url: endpoint.into().trim_end_matches('/').to_string(),
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            max_retries,
            backoff_base_ms,
        }
    }

    // Build an API URL; the word travels as a path segment so it gets
    // percent-encoded
    fn api_url(&self, route: &str, word: &str) -> Result<Url, ProviderError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ProviderError::RequestFailed(format!("Invalid endpoint '{}': {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| ProviderError::RequestFailed(format!("Endpoint cannot take paths: {}", self.base_url)))?
            .extend(["api", "rest_v1", "page", route, word]);
        Ok(url)
    }

    /// GET a JSON document with retry on transient faults.
    ///
    /// Network errors and 5xx responses are retried with exponential
    /// backoff; 4xx responses fail immediately since retrying cannot help.
    async fn get_json(&self, url: Url) -> Result<Value, ProviderError> {
        let mut attempt = 0;
        let mut last_error = None;

        while attempt <= self.max_retries {
            match self.client.get(url.clone()).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return response.json::<Value>().await
                            .map_err(|e| ProviderError::ParseError(
                                format!("Invalid JSON from {}: {}", url, e)));
                    }

                    let message = response.text().await
                        .unwrap_or_else(|_| "Failed to get error response text".to_string());
                    if status.is_server_error() {
                        error!("Wiktionary API error ({}): {} - attempt {}/{}",
                              status, message, attempt + 1, self.max_retries + 1);
                        last_error = Some(ProviderError::ApiError {
                            status_code: status.as_u16(),
                            message,
                        });
                    } else {
                        debug!("Wiktionary API error ({}): {}", status, message);
                        return Err(ProviderError::ApiError {
                            status_code: status.as_u16(),
                            message,
                        });
                    }
                }
                Err(e) => {
                    error!("Wiktionary API network error: {} - attempt {}/{}",
                          e, attempt + 1, self.max_retries + 1);
                    last_error = Some(ProviderError::ConnectionError(e.to_string()));
                }
            }

            attempt += 1;
            if attempt <= self.max_retries {
                let backoff_ms = self.backoff_base_ms * (1u64 << (attempt - 1));
                tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
            }
        }

        Err(last_error.unwrap_or_else(|| ProviderError::RequestFailed(
            format!("Request failed after {} attempts", self.max_retries + 1))))
    }
}

#[async_trait]
impl DictionarySource for WiktionaryClient {
    async fn fetch_definition(&self, word: &str) -> Result<Value, ProviderError> {
        let url = self.api_url("definition", word)?;
        debug!("GET {}", url);
        self.get_json(url).await
    }

    async fn fetch_page(&self, word: &str) -> Result<Value, ProviderError> {
        let url = self.api_url("mobile-sections", word)?;
        debug!("GET {}", url);
        self.get_json(url).await
    }

    fn page_url(&self, word: &str) -> String {
        format!("{}/wiki/{}", self.base_url, word)
    }
}
