use std::fmt;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;

/// Transport-level failures. Nothing here is retried.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Connection refused, DNS failure, truncated body.
    Network(String),
    /// The service answered with a non-2xx status.
    Status { status: u16, message: String },
    /// The body was not the JSON we expected.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Status { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// A GET-only view of the Pokémon data service.
///
/// Implementations hold no per-request state, so one instance can be shared
/// by any number of concurrent callers behind an `Arc`.
#[async_trait]
pub trait DexApi: Send + Sync {
    /// Issues `GET {base}/{path}` and returns the parsed JSON body.
    async fn get(&self, path: &str) -> Result<serde_json::Value, ApiError>;
}

/// Fetches `path` and decodes the body into `T`.
pub async fn fetch_as<T: DeserializeOwned>(api: &dyn DexApi, path: &str) -> Result<T, ApiError> {
    let body = api.get(path).await?;
    serde_json::from_value(body).map_err(|e| ApiError::Parse(format!("{path}: {e}")))
}

/// `reqwest`-backed client bound to a single base URL.
pub struct HttpDexApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpDexApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl DexApi for HttpDexApi {
    async fn get(&self, path: &str) -> Result<serde_json::Value, ApiError> {
        let url = self.url_for(path);
        info!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        debug!("Response status for {}: {}", url, response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("PokéAPI error: {} - {}", status, message);
            return Err(ApiError::Status { status, message });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        debug!("Received {} bytes from {}", bytes.len(), url);

        serde_json::from_slice(&bytes).map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let api = HttpDexApi::new("https://pokeapi.co/api/v2/");
        assert_eq!(api.base_url(), "https://pokeapi.co/api/v2");
        assert_eq!(
            api.url_for("pokemon/1"),
            "https://pokeapi.co/api/v2/pokemon/1"
        );
    }

    #[test]
    fn test_url_for_strips_leading_slash() {
        let api = HttpDexApi::new("http://localhost:8080");
        assert_eq!(
            api.url_for("/pokemon?offset=0&limit=40"),
            "http://localhost:8080/pokemon?offset=0&limit=40"
        );
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError::Status {
            status: 404,
            message: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "API error (HTTP 404): Not Found");
        assert_eq!(
            ApiError::Network("refused".to_string()).to_string(),
            "network error: refused"
        );
    }
}
