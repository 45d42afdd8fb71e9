//! Shared HTTP plumbing for the quoting adapters

use reqwest::{
	header::{HeaderMap, HeaderName, HeaderValue},
	Client, ClientBuilder, Response,
};
use routing_types::{AdapterError, AdapterResult, SecretString};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Header carrying the RFQ service API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Authentication applied to every request of a client
#[derive(Debug, Clone)]
pub enum AuthConfig {
	/// No authentication
	None,
	/// API key sent in a custom header
	ApiKey { header: String, key: SecretString },
}

impl AuthConfig {
	/// API key authentication when a key is configured
	pub fn api_key(header: &str, key: Option<&SecretString>) -> Self {
		match key {
			Some(key) if !key.is_empty() => Self::ApiKey {
				header: header.to_string(),
				key: key.clone(),
			},
			_ => Self::None,
		}
	}
}

/// Settings for the HTTP client an adapter owns
#[derive(Debug, Clone)]
pub struct ClientConfig {
	/// Whole-request timeout in milliseconds
	pub timeout_ms: u64,
	/// Maximum number of idle connections per host
	pub max_idle_per_host: usize,
	/// Connection keep-alive timeout
	pub keep_alive_timeout_ms: u64,
	pub auth: AuthConfig,
}

impl ClientConfig {
	pub fn new(timeout_ms: u64) -> Self {
		Self {
			timeout_ms,
			max_idle_per_host: 10,
			keep_alive_timeout_ms: 90_000,
			auth: AuthConfig::None,
		}
	}

	pub fn with_auth(mut self, auth: AuthConfig) -> Self {
		self.auth = auth;
		self
	}

	/// Build a pooled client with the routing headers and auth applied
	pub fn build(&self) -> AdapterResult<Client> {
		let mut headers = HeaderMap::new();
		headers.insert("Content-Type", HeaderValue::from_static("application/json"));
		headers.insert("User-Agent", HeaderValue::from_static("Unified-Routing/1.0"));

		if let AuthConfig::ApiKey { header, key } = &self.auth {
			let name =
				HeaderName::from_bytes(header.as_bytes()).map_err(|_| AdapterError::ConfigError {
					reason: format!("Invalid auth header name '{}'", header),
				})?;
			let mut value =
				HeaderValue::from_str(key.expose_secret()).map_err(|_| AdapterError::ConfigError {
					reason: "API key is not a valid header value".to_string(),
				})?;
			value.set_sensitive(true);
			headers.insert(name, value);
		}

		ClientBuilder::new()
			.default_headers(headers)
			.timeout(Duration::from_millis(self.timeout_ms))
			.pool_max_idle_per_host(self.max_idle_per_host)
			.pool_idle_timeout(Duration::from_millis(self.keep_alive_timeout_ms))
			.tcp_keepalive(Duration::from_secs(60))
			.build()
			.map_err(AdapterError::HttpError)
	}
}

/// Properly construct URL by joining base endpoint with path
pub fn build_url(base_url: &str, path: &str) -> AdapterResult<Url> {
	let mut base = Url::parse(base_url).map_err(|e| AdapterError::ConfigError {
		reason: format!("Invalid base URL '{}': {}", base_url, e),
	})?;

	// Treat the base as a directory so `join` appends instead of replacing
	if !base.path().ends_with('/') {
		base.set_path(&format!("{}/", base.path()));
	}

	base.join(path).map_err(|e| AdapterError::ConfigError {
		reason: format!(
			"Failed to join URL path '{}' to base '{}': {}",
			path, base_url, e
		),
	})
}

/// Map a send failure, reporting timeouts separately
pub fn send_error(error: reqwest::Error, timeout_ms: u64) -> AdapterError {
	if error.is_timeout() {
		AdapterError::Timeout { timeout_ms }
	} else {
		AdapterError::HttpError(error)
	}
}

/// Check the status, then read the body as text and parse it
pub async fn read_json<T: DeserializeOwned>(response: Response, endpoint: &str) -> AdapterResult<T> {
	let status = response.status();
	if !status.is_success() {
		return Err(AdapterError::from_http_failure(status.as_u16()));
	}

	let body = response.text().await.map_err(AdapterError::HttpError)?;
	debug!("{} responded with {} bytes", endpoint, body.len());

	serde_json::from_str(&body).map_err(|e| {
		AdapterError::invalid_response(format!("Failed to parse {} response: {}", endpoint, e))
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_build_url_appends_path() {
		let url = build_url("https://api.example.com/v2", "quote").unwrap();
		assert_eq!(url.as_str(), "https://api.example.com/v2/quote");

		let url = build_url("https://api.example.com/", "dutch-auction/nonce").unwrap();
		assert_eq!(url.as_str(), "https://api.example.com/dutch-auction/nonce");

		assert!(matches!(
			build_url("not a url", "quote"),
			Err(AdapterError::ConfigError { .. })
		));
	}

	#[test]
	fn test_api_key_auth_skips_empty_keys() {
		assert!(matches!(
			AuthConfig::api_key(API_KEY_HEADER, None),
			AuthConfig::None
		));
		assert!(matches!(
			AuthConfig::api_key(API_KEY_HEADER, Some(&SecretString::from(""))),
			AuthConfig::None
		));
		assert!(matches!(
			AuthConfig::api_key(API_KEY_HEADER, Some(&SecretString::from("key"))),
			AuthConfig::ApiKey { .. }
		));
	}

	#[test]
	fn test_client_builds_with_api_key() {
		let config = ClientConfig::new(1_000)
			.with_auth(AuthConfig::api_key(API_KEY_HEADER, Some(&SecretString::from("k"))));
		assert!(config.build().is_ok());
	}
}
