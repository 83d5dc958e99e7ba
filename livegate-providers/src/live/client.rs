//! Live-stream provider HTTP Client

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE},
    Client,
};
use tracing::debug;

use super::error::{check_response, json_with_limit, LiveStreamError};
use super::service::LiveStreamProvider;
use super::types::{PlayerLink, PlayerLinkRequest, StreamLink, StreamLinkRequest};

pub const STREAM_LINK_PATH: &str = "/v1/streams/link";
pub const PLAYER_LINK_PATH: &str = "/v1/player/link";

const X_API_KEY: &str = "X-Api-Key";
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Provider base URLs keyed by request path prefix
///
/// The provider serves some paths from dedicated hosts. The longest matching
/// prefix in `overrides` picks the host; everything else goes to `default`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseUrls {
    default: String,
    overrides: BTreeMap<String, String>,
}

impl BaseUrls {
    pub fn new(default: impl Into<String>) -> Self {
        Self {
            default: default.into(),
            overrides: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_override(mut self, prefix: impl Into<String>, base_url: impl Into<String>) -> Self {
        self.overrides.insert(prefix.into(), base_url.into());
        self
    }

    #[must_use]
    pub fn with_overrides(mut self, overrides: BTreeMap<String, String>) -> Self {
        self.overrides.extend(overrides);
        self
    }

    /// Base URL serving `path`
    #[must_use]
    pub fn base_url_for(&self, path: &str) -> &str {
        self.overrides
            .iter()
            .filter(|(prefix, _)| path.starts_with(prefix.as_str()))
            .max_by_key(|(prefix, _)| prefix.len())
            .map_or(self.default.as_str(), |(_, url)| url.as_str())
    }

    /// Full URL for `path`
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url_for(path).trim_end_matches('/'), path)
    }
}

/// Live-stream provider HTTP Client
pub struct LiveStreamClient {
    base_urls: BaseUrls,
    api_key: Option<String>,
    client: Client,
}

impl LiveStreamClient {
    /// Create a new client with default timeouts
    pub fn new(base_urls: BaseUrls) -> Result<Self, LiveStreamError> {
        Self::with_timeouts(base_urls, DEFAULT_CONNECT_TIMEOUT, DEFAULT_TIMEOUT)
    }

    /// Create a new client with explicit connect and request timeouts.
    /// Redirects are disabled so signed links are never forwarded elsewhere.
    pub fn with_timeouts(
        base_urls: BaseUrls,
        connect_timeout: Duration,
        timeout: Duration,
    ) -> Result<Self, LiveStreamError> {
        if base_urls.default.is_empty() {
            return Err(LiveStreamError::InvalidConfig("Missing provider base URL".to_string()));
        }

        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| LiveStreamError::InvalidConfig(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_urls,
            api_key: None,
            client,
        })
    }

    /// Set the API key sent with every request
    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.api_key = Some(api_key.into());
    }

    #[must_use]
    pub fn base_urls(&self) -> &BaseUrls {
        &self.base_urls
    }

    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Build request headers
    fn build_headers(&self) -> Result<HeaderMap, LiveStreamError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(ref api_key) = self.api_key {
            headers.insert(X_API_KEY, HeaderValue::from_str(api_key)?);
        }

        Ok(headers)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, LiveStreamError>
    where
        B: serde::Serialize + Sync,
        T: serde::de::DeserializeOwned,
    {
        let url = self.base_urls.url_for(path);
        debug!(url = %url, "Provider request");

        let response = self
            .client
            .post(&url)
            .headers(self.build_headers()?)
            .json(body)
            .send()
            .await?;

        let response = check_response(response).await?;
        json_with_limit(response).await
    }
}

#[async_trait]
impl LiveStreamProvider for LiveStreamClient {
    async fn stream_link(&self, request: &StreamLinkRequest) -> Result<StreamLink, LiveStreamError> {
        self.post_json(STREAM_LINK_PATH, request).await
    }

    async fn player_link(&self, request: &PlayerLinkRequest) -> Result<PlayerLink, LiveStreamError> {
        self.post_json(PLAYER_LINK_PATH, request).await
    }
}
