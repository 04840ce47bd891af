//! Client for fetching model files as base64 payloads.

use std::sync::Arc;

use crate::cache::PayloadCache;
use crate::config::GlbConfig;
use crate::error::FetchResult;
use crate::source::{HttpSource, Source};

/// Client for fetching model files and encoding them as base64.
///
/// The client owns a [`Source`] for network access and a [`PayloadCache`]
/// for [`fetch_cached_base64`](Self::fetch_cached_base64). Cloning the client
/// is cheap; clones share both the source and the cache. Pass the same cache
/// to several clients to share one slot between otherwise separate clients.
///
/// # Example
///
/// ```ignore
/// let client = Client::new();
/// let payload = client.fetch_cached_base64(&GLB_CONFIG.cdn_url).await?;
/// ```
pub struct Client<S: Source = HttpSource> {
    source: Arc<S>,
    cache: PayloadCache,
}

impl Client<HttpSource> {
    /// Create a client fetching over HTTP with an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::with_source(HttpSource::new())
    }

    /// Create a client around a preconfigured HTTP client.
    #[must_use]
    pub fn with_http(http: reqwest::Client) -> Self {
        Self::with_source(HttpSource::with_client(http))
    }
}

impl<S: Source> Clone for Client<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            cache: self.cache.clone(),
        }
    }
}

impl Default for Client<HttpSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Source> Client<S> {
    /// Create a client with a custom source and an empty cache.
    #[must_use]
    pub fn with_source(source: S) -> Self {
        Self {
            source: Arc::new(source),
            cache: PayloadCache::new(),
        }
    }

    /// Use the given cache instead of this client's own.
    #[must_use]
    pub fn with_cache(mut self, cache: PayloadCache) -> Self {
        self.cache = cache;
        self
    }

    /// The cache used by [`fetch_cached_base64`](Self::fetch_cached_base64).
    #[must_use]
    pub fn cache(&self) -> &PayloadCache {
        &self.cache
    }

    /// Fetch the raw bytes at `url`.
    ///
    /// Failures are logged and returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response status is not
    /// a success.
    pub async fn fetch_bytes(&self, url: &str) -> FetchResult<Vec<u8>> {
        self.source
            .fetch(url)
            .await
            .inspect_err(|error| tracing::warn!(url, %error, "failed to fetch model"))
    }

    /// Fetch the file at `url` and encode it as base64.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response status is not
    /// a success.
    pub async fn fetch_base64(&self, url: &str) -> FetchResult<String> {
        let data = self.fetch_bytes(url).await?;
        let encoded = glb_codec::encode(&data);
        tracing::debug!(url, bytes = data.len(), encoded = encoded.len(), "encoded model");
        Ok(encoded)
    }

    /// Like [`fetch_base64`](Self::fetch_base64), but served from the cache
    /// once it has been filled.
    ///
    /// Concurrent first calls perform a single fetch. A failed fetch is not
    /// cached.
    ///
    /// # Errors
    ///
    /// Returns an error if the cache is empty and the fetch fails.
    pub async fn fetch_cached_base64(&self, url: &str) -> FetchResult<String> {
        self.cache
            .get_or_try_fill(url, || self.fetch_base64(url))
            .await
    }

    /// Fetch the configured model, falling back from the CDN to the raw
    /// source URL.
    ///
    /// # Errors
    ///
    /// Returns the raw source's error if both fetches fail.
    pub async fn fetch_config_base64(&self, config: &GlbConfig) -> FetchResult<String> {
        match self.fetch_base64(&config.cdn_url).await {
            Ok(payload) => Ok(payload),
            Err(error) => {
                tracing::warn!(
                    %error,
                    fallback = %config.github_raw_url,
                    "cdn fetch failed, trying raw source"
                );
                self.fetch_base64(&config.github_raw_url).await
            }
        }
    }
}
