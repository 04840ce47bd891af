//! Byte sources that model files are fetched from.
//!
//! The [`Source`] trait is the network boundary of the crate. [`HttpSource`]
//! is the real implementation; tests substitute their own.

use std::{future::Future, pin::Pin};

use crate::error::{FetchError, FetchResult};

/// Future type for source fetch operations.
#[cfg(not(target_family = "wasm"))]
pub type FetchFuture<'a> = Pin<Box<dyn Future<Output = FetchResult<Vec<u8>>> + Send + 'a>>;

/// Future type for source fetch operations.
///
/// Browser fetch futures are not `Send`, so the bound is dropped on WASM.
#[cfg(target_family = "wasm")]
pub type FetchFuture<'a> = Pin<Box<dyn Future<Output = FetchResult<Vec<u8>>> + 'a>>;

/// Something that can retrieve the body at a URL as opaque bytes.
pub trait Source {
    /// Fetch the full body at `url`.
    fn fetch<'a>(&'a self, url: &'a str) -> FetchFuture<'a>;
}

/// Fetches over HTTP(S) with `reqwest`.
///
/// Timeouts and proxies come from the wrapped `reqwest::Client`; none are
/// imposed here.
#[derive(Debug, Clone, Default)]
pub struct HttpSource {
    http: reqwest::Client,
}

impl HttpSource {
    /// Create a source with a default HTTP client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source around a preconfigured HTTP client.
    #[must_use]
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl Source for HttpSource {
    fn fetch<'a>(&'a self, url: &'a str) -> FetchFuture<'a> {
        Box::pin(async move {
            tracing::debug!(url, "fetching");

            let response = self
                .http
                .get(url)
                .send()
                .await
                .map_err(|e| FetchError::Http {
                    url: url.to_string(),
                    message: e.to_string(),
                })?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::HttpStatus {
                    url: url.to_string(),
                    status: status.as_u16(),
                });
            }

            let data = response.bytes().await.map_err(|e| FetchError::Http {
                url: url.to_string(),
                message: e.to_string(),
            })?;

            tracing::debug!(url, bytes = data.len(), "fetched");
            Ok(data.to_vec())
        })
    }
}
