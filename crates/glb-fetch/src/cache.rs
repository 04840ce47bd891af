//! Single-slot cache for an encoded model payload.
//!
//! The slot holds at most one payload for the lifetime of the cache. It is
//! never expired; [`PayloadCache::invalidate`] is the only way to empty it.

use std::{future::Future, sync::Arc};

use tokio::sync::Mutex;

/// A payload held in the cache, with the URL it was fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedPayload {
    /// URL the payload was fetched from.
    pub url: String,
    /// The base64-encoded model bytes.
    pub base64: String,
}

/// A cache holding at most one encoded payload.
///
/// Cloning the cache yields another handle to the same slot. The slot lock
/// is held while it is being filled, so concurrent callers that find it
/// empty wait for a single fill instead of racing.
#[derive(Debug, Clone, Default)]
pub struct PayloadCache {
    slot: Arc<Mutex<Option<CachedPayload>>>,
}

impl PayloadCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy of the cached payload, if any.
    pub async fn get(&self) -> Option<CachedPayload> {
        self.slot.lock().await.clone()
    }

    /// Check whether the slot is empty.
    pub async fn is_empty(&self) -> bool {
        self.slot.lock().await.is_none()
    }

    /// Return the cached payload, or run `fill` and cache its result.
    ///
    /// The slot is not keyed: once filled, it is returned for every `url`.
    /// A failed `fill` leaves the slot empty and returns the error.
    pub async fn get_or_try_fill<F, Fut, E>(&self, url: &str, fill: F) -> Result<String, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String, E>>,
    {
        let mut slot = self.slot.lock().await;

        if let Some(cached) = slot.as_ref() {
            if cached.url == url {
                tracing::debug!(url, "cache hit");
            } else {
                tracing::debug!(url, cached_url = %cached.url, "cache hit from a different url");
            }
            return Ok(cached.base64.clone());
        }

        let base64 = fill().await?;
        *slot = Some(CachedPayload {
            url: url.to_string(),
            base64: base64.clone(),
        });
        Ok(base64)
    }

    /// Empty the slot, returning what it held.
    pub async fn invalidate(&self) -> Option<CachedPayload> {
        let previous = self.slot.lock().await.take();
        if let Some(previous) = &previous {
            tracing::debug!(url = %previous.url, "cache invalidated");
        }
        previous
    }
}
