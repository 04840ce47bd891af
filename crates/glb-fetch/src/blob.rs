//! In-memory blobs addressable by temporary object URLs.
//!
//! A model loader is handed a URL rather than bytes. [`BlobStore`] maps
//! `blob:glb/<n>` URLs to [`Blob`]s, and [`ObjectUrl`] revokes its mapping
//! when dropped, so a URL never outlives the load that created it.

use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, LazyLock, PoisonError, RwLock},
};

const URL_PREFIX: &str = "blob:glb/";

static GLOBAL: LazyLock<BlobStore> = LazyLock::new(BlobStore::new);

/// Immutable bytes tagged with a MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    data: Arc<[u8]>,
    mime: &'static str,
}

impl Blob {
    /// Wrap bytes in a blob.
    #[must_use]
    pub fn new(data: Vec<u8>, mime: &'static str) -> Self {
        Self {
            data: data.into(),
            mime,
        }
    }

    /// The blob contents.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// The blob's MIME type.
    #[must_use]
    pub fn mime(&self) -> &'static str {
        self.mime
    }

    /// Size of the blob in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the blob is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Registry of live object URLs.
///
/// Cloning the store yields another handle to the same registry.
#[derive(Debug, Clone, Default)]
pub struct BlobStore {
    inner: Arc<RwLock<BlobStoreInner>>,
}

#[derive(Debug, Default)]
struct BlobStoreInner {
    entries: HashMap<String, Blob>,
    next_id: u64,
}

impl BlobStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide store.
    #[must_use]
    pub fn global() -> &'static BlobStore {
        &GLOBAL
    }

    /// Register `blob` under a fresh URL.
    ///
    /// The URL stays resolvable until the returned guard is dropped.
    #[must_use]
    pub fn create_object_url(&self, blob: Blob) -> ObjectUrl {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let url = format!("{URL_PREFIX}{}", inner.next_id);
        inner.next_id += 1;

        tracing::trace!(url = %url, bytes = blob.len(), "created object url");
        inner.entries.insert(url.clone(), blob);

        ObjectUrl {
            url,
            store: self.clone(),
        }
    }

    /// Look up the blob behind a live URL.
    #[must_use]
    pub fn resolve(&self, url: &str) -> Option<Blob> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.entries.get(url).cloned()
    }

    /// Number of live URLs.
    #[must_use]
    pub fn len(&self) -> usize {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.entries.len()
    }

    /// Check if no URLs are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn revoke(&self, url: &str) -> bool {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.entries.remove(url).is_some()
    }
}

/// A live object URL. Revoked on drop.
#[derive(Debug)]
pub struct ObjectUrl {
    url: String,
    store: BlobStore,
}

impl ObjectUrl {
    /// The URL string, e.g. `blob:glb/0`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// The blob this URL points at.
    #[must_use]
    pub fn blob(&self) -> Option<Blob> {
        self.store.resolve(&self.url)
    }
}

impl AsRef<str> for ObjectUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for ObjectUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if self.store.revoke(&self.url) {
            tracing::trace!(url = %self.url, "revoked object url");
        }
    }
}
