//! Boundary to an external rendering engine's model loader.
//!
//! The engine provides a [`ModelLoader`] that reads a model from a URL and a
//! [`Scene`] that accepts nodes. [`GlbLoader`] turns a base64 payload into an
//! [`ObjectUrl`], drives the engine's loader against it and attaches the
//! result.

use std::future::Future;

use crate::blob::{Blob, BlobStore, ObjectUrl};
use crate::client::Client;
use crate::error::LoadError;
use crate::source::Source;

/// A scene graph that loaded models can be attached to.
pub trait Scene {
    /// Node type the scene accepts.
    type Node;

    /// Add a node to the scene.
    fn add(&mut self, node: Self::Node);
}

/// A model produced by a [`ModelLoader`].
pub trait LoadedModel {
    /// Node type of the model's scene root.
    type Node;

    /// A handle to the model's scene root, ready to be added to a [`Scene`].
    fn scene(&self) -> Self::Node;
}

/// An engine's asynchronous model loader.
pub trait ModelLoader {
    /// The loaded model.
    type Model: LoadedModel;
    /// Error reported when loading fails.
    type Error;

    /// Load the model behind `url`.
    ///
    /// The URL is only guaranteed to resolve until the returned future
    /// completes.
    fn load(&self, url: &ObjectUrl) -> impl Future<Output = Result<Self::Model, Self::Error>>;
}

/// Loads base64-encoded GLB payloads through a [`ModelLoader`].
#[derive(Debug)]
pub struct GlbLoader<L> {
    loader: L,
    blobs: BlobStore,
}

impl<L: ModelLoader> GlbLoader<L> {
    /// Wrap an engine loader, publishing object URLs in the process-wide
    /// [`BlobStore`].
    #[must_use]
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            blobs: BlobStore::global().clone(),
        }
    }

    /// Publish object URLs in `blobs` instead of the process-wide store.
    #[must_use]
    pub fn with_blob_store(mut self, blobs: BlobStore) -> Self {
        self.blobs = blobs;
        self
    }

    /// The store object URLs are published in.
    #[must_use]
    pub fn blob_store(&self) -> &BlobStore {
        &self.blobs
    }

    /// Decode `base64`, load it as a model, and add the model's scene to
    /// `scene`.
    ///
    /// The temporary object URL is revoked on every exit path, including
    /// loader failure and the returned future being dropped. A loader error is
    /// returned unchanged as [`LoadError::Loader`].
    pub async fn load_from_base64<S>(
        &self,
        base64: &str,
        scene: &mut S,
    ) -> Result<L::Model, LoadError<L::Error>>
    where
        S: Scene<Node = <L::Model as LoadedModel>::Node>,
    {
        let bytes = glb_codec::decode(base64)?;
        let blob = Blob::new(bytes, glb_codec::OCTET_STREAM);
        let url = self.blobs.create_object_url(blob);

        tracing::debug!(url = %url, "loading model");
        let model = match self.loader.load(&url).await {
            Ok(model) => model,
            Err(e) => {
                tracing::warn!(url = %url, "model loader failed");
                return Err(LoadError::Loader(e));
            }
        };

        scene.add(model.scene());
        Ok(model)
    }

    /// Fetch `url` through the client's cache and load it into `scene`.
    pub async fn load_from_url<Src, S>(
        &self,
        client: &Client<Src>,
        url: &str,
        scene: &mut S,
    ) -> Result<L::Model, LoadError<L::Error>>
    where
        Src: Source,
        S: Scene<Node = <L::Model as LoadedModel>::Node>,
    {
        let base64 = client.fetch_cached_base64(url).await?;
        self.load_from_base64(&base64, scene).await
    }
}
