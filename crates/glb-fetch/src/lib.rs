//! Async client for fetching GLB models as base64 and handing them to a
//! rendering engine's model loader.
//!
//! This crate fetches a model file over HTTP, encodes it as base64, keeps a
//! single-slot cache of the result, and loads payloads into a scene through
//! an engine-provided [`ModelLoader`].
//!
//! # Design principles
//!
//! - **Web-compatible**: Works on desktop and WASM via reqwest
//! - **Explicit failures**: Every fetch and load returns a `Result`
//! - **Scoped resources**: Object URLs are revoked on every exit path
//!
//! # Example
//!
//! ```ignore
//! use glb_fetch::{Client, GLB_CONFIG, GlbLoader};
//!
//! let client = Client::new();
//! let base64 = client.fetch_cached_base64(&GLB_CONFIG.cdn_url).await?;
//!
//! let loader = GlbLoader::new(engine_loader);
//! let model = loader.load_from_base64(&base64, &mut scene).await?;
//! ```

pub mod blob;
pub mod cache;
mod client;
mod config;
mod error;
mod loader;
pub mod source;

pub use blob::{Blob, BlobStore, ObjectUrl};
pub use cache::{CachedPayload, PayloadCache};
pub use client::Client;
pub use config::{GLB_CONFIG, GlbConfig};
pub use error::{FetchError, FetchResult, LoadError};
pub use loader::{GlbLoader, LoadedModel, ModelLoader, Scene};
pub use source::{HttpSource, Source};

// Re-export codec types for convenience.
pub use glb_codec::{DecodeError, decode, encode};
