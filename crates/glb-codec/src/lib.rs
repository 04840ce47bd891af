//! Encode and decode binary model payloads as base64 text.
//!
//! This crate provides the pure synchronous half of the GLB fetch pipeline:
//! turning fetched bytes into text that survives text-only transports, and
//! turning that text back into bytes for a model loader.
//!
//! # Design principles
//!
//! - **Synchronous**: No async, no threading primitives
//! - **Web-compatible**: Compiles to WASM
//! - **Lossless**: `decode(&encode(b)) == b` for every byte buffer

mod error;
mod payload;

pub use error::{DecodeError, DecodeResult};
pub use payload::{OCTET_STREAM, decode, encode, strip_data_url, to_data_url};
