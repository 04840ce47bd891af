//! Error types for payload decoding.

use std::fmt;

/// Errors that can occur while decoding an encoded payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The text is not valid standard base64.
    InvalidBase64 { detail: String },
    /// A `data:` URL was malformed or did not carry base64 content.
    InvalidDataUrl { detail: &'static str },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBase64 { detail } => write!(f, "invalid base64 payload: {detail}"),
            Self::InvalidDataUrl { detail } => write!(f, "invalid data url: {detail}"),
        }
    }
}

impl std::error::Error for DecodeError {}

impl From<base64::DecodeError> for DecodeError {
    fn from(e: base64::DecodeError) -> Self {
        Self::InvalidBase64 {
            detail: e.to_string(),
        }
    }
}

/// Result type for decoding operations.
pub type DecodeResult<T> = Result<T, DecodeError>;
