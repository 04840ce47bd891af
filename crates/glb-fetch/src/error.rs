//! Error types for the glb-fetch crate.

use std::fmt;

use glb_codec::DecodeError;

/// Result type for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Errors that can occur while retrieving a model file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// HTTP request failed.
    Http {
        /// The URL that failed.
        url: String,
        /// The error message.
        message: String,
    },
    /// HTTP response had a non-success status code.
    HttpStatus {
        /// The URL that returned the error.
        url: String,
        /// The HTTP status code.
        status: u16,
    },
}

impl FetchError {
    /// The URL the failed request was made against.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Http { url, .. } | Self::HttpStatus { url, .. } => url,
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http { url, message } => {
                write!(f, "http request to {url} failed: {message}")
            }
            Self::HttpStatus { url, status } => {
                write!(f, "http request to {url} returned status {status}")
            }
        }
    }
}

impl std::error::Error for FetchError {}

/// Errors that can occur while loading a model into a scene.
///
/// `E` is the error type reported by the external [`ModelLoader`]. It is
/// passed through untouched in [`LoadError::Loader`].
///
/// [`ModelLoader`]: crate::ModelLoader
#[derive(Debug)]
pub enum LoadError<E> {
    /// The encoded payload could not be decoded.
    Decode(DecodeError),
    /// The payload could not be fetched.
    Fetch(FetchError),
    /// The model loader rejected the payload.
    Loader(E),
}

impl<E: fmt::Display> fmt::Display for LoadError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(e) => write!(f, "decode error: {e}"),
            Self::Fetch(e) => write!(f, "fetch error: {e}"),
            Self::Loader(e) => write!(f, "model loader failed: {e}"),
        }
    }
}

impl<E> std::error::Error for LoadError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(e) => Some(e),
            Self::Fetch(e) => Some(e),
            Self::Loader(e) => Some(e),
        }
    }
}

impl<E> From<DecodeError> for LoadError<E> {
    fn from(e: DecodeError) -> Self {
        Self::Decode(e)
    }
}

impl<E> From<FetchError> for LoadError<E> {
    fn from(e: FetchError) -> Self {
        Self::Fetch(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_fetch_error_display() {
        let err = FetchError::HttpStatus {
            url: "https://example.com/a.glb".to_string(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "http request to https://example.com/a.glb returned status 404"
        );
        assert_eq!(err.url(), "https://example.com/a.glb");
    }

    #[test]
    fn test_load_error_source_chain() {
        let err: LoadError<FetchError> = LoadError::Fetch(FetchError::Http {
            url: "https://example.com".to_string(),
            message: "connection refused".to_string(),
        });
        assert!(err.to_string().starts_with("fetch error: "));
        assert!(err.source().is_some());
    }
}
