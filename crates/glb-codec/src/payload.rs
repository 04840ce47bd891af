//! Base64 encoding of raw model bytes.
//!
//! Payloads are encoded with the standard alphabet and padding, which is what
//! a browser produces from `readAsDataURL`. Decoding is as lenient as `atob`:
//! padding is optional and ASCII whitespace anywhere in the text is ignored.

use std::borrow::Cow;

use base64::Engine;
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;

use crate::error::{DecodeError, DecodeResult};

/// MIME type used for opaque model bytes.
pub const OCTET_STREAM: &str = "application/octet-stream";

const DATA_SCHEME: &str = "data:";
const BASE64_SUFFIX: &str = ";base64";

/// Standard alphabet, padding optional on decode.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encode raw bytes as standard base64 text.
#[must_use]
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode base64 text back into the bytes it was encoded from.
///
/// Accepts either bare base64 or a `data:<mime>;base64,` URL. Padding may be
/// omitted, and ASCII whitespace (such as line wrapping) is ignored.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidBase64`] if the text is not valid base64, or
/// [`DecodeError::InvalidDataUrl`] if a `data:` URL is malformed.
pub fn decode(text: &str) -> DecodeResult<Vec<u8>> {
    let text = text.trim();
    let body = if text.starts_with(DATA_SCHEME) {
        strip_data_url(text)?
    } else {
        text
    };
    let body = if body.bytes().any(|b| b.is_ascii_whitespace()) {
        Cow::Owned(
            body.bytes()
                .filter(|b| !b.is_ascii_whitespace())
                .collect::<Vec<u8>>(),
        )
    } else {
        Cow::Borrowed(body.as_bytes())
    };
    Ok(LENIENT.decode(body)?)
}

/// Wrap raw bytes in a base64 `data:` URL.
#[must_use]
pub fn to_data_url(bytes: &[u8], mime: &str) -> String {
    format!("{DATA_SCHEME}{mime}{BASE64_SUFFIX},{}", encode(bytes))
}

/// Return the base64 body of a `data:` URL.
///
/// # Errors
///
/// Fails if the scheme or the `,` separator is missing, or if the URL does
/// not declare base64 content.
pub fn strip_data_url(url: &str) -> DecodeResult<&str> {
    let rest = url
        .strip_prefix(DATA_SCHEME)
        .ok_or(DecodeError::InvalidDataUrl {
            detail: "missing `data:` scheme",
        })?;
    let (header, body) = rest.split_once(',').ok_or(DecodeError::InvalidDataUrl {
        detail: "missing `,` separator",
    })?;
    if !header.ends_with(BASE64_SUFFIX) {
        return Err(DecodeError::InvalidDataUrl {
            detail: "content is not base64",
        });
    }
    Ok(body)
}
