//! Percent-encoding of YAML text.

use crate::document;
use crate::error::{Error, Result};
use crate::value;

/// Percent-encodes `text`. Only RFC 3986 unreserved characters are kept.
pub fn encode(text: &str) -> String {
    urlencoding::encode(text).into_owned()
}

/// Percent-decodes `text`, checks that the result is YAML and re-emits it.
pub fn decode(text: &str, origin: &str) -> Result<String> {
    let decoded = urlencoding::decode(text).map_err(|_| Error::Utf8 {
        origin: origin.to_string(),
    })?;
    let value = document::parse(&decoded, &format!("decoded from {origin}"))?;
    value::to_yaml(&value)
}
