//! Base64 encoding of YAML text, optionally split into chunks.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{Error, Result};

/// Encodes the UTF-8 bytes of `text`, one line per encoded chunk.
///
/// With `split`, every `split` input bytes are encoded on their own line;
/// without it the whole input is a single line.
pub fn encode(text: &str, split: Option<usize>) -> Result<String> {
    let bytes = text.as_bytes();
    let chunk_size = match split {
        Some(0) => return Err(Error::InvalidSplit),
        Some(n) => n,
        None => bytes.len().max(1),
    };

    if bytes.is_empty() {
        return Ok("\n".to_string());
    }

    let mut out = String::new();
    for chunk in bytes.chunks(chunk_size) {
        out.push_str(&STANDARD.encode(chunk));
        out.push('\n');
    }
    Ok(out)
}

/// Decodes text produced by [`encode`].
///
/// Each non-blank line is decoded on its own and the bytes are joined, so
/// both single-line and chunked input work.
pub fn decode(text: &str, origin: &str) -> Result<String> {
    let mut bytes = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let chunk = STANDARD
            .decode(line)
            .map_err(|source| Error::Base64 { line: i + 1, source })?;
        bytes.extend_from_slice(&chunk);
    }
    String::from_utf8(bytes).map_err(|_| Error::Utf8 {
        origin: origin.to_string(),
    })
}
