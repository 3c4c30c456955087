//! Codec module - Text encodings of YAML files.

pub mod base64;
pub mod url;

use std::fmt;
use std::path::Path;

use tracing::info;

use crate::document;
use crate::error::Result;

/// Direction of a codec run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Action {
    Encode,
    Decode,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Encode => f.write_str("Encoding"),
            Action::Decode => f.write_str("Decoding"),
        }
    }
}

/// Percent-encodes or decodes the file at `input` into `output`.
pub fn url_file(action: Action, input: &Path, output: &Path) -> Result<()> {
    let text = document::read_text(input)?;
    let result = match action {
        Action::Encode => url::encode(&text),
        Action::Decode => url::decode(&text, &input.display().to_string())?,
    };
    document::write_text(output, &result)?;
    info!(%action, input = %input.display(), output = %output.display(), "url codec finished");
    Ok(())
}

/// Base64-encodes or decodes the file at `input` into `output`.
///
/// `split` only applies when encoding.
pub fn base64_file(action: Action, input: &Path, output: &Path, split: Option<usize>) -> Result<()> {
    let text = document::read_text(input)?;
    let result = match action {
        Action::Encode => base64::encode(&text, split)?,
        Action::Decode => base64::decode(&text, &input.display().to_string())?,
    };
    document::write_text(output, &result)?;
    info!(%action, input = %input.display(), output = %output.display(), "base64 codec finished");
    Ok(())
}
