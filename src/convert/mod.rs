//! Convert module - Renders YAML documents in other formats.

mod xml;

pub use xml::to_xml;

use std::fmt;
use std::path::Path;

use tracing::info;

use crate::document;
use crate::error::Result;
use crate::value::{self, Value};

/// Target format of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Json,
    Xml,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => f.write_str("JSON"),
            Format::Xml => f.write_str("XML"),
        }
    }
}

/// Renders `value` in the target format.
pub fn convert(value: &Value, format: Format) -> Result<String> {
    match format {
        Format::Json => value::to_json_pretty(value),
        Format::Xml => to_xml(value),
    }
}

/// Loads `input`, converts it and writes the result to `output`.
pub fn convert_file(input: &Path, output: &Path, format: Format) -> Result<()> {
    let value = document::load(input)?;
    let text = convert(&value, format)?;
    document::write_text(output, &text)?;
    info!(input = %input.display(), output = %output.display(), %format, "converted");
    Ok(())
}
