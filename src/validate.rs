//! YAML syntax validation.

use std::path::Path;

use tracing::debug;

use crate::document;
use crate::error::Result;

/// Checks that the file at `path` is readable, well-formed YAML.
///
/// Returns the load or parse error describing the first problem found.
pub fn validate_file(path: &Path) -> Result<()> {
    document::load(path)?;
    debug!(path = %path.display(), "valid YAML");
    Ok(())
}

/// Checks that `text` is well-formed YAML.
pub fn validate_str(text: &str) -> Result<()> {
    document::parse(text, "input").map(|_| ())
}
