//! Canonical block-style re-emission of YAML.

use std::path::Path;

use tracing::info;

use crate::document;
use crate::error::Result;
use crate::value::{self, Value};

/// Renders `value` as block-style YAML, sorting keys unless `keep_order`.
pub fn prettify(value: &Value, keep_order: bool) -> Result<String> {
    if keep_order {
        value::to_yaml(value)
    } else {
        value::to_yaml(&value.sorted())
    }
}

/// Loads `input` and writes its prettified form to `output`.
pub fn prettify_file(input: &Path, output: &Path, keep_order: bool) -> Result<()> {
    let value = document::load(input)?;
    let text = prettify(&value, keep_order)?;
    document::write_text(output, &text)?;
    info!(input = %input.display(), output = %output.display(), keep_order, "prettified");
    Ok(())
}
