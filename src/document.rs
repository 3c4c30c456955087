//! Loading documents from disk and writing results back out.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::value::Value;

/// Output path that stands for standard output.
pub const STDOUT: &str = "-";

/// Reads the whole file at `path` as UTF-8 text.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::read(path, e))
}

/// Parses YAML text into a value. `origin` names the input in errors.
pub fn parse(text: &str, origin: &str) -> Result<Value> {
    let raw: serde_yaml::Value =
        serde_yaml::from_str(text).map_err(|e| Error::parse(origin, e))?;
    Value::try_from(raw)
}

/// Loads and parses the YAML file at `path`.
pub fn load(path: &Path) -> Result<Value> {
    let text = read_text(path)?;
    let value = parse(&text, &format!("file {}", path.display()))?;
    debug!(path = %path.display(), kind = %value.kind(), "loaded document");
    Ok(value)
}

/// Returns true if `path` means standard output.
pub fn is_stdout(path: &Path) -> bool {
    path.as_os_str() == STDOUT
}

/// Writes `text` to `path`, or to standard output when `path` is `-`.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    if is_stdout(path) {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(text.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| Error::write(path, e))?;
    } else {
        fs::write(path, text).map_err(|e| Error::write(path, e))?;
    }
    debug!(path = %path.display(), bytes = text.len(), "wrote output");
    Ok(())
}
