//! # ytls
//!
//! A one-stop shop of YAML command line tools.
//!
//! The heart of the crate is a structural comparator that reports every
//! difference between two documents, with positional or order-insensitive
//! sequence matching. Around it sit thin pipelines that load a document,
//! transform it and write the result.
//!
//! ## Modules
//!
//! - [`value`] - In-memory representation of YAML/JSON documents
//! - [`fieldpath`] - Paths locating a node inside a document
//! - [`diff`] - Structural comparison and report rendering
//! - [`document`] - Loading documents and writing outputs
//! - [`convert`] - YAML to JSON and XML conversion
//! - [`codec`] - URL and base64 encodings of YAML text
//! - [`validate`] - YAML syntax checks
//! - [`prettify`] - Canonical block-style YAML output

pub mod codec;
pub mod convert;
pub mod diff;
pub mod document;
pub mod error;
pub mod fieldpath;
pub mod logging;
pub mod prettify;
pub mod validate;
pub mod value;

pub use diff::{
    compare, compare_values, Change, CompareOptions, DiffEntry, DiffKind, DiffReport,
    NumberEquality, OutputFormat,
};
pub use error::{Error, Result};
pub use fieldpath::{Path, PathElement};
pub use value::{Map, Value};
