//! Value module - In-memory representation of YAML/JSON documents.

mod value;

pub use value::*;
