//! Field path module - Locates nodes inside a document tree.

mod path;

pub use path::*;
