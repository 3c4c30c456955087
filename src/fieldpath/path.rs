//! Path element and path types.

use serde::{Serialize, Serializer};
use std::fmt;

/// PathElement represents one level of path navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathElement {
    /// Key of a mapping entry.
    FieldName(String),
    /// Position inside a sequence.
    Index(usize),
}

impl PathElement {
    /// Creates a new field name path element.
    pub fn field_name(name: impl Into<String>) -> Self {
        PathElement::FieldName(name.into())
    }

    /// Creates a new index path element.
    pub fn index(i: usize) -> Self {
        PathElement::Index(i)
    }
}

/// Path represents the location of a node, from the document root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    elements: Vec<PathElement>,
}

impl Path {
    /// Creates a new empty path.
    pub fn new() -> Self {
        Path {
            elements: Vec::new(),
        }
    }

    /// Creates a path from a vector of elements.
    pub fn from_elements(elements: Vec<PathElement>) -> Self {
        Path { elements }
    }

    /// Returns true for the root path.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Creates a new path with the given element appended.
    pub fn with(&self, element: PathElement) -> Self {
        let mut elements = self.elements.clone();
        elements.push(element);
        Path { elements }
    }

    /// Shorthand for `with(PathElement::field_name(name))`.
    pub fn field(&self, name: impl Into<String>) -> Self {
        self.with(PathElement::field_name(name))
    }

    /// Shorthand for `with(PathElement::index(i))`.
    pub fn index(&self, i: usize) -> Self {
        self.with(PathElement::index(i))
    }
}

/// Keys that would read as more than one segment are quoted.
fn needs_quoting(name: &str) -> bool {
    name.is_empty() || name.contains(['.', '[', ']', '"'])
}

impl fmt::Display for PathElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathElement::FieldName(name) if needs_quoting(name) => {
                let quoted = serde_json::to_string(name).map_err(|_| fmt::Error)?;
                write!(f, "[{}]", quoted)
            }
            PathElement::FieldName(name) => write!(f, ".{}", name),
            PathElement::Index(i) => write!(f, "[{}]", i),
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str(".");
        }
        for element in &self.elements {
            write!(f, "{}", element)?;
        }
        Ok(())
    }
}

/// Paths serialize as their display form.
impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
