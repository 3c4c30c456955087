//! Core value types and operations.

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

use crate::error::{Error, Result};
use crate::fieldpath::Path;

/// Value represents a parsed YAML/JSON document or any node inside one.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Map(Map),
}

/// Map is an insertion-ordered mapping with string keys.
///
/// Order is kept for output only; two maps with the same entries in a
/// different order are equal.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Map {
    pub fields: IndexMap<String, Value>,
}

/// Kind is the comparison category of a value. Integers and floats share
/// the `Number` kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Null,
    Bool,
    Number,
    String,
    List,
    Map,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::List => "list",
            Kind::Map => "map",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Returns the comparison kind of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) | Value::Float(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::List(_) => Kind::List,
            Value::Map(_) => Kind::Map,
        }
    }

    /// Returns a copy with every map's keys sorted, recursively.
    pub fn sorted(&self) -> Value {
        match self {
            Value::List(items) => Value::List(items.iter().map(Value::sorted).collect()),
            Value::Map(map) => {
                let mut fields: IndexMap<String, Value> = map
                    .iter()
                    .map(|(k, v)| (k.clone(), v.sorted()))
                    .collect();
                fields.sort_keys();
                Value::Map(Map { fields })
            }
            scalar => scalar.clone(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
    }
}

impl Eq for Map {}

impl Map {
    pub fn new() -> Self {
        Map {
            fields: IndexMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Inserts a new entry. A key that is already present is an error.
    pub fn insert_unique(&mut self, key: String, value: Value) -> Result<()> {
        if self.fields.contains_key(&key) {
            return Err(Error::DuplicateKey { key });
        }
        self.fields.insert(key, value);
        Ok(())
    }

    pub fn has(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }
}

impl TryFrom<serde_yaml::Value> for Value {
    type Error = Error;

    fn try_from(raw: serde_yaml::Value) -> Result<Self> {
        Ok(match raw {
            serde_yaml::Value::Null => Value::Null,
            serde_yaml::Value::Bool(b) => Value::Bool(b),
            serde_yaml::Value::Number(n) => number_value(&n),
            serde_yaml::Value::String(s) => Value::String(s),
            serde_yaml::Value::Sequence(items) => Value::List(
                items
                    .into_iter()
                    .map(Value::try_from)
                    .collect::<Result<Vec<_>>>()?,
            ),
            serde_yaml::Value::Mapping(mapping) => {
                let mut map = Map::new();
                for (key, value) in mapping {
                    // `1` and `'1'` are distinct YAML keys but share a text form.
                    map.insert_unique(key_text(key)?, Value::try_from(value)?)?;
                }
                Value::Map(map)
            }
            serde_yaml::Value::Tagged(tagged) => Value::try_from(tagged.value)?,
        })
    }
}

fn number_value(n: &serde_yaml::Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::Int(i)
    } else if let Some(f) = n.as_f64() {
        Value::Float(f)
    } else {
        Value::Float(f64::NAN)
    }
}

/// Converts a scalar mapping key to its plain text form.
fn key_text(key: serde_yaml::Value) -> Result<String> {
    match key {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Null => Ok("null".to_string()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Tagged(tagged) => key_text(tagged.value),
        complex => Err(Error::UnsupportedKey {
            key: format!("{:?}", complex),
        }),
    }
}

/// YAML spelling of a float; non-finite values have no JSON form.
fn float_text(f: f64) -> String {
    if f.is_nan() {
        ".nan".to_string()
    } else if f.is_infinite() {
        if f > 0.0 { ".inf" } else { "-.inf" }.to_string()
    } else {
        format!("{:?}", f)
    }
}

/// Renders the value as compact JSON, except that non-finite floats use
/// their YAML spelling (`.inf`, `-.inf`, `.nan`).
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => f.write_str(&float_text(*x)),
            Value::String(s) => write_quoted(f, s),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Map(map) => {
                f.write_str("{")?;
                for (i, (key, item)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write_quoted(f, key)?;
                    write!(f, ":{}", item)?;
                }
                f.write_str("}")
            }
        }
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    let quoted = serde_json::to_string(s).map_err(|_| fmt::Error)?;
    f.write_str(&quoted)
}

/// Fails on the first NaN or infinite float under `value`.
pub fn ensure_finite(value: &Value, at: &Path) -> Result<()> {
    match value {
        Value::Float(x) if !x.is_finite() => Err(Error::NonFiniteNumber {
            path: at.to_string(),
            value: float_text(*x),
        }),
        Value::List(items) => items
            .iter()
            .enumerate()
            .try_for_each(|(i, item)| ensure_finite(item, &at.index(i))),
        Value::Map(map) => map
            .iter()
            .try_for_each(|(key, item)| ensure_finite(item, &at.field(key.as_str()))),
        _ => Ok(()),
    }
}

/// Parse a value from YAML text.
pub fn from_yaml(yaml: &str) -> Result<Value> {
    crate::document::parse(yaml, "input")
}

/// Serialize a value to block-style YAML.
pub fn to_yaml(value: &Value) -> Result<String> {
    serde_yaml::to_string(value).map_err(Error::YamlEmit)
}

/// Serialize a value to JSON with two-space indentation.
///
/// JSON has no NaN or infinity, so those are rejected rather than written
/// as `null`.
pub fn to_json_pretty(value: &Value) -> Result<String> {
    ensure_finite(value, &Path::new())?;
    Ok(serde_json::to_string_pretty(value)?)
}
