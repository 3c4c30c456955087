//! XML rendering of a value tree.
//!
//! The document element is `<root>`. Map entries become child elements named
//! after their key, list items become `<item>` elements, and every element
//! carries a `type` attribute naming the value's type.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::{Error, Result};
use crate::value::Value;

/// Renders `value` as an indented XML document.
pub fn to_xml(value: &Value) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    write_event(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write_element(&mut writer, "root", value)?;

    let mut xml = String::from_utf8(writer.into_inner()).map_err(|e| Error::Xml {
        message: e.to_string(),
    })?;
    xml.push('\n');
    Ok(xml)
}

/// Type attribute for a value.
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Int(_) => "int",
        Value::Float(_) => "float",
        Value::String(_) => "str",
        Value::List(_) => "list",
        Value::Map(_) => "dict",
    }
}

fn write_event(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer.write_event(event).map_err(|e| Error::Xml {
        message: e.to_string(),
    })
}

fn write_element(writer: &mut Writer<Vec<u8>>, name: &str, value: &Value) -> Result<()> {
    let tag = if is_xml_name(name) { name } else { "key" };
    let mut start = BytesStart::new(tag);
    if tag != name {
        start.push_attribute(("name", xml_chars(name).as_str()));
    }
    start.push_attribute(("type", type_name(value)));

    match value {
        Value::Null => return write_event(writer, Event::Empty(start)),
        Value::List(items) if items.is_empty() => return write_event(writer, Event::Empty(start)),
        Value::Map(map) if map.is_empty() => return write_event(writer, Event::Empty(start)),
        _ => {}
    }

    write_event(writer, Event::Start(start))?;
    match value {
        Value::List(items) => {
            for item in items {
                write_element(writer, "item", item)?;
            }
        }
        Value::Map(map) => {
            for (key, child) in map.iter() {
                write_element(writer, key, child)?;
            }
        }
        scalar => {
            let text = xml_chars(&scalar_text(scalar));
            write_event(writer, Event::Text(BytesText::new(&text)))?;
        }
    }
    write_event(writer, Event::End(BytesEnd::new(tag)))
}

/// Keys that are not valid XML names are carried in a `name` attribute.
/// Names starting with `xml` in any case are reserved.
fn is_xml_name(name: &str) -> bool {
    if name.get(..3).is_some_and(|prefix| prefix.eq_ignore_ascii_case("xml")) {
        return false;
    }
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
        }
        _ => false,
    }
}

/// Drops characters XML 1.0 cannot carry, even escaped.
fn xml_chars(text: &str) -> String {
    text.chars()
        .filter(|&c| match c {
            '\t' | '\n' | '\r' => true,
            '\u{FFFE}' | '\u{FFFF}' => false,
            c => !c.is_control() || c as u32 >= 0x7F,
        })
        .collect()
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Bool(b) => b.to_string(),
        Value::Int(i) => i.to_string(),
        Value::Float(f) => float_text(*f),
        Value::String(s) => s.clone(),
        _ => String::new(),
    }
}

fn float_text(f: f64) -> String {
    if f.is_nan() {
        "nan".to_string()
    } else if f.is_infinite() {
        let sign = if f > 0.0 { "" } else { "-" };
        format!("{sign}inf")
    } else if f.fract() == 0.0 && f.abs() < 1e16 {
        format!("{:.1}", f)
    } else {
        f.to_string()
    }
}
