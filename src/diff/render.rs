//! Human and machine readable rendering of diff reports.

use serde::Serialize;
use std::fmt;

use super::report::{Change, DiffEntry, DiffKind, DiffReport};
use crate::error::Result;
use crate::value::ensure_finite;

/// Output format for a rendered report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Renders `report` in the requested format.
pub fn render(report: &DiffReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report.to_string()),
        OutputFormat::Json => render_json(report),
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    identical: bool,
    changes: &'a [DiffEntry],
}

/// Renders the report as pretty-printed JSON.
///
/// Fails when a reported value holds NaN or an infinity, which JSON cannot
/// express.
pub fn render_json(report: &DiffReport) -> Result<String> {
    for entry in report.iter() {
        match &entry.change {
            Change::ValueChanged { old, new } | Change::TypeChanged { old, new } => {
                ensure_finite(old, &entry.path)?;
                ensure_finite(new, &entry.path)?;
            }
            Change::ItemAdded { value } | Change::ItemRemoved { value } => {
                ensure_finite(value, &entry.path)?;
            }
        }
    }
    let doc = JsonReport {
        identical: report.is_same(),
        changes: report.entries(),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

impl fmt::Display for DiffEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.change {
            Change::ValueChanged { old, new } => write!(f, "~ {}: {} -> {}", self.path, old, new),
            Change::TypeChanged { old, new } => write!(
                f,
                "~ {}: {} ({}) -> {} ({})",
                self.path,
                old,
                old.kind(),
                new,
                new.kind()
            ),
            Change::ItemAdded { value } => write!(f, "+ {}: {}", self.path, value),
            Change::ItemRemoved { value } => write!(f, "- {}: {}", self.path, value),
        }
    }
}

/// Groups entries by kind; empty groups are left out.
impl fmt::Display for DiffReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_same() {
            return write!(f, "The YAML files are identical.");
        }

        write!(f, "Differences found:")?;
        for kind in DiffKind::ALL {
            let mut entries = self.of_kind(kind).peekable();
            if entries.peek().is_none() {
                continue;
            }
            write!(f, "\n\n{}:", kind.title())?;
            for entry in entries {
                write!(f, "\n  {}", entry)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::compare_values;
    use crate::value::from_yaml;
    use pretty_assertions::assert_eq;

    fn report(left: &str, right: &str) -> DiffReport {
        compare_values(&from_yaml(left).unwrap(), &from_yaml(right).unwrap(), false)
    }

    #[test]
    fn test_identical_message() {
        let text = report("a: 1", "a: 1").to_string();
        assert_eq!(text, "The YAML files are identical.");
    }

    #[test]
    fn test_groups_in_fixed_order() {
        let text = report("a: 1\nb: x\nc: 3\n", "a: 2\nb: true\nd: [1]\n").to_string();
        assert_eq!(
            text,
            "Differences found:\n\
             \n\
             Values Changed:\n  ~ .a: 1 -> 2\n\
             \n\
             Types Changed:\n  ~ .b: \"x\" (string) -> true (bool)\n\
             \n\
             Items Added:\n  + .d: [1]\n\
             \n\
             Items Removed:\n  - .c: 3"
        );
    }

    #[test]
    fn test_empty_groups_are_omitted() {
        let text = report("a: 1", "a: 1\nb: 2").to_string();
        assert!(text.contains("Items Added"));
        assert!(!text.contains("Items Removed"));
        assert!(!text.contains("Values Changed"));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let diff = report("x: [1, 2, 3]\ny: {z: 1}\n", "x: [3]\ny: {z: 2, w: 0}\n");
        assert_eq!(
            render(&diff, OutputFormat::Text).unwrap(),
            render(&diff, OutputFormat::Text).unwrap()
        );
        assert_eq!(render_json(&diff).unwrap(), render_json(&diff).unwrap());
    }

    #[test]
    fn test_json_rendering() {
        let json = render_json(&report("a: 1", "a: 1\nb: 2")).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["identical"], serde_json::json!(false));
        assert_eq!(
            parsed["changes"][0],
            serde_json::json!({"path": ".b", "kind": "item_added", "value": 2})
        );
    }

    #[test]
    fn test_infinities_render_with_sign() {
        let diff = report("x: .inf", "x: -.inf");
        assert_eq!(diff.len(), 1);
        assert_eq!(
            diff.to_string(),
            "Differences found:\n\nValues Changed:\n  ~ .x: .inf -> -.inf"
        );

        let text = report("x: [1]", "x: [1, .nan]").to_string();
        assert!(text.contains("+ .x[1]: .nan"));
    }

    #[test]
    fn test_json_rendering_rejects_non_finite() {
        let err = render_json(&report("x: .inf", "x: -.inf")).unwrap_err();
        assert!(matches!(err, crate::Error::NonFiniteNumber { ref path, .. } if path == ".x"));

        let err = render_json(&report("a: 1", "a: 1\nb: {c: [.nan]}")).unwrap_err();
        assert!(matches!(err, crate::Error::NonFiniteNumber { ref path, .. } if path == ".b.c[0]"));
    }

    #[test]
    fn test_json_rendering_identical() {
        let json = render_json(&DiffReport::new()).unwrap();
        assert_eq!(json, "{\n  \"identical\": true,\n  \"changes\": []\n}");
    }
}
