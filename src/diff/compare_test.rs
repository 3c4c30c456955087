//! Tests for structural comparison across documents.

#[cfg(test)]
mod tests {
    use crate::diff::{
        compare, compare_values, Change, CompareOptions, DiffEntry, DiffKind, DiffReport,
        NumberEquality,
    };
    use crate::fieldpath::{Path, PathElement};
    use crate::value::{from_yaml, Value};
    use pretty_assertions::assert_eq;

    fn yaml(text: &str) -> Value {
        from_yaml(text).unwrap()
    }

    /// Helper to create a path from field names.
    fn path(elements: Vec<&str>) -> Path {
        Path::from_elements(elements.into_iter().map(|e| PathElement::field_name(e)).collect())
    }

    fn diff(left: &str, right: &str, ignore_order: bool) -> DiffReport {
        compare_values(&yaml(left), &yaml(right), ignore_order)
    }

    const DOCUMENTS: &[&str] = &[
        "",
        "42",
        "[]",
        "{}",
        "a: [1, 2, {b: null}]\nc: {d: [x, y, x]}\n",
        "- 1\n- 1.5\n- true\n- text\n- [nested, [deeper]]\n- {k: v}\n",
        "nan: .nan\ninf: .inf\n",
    ];

    #[test]
    fn test_reflexive_in_both_modes() {
        for doc in DOCUMENTS {
            let v = yaml(doc);
            assert!(compare_values(&v, &v, false).is_same(), "ordered: {doc:?}");
            assert!(compare_values(&v, &v, true).is_same(), "unordered: {doc:?}");
        }
    }

    /// Every addition one way must be a removal the other way, at the same path.
    fn assert_mirrored(a: &str, b: &str, ignore_order: bool) {
        let forward = diff(a, b, ignore_order);
        let backward = diff(b, a, ignore_order);

        for entry in forward.iter() {
            let mirrored = match &entry.change {
                Change::ItemAdded { value } => Change::ItemRemoved { value: value.clone() },
                Change::ItemRemoved { value } => Change::ItemAdded { value: value.clone() },
                _ => continue,
            };
            assert!(
                backward.iter().any(|e| e.path == entry.path && e.change == mirrored),
                "missing mirror of {entry}"
            );
        }
        assert_eq!(forward.count(DiffKind::ItemAdded), backward.count(DiffKind::ItemRemoved));
        assert_eq!(forward.count(DiffKind::ItemRemoved), backward.count(DiffKind::ItemAdded));
    }

    #[test]
    fn test_added_and_removed_are_symmetric() {
        assert_mirrored(
            "x: 1\nlist: [1, 2, 3]\nnested: {keep: 1, drop: 2}\n",
            "x: 1\ny: 2\nlist: [1]\nnested: {keep: 1}\n",
            false,
        );
    }

    #[test]
    fn test_symmetry_with_trailing_items_at_several_depths() {
        let a = "a: [1, [2, 3, 4], {b: [5, 6]}]\nc: {d: [7, 8, 9]}\n";
        let b = "a: [1, [2]]\nc: {d: [7]}\n";
        assert_mirrored(a, b, false);
        assert_mirrored(a, b, true);

        let report = diff(a, b, false);
        let removed: Vec<String> = report
            .of_kind(DiffKind::ItemRemoved)
            .map(|e| e.path.to_string())
            .collect();
        assert_eq!(
            removed,
            vec![".a[1][1]", ".a[1][2]", ".a[2]", ".c.d[1]", ".c.d[2]"]
        );
        assert_eq!(report.count(DiffKind::ItemAdded), 0);
        assert_eq!(diff(b, a, false).count(DiffKind::ItemAdded), 5);
    }

    #[test]
    fn test_order_sensitive_lists() {
        let report = diff("a: [1, 2]", "a: [2, 1]", false);
        assert_eq!(
            report.entries(),
            &[
                DiffEntry::new(
                    Path::new().field("a").index(0),
                    Change::ValueChanged { old: Value::Int(1), new: Value::Int(2) },
                ),
                DiffEntry::new(
                    Path::new().field("a").index(1),
                    Change::ValueChanged { old: Value::Int(2), new: Value::Int(1) },
                ),
            ]
        );
    }

    #[test]
    fn test_order_insensitive_lists() {
        assert!(diff("a: [1, 2]", "a: [2, 1]", true).is_same());
    }

    #[test]
    fn test_order_insensitive_nested_lists() {
        let left = "- [1, 2]\n- {k: [a, b]}\n";
        let right = "- {k: [b, a]}\n- [2, 1]\n";
        assert!(diff(left, right, true).is_same());
        assert_eq!(diff(left, right, false).count(DiffKind::TypeChanged), 2);
    }

    #[test]
    fn test_order_insensitive_duplicates() {
        let report = diff("[1, 1, 2]", "[1, 2, 2]", true);
        assert_eq!(
            report.entries(),
            &[
                DiffEntry::new(Path::new().index(1), Change::ItemRemoved { value: Value::Int(1) }),
                DiffEntry::new(Path::new().index(2), Change::ItemAdded { value: Value::Int(2) }),
            ]
        );
    }

    #[test]
    fn test_order_insensitive_has_no_partial_matches() {
        // Maps that differ in one field are not paired up.
        let report = diff("[{a: 1, b: 2}]", "[{a: 1, b: 3}]", true);
        assert_eq!(report.count(DiffKind::ItemRemoved), 1);
        assert_eq!(report.count(DiffKind::ItemAdded), 1);
        assert_eq!(report.count(DiffKind::ValueChanged), 0);
    }

    #[test]
    fn test_trailing_list_items() {
        let report = diff("[1, 2, 3]", "[1]", false);
        assert_eq!(
            report.entries(),
            &[
                DiffEntry::new(Path::new().index(1), Change::ItemRemoved { value: Value::Int(2) }),
                DiffEntry::new(Path::new().index(2), Change::ItemRemoved { value: Value::Int(3) }),
            ]
        );

        let report = diff("[1]", "[1, x]", false);
        assert_eq!(
            report.entries(),
            &[DiffEntry::new(
                Path::new().index(1),
                Change::ItemAdded { value: Value::String("x".into()) },
            )]
        );
    }

    #[test]
    fn test_numeric_equality() {
        assert!(diff("x: 1", "x: 1.0", false).is_same());
        assert!(diff("[1, 2.0]", "[2, 1.0]", true).is_same());

        let report = diff("x: 1", "x: 1.5", false);
        assert_eq!(report.count(DiffKind::ValueChanged), 1);
    }

    #[test]
    fn test_booleans_never_equal_numbers() {
        let report = diff("x: 1", "x: true", false);
        assert_eq!(
            report.entries(),
            &[DiffEntry::new(
                path(vec!["x"]),
                Change::TypeChanged { old: Value::Int(1), new: Value::Bool(true) },
            )]
        );
    }

    #[test]
    fn test_strings_never_equal_numbers() {
        let report = diff("x: 1", "x: '1'", false);
        assert_eq!(report.count(DiffKind::TypeChanged), 1);
    }

    #[test]
    fn test_strict_numbers() {
        let options = CompareOptions::new().numbers(NumberEquality::Strict);
        let report = compare(&yaml("x: 1"), &yaml("x: 1.0"), &options);
        assert_eq!(
            report.entries(),
            &[DiffEntry::new(
                path(vec!["x"]),
                Change::ValueChanged { old: Value::Int(1), new: Value::Float(1.0) },
            )]
        );
    }

    #[test]
    fn test_type_mismatch_short_circuits() {
        let report = diff("x: {y: 1}", "x: [1]", false);
        assert_eq!(report.len(), 1);
        let entry = &report.entries()[0];
        assert_eq!(entry.path, path(vec!["x"]));
        assert_eq!(entry.kind(), DiffKind::TypeChanged);
    }

    #[test]
    fn test_container_against_scalar() {
        let report = diff("x: [1, 2]", "x: 12", true);
        assert_eq!(report.len(), 1);
        assert_eq!(report.entries()[0].kind(), DiffKind::TypeChanged);

        let report = diff("x: ~", "x: {}", false);
        assert_eq!(report.entries()[0].kind(), DiffKind::TypeChanged);
    }

    #[test]
    fn test_added_key() {
        let report = diff("a: 1", "a: 1\nb: 2", false);
        assert_eq!(
            report.entries(),
            &[DiffEntry::new(path(vec!["b"]), Change::ItemAdded { value: Value::Int(2) })]
        );
    }

    #[test]
    fn test_removed_key() {
        let report = diff("a: 1\nb: 2", "a: 1", false);
        assert_eq!(
            report.entries(),
            &[DiffEntry::new(path(vec!["b"]), Change::ItemRemoved { value: Value::Int(2) })]
        );
    }

    #[test]
    fn test_key_order_is_ignored() {
        assert!(diff("a: 1\nb: 2", "b: 2\na: 1", false).is_same());
    }

    #[test]
    fn test_empty_documents() {
        assert!(diff("{}", "{}", false).is_same());
        assert!(diff("[]", "[]", true).is_same());
    }

    #[test]
    fn test_root_scalar_change() {
        let report = diff("1", "2", false);
        assert_eq!(report.entries()[0].path, Path::new());
        assert_eq!(report.entries()[0].path.to_string(), ".");
    }

    #[test]
    fn test_deep_paths() {
        let left = "spec:\n  containers:\n    - name: app\n      ports: [80]\n";
        let right = "spec:\n  containers:\n    - name: app\n      ports: [80, 443]\n";
        let report = diff(left, right, false);
        assert_eq!(report.len(), 1);
        assert_eq!(
            report.entries()[0].path.to_string(),
            ".spec.containers[0].ports[1]"
        );
        assert_eq!(report.entries()[0].change, Change::ItemAdded { value: Value::Int(443) });
    }

    #[test]
    fn test_paths_unique_per_kind() {
        let report = diff(
            "a: [1, {b: 2}, 3]\nc: {d: 1, e: [x]}\n",
            "a: [3, {b: 4}]\nc: {d: '1', f: [x]}\n",
            false,
        );
        for kind in DiffKind::ALL {
            let mut paths: Vec<String> = report.of_kind(kind).map(|e| e.path.to_string()).collect();
            let before = paths.len();
            paths.sort();
            paths.dedup();
            assert_eq!(before, paths.len(), "duplicate paths for {kind:?}");
        }
    }

    #[test]
    fn test_inputs_are_untouched() {
        let left = yaml("a: [3, 2, 1]");
        let right = yaml("a: [1, 2]");
        let (left_copy, right_copy) = (left.clone(), right.clone());
        compare_values(&left, &right, true);
        assert_eq!(left, left_copy);
        assert_eq!(right, right_copy);
    }
}
