//! Recursive structural comparison of two values.

use tracing::{debug, trace};

use super::report::{Change, DiffReport};
use crate::fieldpath::Path;
use crate::value::{Map, Value};

/// NumberEquality decides whether integers and floats can be equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NumberEquality {
    /// `1` and `1.0` are equal.
    #[default]
    Lenient,
    /// Integers and floats are never equal.
    Strict,
}

/// CompareOptions controls how sequences and numbers are compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompareOptions {
    /// Treat sequences as multisets instead of positional lists.
    pub ignore_order: bool,
    pub numbers: NumberEquality,
}

impl CompareOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ignore_order(mut self, ignore_order: bool) -> Self {
        self.ignore_order = ignore_order;
        self
    }

    pub fn numbers(mut self, numbers: NumberEquality) -> Self {
        self.numbers = numbers;
        self
    }
}

/// Computes every structural difference between `left` and `right`.
///
/// Comparison is total: containers of different kinds, or a container
/// against a scalar, produce a single `TypeChanged` entry at that path.
pub fn compare(left: &Value, right: &Value, options: &CompareOptions) -> DiffReport {
    let mut report = DiffReport::new();
    let comparator = Comparator { options: *options };
    comparator.walk(&Path::new(), left, right, &mut report);
    debug!(
        entries = report.len(),
        ignore_order = options.ignore_order,
        "comparison finished"
    );
    report
}

/// Compares with default number handling.
pub fn compare_values(left: &Value, right: &Value, ignore_order: bool) -> DiffReport {
    compare(left, right, &CompareOptions::new().ignore_order(ignore_order))
}

/// Returns true if the two values are structurally equal under `options`.
pub fn equivalent(left: &Value, right: &Value, options: &CompareOptions) -> bool {
    Comparator { options: *options }.equal(left, right)
}

struct Comparator {
    options: CompareOptions,
}

impl Comparator {
    fn walk(&self, path: &Path, left: &Value, right: &Value, report: &mut DiffReport) {
        match (left, right) {
            (Value::Map(l), Value::Map(r)) => self.walk_maps(path, l, r, report),
            (Value::List(l), Value::List(r)) if self.options.ignore_order => {
                self.match_lists(path, l, r, report)
            }
            (Value::List(l), Value::List(r)) => self.walk_lists(path, l, r, report),
            _ => self.compare_leaves(path, left, right, report),
        }
    }

    fn walk_maps(&self, path: &Path, left: &Map, right: &Map, report: &mut DiffReport) {
        for (key, lv) in left.iter() {
            match right.get(key) {
                Some(rv) => self.walk(&path.field(key.as_str()), lv, rv, report),
                None => report.push(path.field(key.as_str()), Change::ItemRemoved { value: lv.clone() }),
            }
        }
        for (key, rv) in right.iter() {
            if !left.has(key) {
                report.push(path.field(key.as_str()), Change::ItemAdded { value: rv.clone() });
            }
        }
    }

    fn walk_lists(&self, path: &Path, left: &[Value], right: &[Value], report: &mut DiffReport) {
        for (i, (lv, rv)) in left.iter().zip(right.iter()).enumerate() {
            self.walk(&path.index(i), lv, rv, report);
        }
        let shared = left.len().min(right.len());
        for (i, lv) in left.iter().enumerate().skip(shared) {
            report.push(path.index(i), Change::ItemRemoved { value: lv.clone() });
        }
        for (i, rv) in right.iter().enumerate().skip(shared) {
            report.push(path.index(i), Change::ItemAdded { value: rv.clone() });
        }
    }

    fn match_lists(&self, path: &Path, left: &[Value], right: &[Value], report: &mut DiffReport) {
        let (removed, added) = self.unmatched(left, right);
        for i in removed {
            report.push(path.index(i), Change::ItemRemoved { value: left[i].clone() });
        }
        for j in added {
            report.push(path.index(j), Change::ItemAdded { value: right[j].clone() });
        }
    }

    /// Pairs each left item with the first unconsumed equal right item.
    /// Returns the indices left over on each side.
    fn unmatched(&self, left: &[Value], right: &[Value]) -> (Vec<usize>, Vec<usize>) {
        let mut consumed = vec![false; right.len()];
        let mut removed = Vec::new();
        for (i, item) in left.iter().enumerate() {
            match (0..right.len()).find(|&j| !consumed[j] && self.equal(item, &right[j])) {
                Some(j) => consumed[j] = true,
                None => removed.push(i),
            }
        }
        let added = consumed
            .iter()
            .enumerate()
            .filter(|(_, used)| !**used)
            .map(|(j, _)| j)
            .collect();
        (removed, added)
    }

    fn compare_leaves(&self, path: &Path, left: &Value, right: &Value, report: &mut DiffReport) {
        if self.equal(left, right) {
            return;
        }
        let (old, new) = (left.clone(), right.clone());
        if left.kind() == right.kind() {
            trace!(%path, "value changed");
            report.push(path.clone(), Change::ValueChanged { old, new });
        } else {
            trace!(%path, from = %left.kind(), to = %right.kind(), "type changed");
            report.push(path.clone(), Change::TypeChanged { old, new });
        }
    }

    fn equal(&self, left: &Value, right: &Value) -> bool {
        match (left, right) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::Int(i), Value::Float(f)) | (Value::Float(f), Value::Int(i)) => {
                self.options.numbers == NumberEquality::Lenient && int_equals_float(*i, *f)
            }
            (Value::String(a), Value::String(b)) => a == b,
            (Value::List(a), Value::List(b)) => {
                if a.len() != b.len() {
                    false
                } else if self.options.ignore_order {
                    let (removed, added) = self.unmatched(a, b);
                    removed.is_empty() && added.is_empty()
                } else {
                    a.iter().zip(b.iter()).all(|(x, y)| self.equal(x, y))
                }
            }
            (Value::Map(a), Value::Map(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .all(|(k, v)| b.get(k).is_some_and(|w| self.equal(v, w)))
            }
            _ => false,
        }
    }
}

/// Exact numeric equality between an integer and a float.
fn int_equals_float(i: i64, f: f64) -> bool {
    // 2^63 is exactly representable; anything at or past it is out of range.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    f.is_finite() && f.fract() == 0.0 && (-LIMIT..LIMIT).contains(&f) && f as i64 == i
}
