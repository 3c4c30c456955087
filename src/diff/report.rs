//! Diff report types.

use serde::Serialize;

use crate::fieldpath::Path;
use crate::value::Value;

/// DiffKind is the category of a single difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffKind {
    ValueChanged,
    TypeChanged,
    ItemAdded,
    ItemRemoved,
}

impl DiffKind {
    /// Every kind, in display order.
    pub const ALL: [DiffKind; 4] = [
        DiffKind::ValueChanged,
        DiffKind::TypeChanged,
        DiffKind::ItemAdded,
        DiffKind::ItemRemoved,
    ];

    /// Heading used when printing a group of entries.
    pub fn title(&self) -> &'static str {
        match self {
            DiffKind::ValueChanged => "Values Changed",
            DiffKind::TypeChanged => "Types Changed",
            DiffKind::ItemAdded => "Items Added",
            DiffKind::ItemRemoved => "Items Removed",
        }
    }
}

/// Change describes what differs at a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Change {
    /// Both sides hold values of the same kind that are not equal.
    ValueChanged { old: Value, new: Value },
    /// The two sides hold values of different kinds.
    TypeChanged { old: Value, new: Value },
    /// Only the right-hand document has this item.
    ItemAdded { value: Value },
    /// Only the left-hand document has this item.
    ItemRemoved { value: Value },
}

impl Change {
    pub fn kind(&self) -> DiffKind {
        match self {
            Change::ValueChanged { .. } => DiffKind::ValueChanged,
            Change::TypeChanged { .. } => DiffKind::TypeChanged,
            Change::ItemAdded { .. } => DiffKind::ItemAdded,
            Change::ItemRemoved { .. } => DiffKind::ItemRemoved,
        }
    }
}

/// DiffEntry is one difference at one path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffEntry {
    pub path: Path,
    #[serde(flatten)]
    pub change: Change,
}

impl DiffEntry {
    pub fn new(path: Path, change: Change) -> Self {
        DiffEntry { path, change }
    }

    pub fn kind(&self) -> DiffKind {
        self.change.kind()
    }
}

/// DiffReport holds every difference found by one comparison.
///
/// A path appears at most once per kind. If the report is empty the two
/// documents were structurally equivalent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffReport {
    entries: Vec<DiffEntry>,
}

impl DiffReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        DiffReport {
            entries: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, path: Path, change: Change) {
        self.entries.push(DiffEntry::new(path, change));
    }

    /// Returns true if there are no differences.
    pub fn is_same(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiffEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[DiffEntry] {
        &self.entries
    }

    /// Returns the entries of one kind, in the order they were found.
    pub fn of_kind(&self, kind: DiffKind) -> impl Iterator<Item = &DiffEntry> {
        self.entries.iter().filter(move |e| e.kind() == kind)
    }

    /// Returns the entries recorded at `path`.
    pub fn at(&self, path: &Path) -> Vec<&DiffEntry> {
        self.entries.iter().filter(|e| &e.path == path).collect()
    }

    pub fn count(&self, kind: DiffKind) -> usize {
        self.of_kind(kind).count()
    }

    /// Returns true if any items were added.
    pub fn has_added(&self) -> bool {
        self.of_kind(DiffKind::ItemAdded).next().is_some()
    }

    /// Returns true if any items were removed.
    pub fn has_removed(&self) -> bool {
        self.of_kind(DiffKind::ItemRemoved).next().is_some()
    }

    /// Returns true if any values or types changed.
    pub fn has_modified(&self) -> bool {
        self.entries.iter().any(|e| {
            matches!(e.kind(), DiffKind::ValueChanged | DiffKind::TypeChanged)
        })
    }
}

impl IntoIterator for DiffReport {
    type Item = DiffEntry;
    type IntoIter = std::vec::IntoIter<DiffEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a DiffReport {
    type Item = &'a DiffEntry;
    type IntoIter = std::slice::Iter<'a, DiffEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
