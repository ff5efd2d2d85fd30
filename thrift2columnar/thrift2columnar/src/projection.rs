//! Field projection: caller-supplied policy selecting which fields survive
//! conversion.

use std::collections::HashSet;
use std::fmt::{Display, Formatter};

use crate::descriptor::ThriftKind;

/// Sequence of field names from the schema root down to the field being
/// considered, rendered as a dotted path (`address.city`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, segment: impl Into<String>) {
        self.0.push(segment.into());
    }

    pub fn pop(&mut self) {
        self.0.pop();
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

/// Decision policy over (field path, kind) consulted at every struct-field
/// boundary.
///
/// Returning `false` prunes the field: it is omitted from the parent's field
/// sequence and its subtree is never visited. Stateless filters may be shared
/// across concurrent conversions.
pub trait ProjectionFilter {
    fn keep(&self, path: &FieldPath, kind: ThriftKind) -> bool;
}

/// Default filter: keeps every field.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepAll;

impl ProjectionFilter for KeepAll {
    fn keep(&self, _path: &FieldPath, _kind: ThriftKind) -> bool {
        true
    }
}

/// Filter that prunes an explicit set of dotted field paths (and with them
/// the entire subtree rooted at each).
#[derive(Debug, Clone, Default)]
pub struct PrunePaths {
    pruned: HashSet<String>,
}

impl PrunePaths {
    pub fn new(paths: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            pruned: paths.into_iter().map(Into::into).collect(),
        }
    }
}

impl ProjectionFilter for PrunePaths {
    fn keep(&self, path: &FieldPath, _kind: ThriftKind) -> bool {
        !self.pruned.contains(&path.to_string())
    }
}
