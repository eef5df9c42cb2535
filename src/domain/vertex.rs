//! Canonical vertex sets.
//!
//! Every vertex collection in the metagraph layer goes through [`VertexSet`]: duplicates
//! are dropped and element order is forgotten at construction, so equality, hashing,
//! ordering and textual form only depend on set contents.

use std::collections::{BTreeSet, HashSet};
use std::fmt;

/// Vertex identifier
pub type VertexId = String;

/// Immutable, duplicate-free set of vertex names.
///
/// Only collections convert into a `VertexSet`; a bare string does not:
///
/// ```compile_fail
/// use mgtoolkit::{Edge, VertexSet};
///
/// let _ = Edge::new("a", VertexSet::from(["x"]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexSet(BTreeSet<VertexId>);

impl VertexSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, vertex: &str) -> bool {
        self.0.contains(vertex)
    }

    /// Vertices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &VertexId> {
        self.0.iter()
    }

    pub fn is_subset(&self, other: &VertexSet) -> bool {
        self.0.is_subset(&other.0)
    }

    pub fn is_superset(&self, other: &VertexSet) -> bool {
        self.0.is_superset(&other.0)
    }

    pub fn union(&self, other: &VertexSet) -> VertexSet {
        VertexSet(self.0.union(&other.0).cloned().collect())
    }

    /// Sorted list form, `[a, b]`, used as an ordering key.
    pub fn sorted_names(&self) -> String {
        format!("[{}]", self.joined())
    }

    fn joined(&self) -> String {
        self.0
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for VertexSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.joined())
    }
}

impl<S: Into<VertexId>> FromIterator<S> for VertexSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        VertexSet(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<VertexId>, const N: usize> From<[S; N]> for VertexSet {
    fn from(vertices: [S; N]) -> Self {
        vertices.into_iter().collect()
    }
}

impl<S: Into<VertexId>> From<Vec<S>> for VertexSet {
    fn from(vertices: Vec<S>) -> Self {
        vertices.into_iter().collect()
    }
}

impl From<BTreeSet<VertexId>> for VertexSet {
    fn from(vertices: BTreeSet<VertexId>) -> Self {
        VertexSet(vertices)
    }
}

impl From<HashSet<VertexId>> for VertexSet {
    fn from(vertices: HashSet<VertexId>) -> Self {
        vertices.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a VertexSet {
    type Item = &'a VertexId;
    type IntoIter = std::collections::btree_set::Iter<'a, VertexId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for VertexSet {
    type Item = VertexId;
    type IntoIter = std::collections::btree_set::IntoIter<VertexId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
