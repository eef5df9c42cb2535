use crate::domain::edge::Edge;
use crate::domain::error::{MetagraphError, Result};
use crate::domain::vertex::VertexSet;
use std::fmt;

/// End-to-end path from a source vertex set to a target vertex set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Metapath {
    source: VertexSet,
    target: VertexSet,
    edge_list: Vec<Edge>,
}

impl Metapath {
    /// Fails with `ValueNull` when `source` or `target` is empty.
    pub fn new(
        source: impl Into<VertexSet>,
        target: impl Into<VertexSet>,
        edge_list: Vec<Edge>,
    ) -> Result<Self> {
        let source = source.into();
        let target = target.into();

        if source.is_empty() {
            tracing::debug!(field = "source", "rejecting metapath with empty source");
            return Err(MetagraphError::value_null("source"));
        }
        if target.is_empty() {
            tracing::debug!(field = "target", "rejecting metapath with empty target");
            return Err(MetagraphError::value_null("target"));
        }

        Ok(Self {
            source,
            target,
            edge_list,
        })
    }

    pub fn source(&self) -> &VertexSet {
        &self.source
    }

    pub fn target(&self) -> &VertexSet {
        &self.target
    }

    pub fn edge_list(&self) -> &[Edge] {
        &self.edge_list
    }

    /// True iff `self.source ⊆ other.source` and `other.target ⊆ self.target`:
    /// this path needs no more inputs than `other` and delivers at least its outputs.
    ///
    /// A partial order: reflexive, not symmetric, and some pairs are incomparable.
    pub fn dominates(&self, other: &Metapath) -> bool {
        self.source.is_subset(&other.source) && other.target.is_subset(&self.target)
    }

    /// [`dominates`](Self::dominates) for callers holding an optional metapath.
    pub fn try_dominates(&self, other: Option<&Metapath>) -> Result<bool> {
        let Some(other) = other else {
            tracing::debug!(field = "metapath", "dominance check against a missing metapath");
            return Err(MetagraphError::value_null("metapath"));
        };
        Ok(self.dominates(other))
    }

    /// Neither path dominates the other.
    pub fn is_incomparable(&self, other: &Metapath) -> bool {
        !self.dominates(other) && !other.dominates(self)
    }
}

impl fmt::Display for Metapath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Metapath({{ source: {}, target: {}", self.source, self.target)?;
        for edge in &self.edge_list {
            write!(f, ", {}", edge)?;
        }
        write!(f, " }})")
    }
}
