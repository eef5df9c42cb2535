//! Triple - a group of edges sharing co-input / co-output context.
//!
//! Unlike the set-valued context fields, the edge sequence keeps caller order, and
//! order matters for equality, hashing and the total order used by consumers for
//! canonical sorting.

use crate::domain::edge::Edge;
use crate::domain::error::{MetagraphError, Result};
use crate::domain::fingerprint::{FingerprintMode, FingerprintParams, hash_one};
use crate::domain::vertex::VertexSet;
use std::cmp::Ordering;
use std::fmt;

/// Token used for an absent co-input / co-output set in textual keys.
const NULL_TOKEN: &str = "null";

/// Ordered edge sequence. A single `Edge` converts into a one-element sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct EdgeSeq(Vec<Edge>);

impl EdgeSeq {
    pub fn into_vec(self) -> Vec<Edge> {
        self.0
    }
}

impl From<Edge> for EdgeSeq {
    fn from(edge: Edge) -> Self {
        EdgeSeq(vec![edge])
    }
}

impl From<Vec<Edge>> for EdgeSeq {
    fn from(edges: Vec<Edge>) -> Self {
        EdgeSeq(edges)
    }
}

impl FromIterator<Edge> for EdgeSeq {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        EdgeSeq(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    coinputs: Option<VertexSet>,
    cooutputs: Option<VertexSet>,
    edges: Vec<Edge>,
}

impl Triple {
    /// Absent co-inputs / co-outputs stay absent; they are distinct from empty sets.
    pub fn new(
        coinputs: Option<VertexSet>,
        cooutputs: Option<VertexSet>,
        edges: impl Into<EdgeSeq>,
    ) -> Self {
        Self {
            coinputs,
            cooutputs,
            edges: edges.into().into_vec(),
        }
    }

    pub fn builder() -> TripleBuilder {
        TripleBuilder::default()
    }

    pub fn coinputs(&self) -> Option<&VertexSet> {
        self.coinputs.as_ref()
    }

    pub fn cooutputs(&self) -> Option<&VertexSet> {
        self.cooutputs.as_ref()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Textual ordering key: sorted co-inputs, sorted co-outputs, then the edge list.
    pub fn sort_key(&self) -> String {
        let mut key = set_key(self.coinputs.as_ref());
        key.push_str(&set_key(self.cooutputs.as_ref()));
        key.push('[');
        key.push_str(&join_edges(&self.edges));
        key.push(']');
        key
    }

    pub fn fingerprint(&self, params: &FingerprintParams) -> u64 {
        match params.mode {
            FingerprintMode::Consistent => hash_one(self),
            FingerprintMode::Reference => {
                hash_one(&(&self.coinputs, &self.coinputs)) ^ hash_one(&self.edges)
            }
        }
    }

    // Breaks ties between triples whose textual keys collide, e.g. edges that differ
    // only in how their invertex was split into attributes.
    fn structural_cmp(&self, other: &Self) -> Ordering {
        self.coinputs
            .cmp(&other.coinputs)
            .then_with(|| self.cooutputs.cmp(&other.cooutputs))
            .then_with(|| {
                let lhs = self.edges.iter().map(edge_key);
                let rhs = other.edges.iter().map(edge_key);
                lhs.cmp(rhs)
            })
    }
}

fn set_key(set: Option<&VertexSet>) -> String {
    set.map_or_else(|| NULL_TOKEN.to_string(), VertexSet::sorted_names)
}

fn edge_key(edge: &Edge) -> (&VertexSet, &VertexSet, Option<&VertexSet>) {
    (edge.invertex(), edge.outvertex(), edge.attributes())
}

fn join_edges(edges: &[Edge]) -> String {
    edges
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl Ord for Triple {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key()
            .cmp(&other.sort_key())
            .then_with(|| self.structural_cmp(other))
    }
}

impl PartialOrd for Triple {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coinputs = self
            .coinputs
            .as_ref()
            .map_or_else(|| NULL_TOKEN.to_string(), ToString::to_string);
        let cooutputs = self
            .cooutputs
            .as_ref()
            .map_or_else(|| NULL_TOKEN.to_string(), ToString::to_string);
        if self.edges.is_empty() {
            write!(f, "Triple({}, {})", coinputs, cooutputs)
        } else {
            write!(
                f,
                "Triple({}, {}, {})",
                coinputs,
                cooutputs,
                join_edges(&self.edges)
            )
        }
    }
}

/// Builder for callers whose edge sequence may be missing.
///
/// `build` fails with `ValueNull` (field `edges`) unless `edge` or `edges` was called
/// at least once. An explicitly empty sequence is accepted.
#[derive(Debug, Clone, Default)]
pub struct TripleBuilder {
    coinputs: Option<VertexSet>,
    cooutputs: Option<VertexSet>,
    edges: Option<Vec<Edge>>,
}

impl TripleBuilder {
    pub fn coinputs(mut self, coinputs: impl Into<VertexSet>) -> Self {
        self.coinputs = Some(coinputs.into());
        self
    }

    pub fn cooutputs(mut self, cooutputs: impl Into<VertexSet>) -> Self {
        self.cooutputs = Some(cooutputs.into());
        self
    }

    /// Append one edge.
    pub fn edge(mut self, edge: Edge) -> Self {
        self.edges.get_or_insert_with(Vec::new).push(edge);
        self
    }

    /// Append a sequence of edges, keeping their order.
    pub fn edges(mut self, edges: impl Into<EdgeSeq>) -> Self {
        self.edges
            .get_or_insert_with(Vec::new)
            .extend(edges.into().into_vec());
        self
    }

    pub fn build(self) -> Result<Triple> {
        let Some(edges) = self.edges else {
            tracing::debug!(field = "edges", "rejecting triple without an edge sequence");
            return Err(MetagraphError::value_null("edges"));
        };
        Ok(Triple {
            coinputs: self.coinputs,
            cooutputs: self.cooutputs,
            edges,
        })
    }
}
