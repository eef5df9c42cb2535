use crate::domain::error::{MetagraphError, Result};
use crate::domain::fingerprint::{FingerprintMode, FingerprintParams, hash_one};
use crate::domain::vertex::VertexSet;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Directed metagraph edge between two vertex sets.
///
/// Attributes are folded into the invertex at construction: after `with_parts`,
/// `invertex() == invertex ∪ attributes`. The attribute set is still kept on its own
/// because it takes part in equality.
///
/// Equality compares (folded) invertex, outvertex and attributes. The label is
/// descriptive only and is ignored by both `PartialEq` and `Hash`.
#[derive(Debug, Clone)]
pub struct Edge {
    invertex: VertexSet,
    outvertex: VertexSet,
    attributes: Option<VertexSet>,
    label: Option<String>,
}

impl Edge {
    /// Edge without attributes or label.
    pub fn new(invertex: impl Into<VertexSet>, outvertex: impl Into<VertexSet>) -> Result<Self> {
        Self::with_parts(invertex, outvertex, None, None)
    }

    /// Fails with `ValueNull` when `invertex` or `outvertex` is empty.
    pub fn with_parts(
        invertex: impl Into<VertexSet>,
        outvertex: impl Into<VertexSet>,
        attributes: Option<VertexSet>,
        label: Option<String>,
    ) -> Result<Self> {
        let invertex = invertex.into();
        let outvertex = outvertex.into();

        if invertex.is_empty() {
            tracing::debug!(field = "invertex", "rejecting edge with empty invertex");
            return Err(MetagraphError::value_null("invertex"));
        }
        if outvertex.is_empty() {
            tracing::debug!(field = "outvertex", "rejecting edge with empty outvertex");
            return Err(MetagraphError::value_null("outvertex"));
        }

        let invertex = match &attributes {
            Some(attrs) => invertex.union(attrs),
            None => invertex,
        };

        Ok(Self {
            invertex,
            outvertex,
            attributes,
            label,
        })
    }

    /// Input vertices, attributes included.
    pub fn invertex(&self) -> &VertexSet {
        &self.invertex
    }

    pub fn outvertex(&self) -> &VertexSet {
        &self.outvertex
    }

    pub fn attributes(&self) -> Option<&VertexSet> {
        self.attributes.as_ref()
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn fingerprint(&self, params: &FingerprintParams) -> u64 {
        match params.mode {
            FingerprintMode::Consistent => hash_one(self),
            FingerprintMode::Reference => {
                hash_one(&self.label) ^ hash_one(&(&self.invertex, &self.outvertex))
            }
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.invertex == other.invertex
            && self.outvertex == other.outvertex
            && self.attributes == other.attributes
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    // Attributes are already part of the invertex, so equal edges hash equally.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.invertex.hash(state);
        self.outvertex.hash(state);
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge({}, {})", self.invertex, self.outvertex)
    }
}
