//! mgtoolkit library — canonical value types for metagraph edges, triples and metapaths.

pub mod adapters;
pub mod domain;

pub use domain::edge::Edge;
pub use domain::error::{ErrorKind, MetagraphError, Result};
pub use domain::fingerprint::{FingerprintMode, FingerprintParams};
pub use domain::metapath::Metapath;
pub use domain::triple::{EdgeSeq, Triple, TripleBuilder};
pub use domain::vertex::VertexSet;
