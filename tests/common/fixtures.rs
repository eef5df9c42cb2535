//! Fixture values shared by the integration tests.

use mgtoolkit::{Edge, Metapath, Triple, VertexSet};

pub fn set(vertices: &[&str]) -> VertexSet {
    vertices.iter().copied().collect()
}

pub fn edge(invertex: &[&str], outvertex: &[&str]) -> Edge {
    Edge::new(set(invertex), set(outvertex)).expect("fixture edge")
}

pub fn labeled_edge(invertex: &[&str], outvertex: &[&str], label: &str) -> Edge {
    Edge::with_parts(set(invertex), set(outvertex), None, Some(label.to_string()))
        .expect("fixture edge")
}

pub fn metapath(source: &[&str], target: &[&str]) -> Metapath {
    Metapath::new(set(source), set(target), vec![]).expect("fixture metapath")
}

/// A small firewall-style policy chain: user → web → app → db.
pub fn policy_chain() -> Vec<Edge> {
    vec![
        Edge::with_parts(
            set(&["user"]),
            set(&["web"]),
            Some(set(&["tcp:443"])),
            Some("ingress".to_string()),
        )
        .expect("fixture edge"),
        edge(&["web"], &["app"]),
        edge(&["app", "secret"], &["db"]),
    ]
}

pub fn chain_triple() -> Triple {
    Triple::new(Some(set(&["secret"])), Some(set(&["audit"])), policy_chain())
}
