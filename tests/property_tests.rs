//! Property-based tests for the metagraph value types.
//!
//! These tests verify invariants that consumers rely on:
//! - Attribute folding and order-independent construction
//! - Hash / equality agreement
//! - Triple ordering is a strict weak order consistent with equality
//! - Dominance is a partial order

use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use mgtoolkit::{Edge, Metapath, Triple, VertexSet};
use proptest::prelude::*;

fn arb_vertex() -> impl Strategy<Value = String> {
    "[a-e]{1,2}".prop_map(|s| s)
}

fn arb_vertices() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_vertex(), 1..5)
}

fn arb_set() -> impl Strategy<Value = VertexSet> {
    arb_vertices().prop_map(VertexSet::from)
}

fn arb_edge() -> impl Strategy<Value = Edge> {
    (arb_set(), arb_set(), prop::option::of(arb_set())).prop_map(|(i, o, a)| {
        Edge::with_parts(i, o, a, None).expect("non-empty sets")
    })
}

fn arb_triple() -> impl Strategy<Value = Triple> {
    (
        prop::option::of(arb_set()),
        prop::option::of(arb_set()),
        prop::collection::vec(arb_edge(), 0..3),
    )
        .prop_map(|(ci, co, edges)| Triple::new(ci, co, edges))
}

fn arb_metapath() -> impl Strategy<Value = Metapath> {
    (arb_set(), arb_set()).prop_map(|(s, t)| Metapath::new(s, t, vec![]).expect("non-empty sets"))
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

mod edge_props {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn invertex_is_union_of_inputs_and_attributes(
            inv in arb_vertices(),
            out in arb_vertices(),
            attrs in arb_vertices(),
        ) {
            let edge = Edge::with_parts(
                inv.clone(),
                out,
                Some(VertexSet::from(attrs.clone())),
                None,
            ).unwrap();
            let expected: VertexSet = inv.into_iter().chain(attrs).collect();
            prop_assert_eq!(edge.invertex(), &expected);
        }

        #[test]
        fn construction_ignores_input_order(inv in arb_vertices(), out in arb_vertices()) {
            let mut inv_rev = inv.clone();
            inv_rev.reverse();
            let mut out_rev = out.clone();
            out_rev.reverse();

            let a = Edge::new(inv, out).unwrap();
            let b = Edge::new(inv_rev, out_rev).unwrap();
            prop_assert_eq!(&a, &b);
            prop_assert_eq!(hash_of(&a), hash_of(&b));
            prop_assert_eq!(a.to_string(), b.to_string());
        }

        #[test]
        fn equal_edges_hash_equal(a in arb_edge(), b in arb_edge()) {
            if a == b {
                prop_assert_eq!(hash_of(&a), hash_of(&b));
            }
        }
    }
}

mod triple_props {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn ordering_is_transitive(a in arb_triple(), b in arb_triple(), c in arb_triple()) {
            let mut sorted = [a, b, c];
            sorted.sort();
            prop_assert!(sorted[0] <= sorted[1]);
            prop_assert!(sorted[1] <= sorted[2]);
            prop_assert!(sorted[0] <= sorted[2]);
            if sorted[0] < sorted[1] && sorted[1] < sorted[2] {
                prop_assert!(sorted[0] < sorted[2]);
            }
        }

        #[test]
        fn ordering_is_antisymmetric(a in arb_triple(), b in arb_triple()) {
            prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
        }

        #[test]
        fn ordering_agrees_with_equality(a in arb_triple(), b in arb_triple()) {
            prop_assert_eq!(a.cmp(&b) == Ordering::Equal, a == b);
            if a == b {
                prop_assert_eq!(hash_of(&a), hash_of(&b));
            }
        }

        #[test]
        fn distinct_sort_keys_decide_order(a in arb_triple(), b in arb_triple()) {
            let (ka, kb) = (a.sort_key(), b.sort_key());
            if ka != kb {
                prop_assert_eq!(a.cmp(&b), ka.cmp(&kb));
            }
        }
    }
}

mod metapath_props {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn dominance_is_reflexive(p in arb_metapath()) {
            prop_assert!(p.dominates(&p));
        }

        #[test]
        fn dominance_is_transitive(p in arb_metapath(), q in arb_metapath(), r in arb_metapath()) {
            if p.dominates(&q) && q.dominates(&r) {
                prop_assert!(p.dominates(&r));
            }
        }

        #[test]
        fn mutual_dominance_means_same_endpoints(p in arb_metapath(), q in arb_metapath()) {
            if p.dominates(&q) && q.dominates(&p) {
                prop_assert_eq!(p.source(), q.source());
                prop_assert_eq!(p.target(), q.target());
            }
        }
    }
}
