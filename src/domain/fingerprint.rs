use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Which hash combination a fingerprint uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FingerprintMode {
    /// Hashes exactly the fields that take part in equality (same as `Hash`).
    #[default]
    Consistent,
    /// Legacy combination kept for parity with older deduplication keys.
    ///
    /// Edge: `hash(label) ^ hash((invertex, outvertex))`.
    /// Triple: `hash((coinputs, coinputs)) ^ hash(edges)`.
    /// Neither agrees with equality; never use it for set membership.
    Reference,
}

/// Fingerprint parameters for [`Edge::fingerprint`](crate::Edge::fingerprint) and
/// [`Triple::fingerprint`](crate::Triple::fingerprint).
#[derive(Debug, Clone, Default)]
pub struct FingerprintParams {
    pub mode: FingerprintMode,
}

impl FingerprintParams {
    pub fn consistent() -> Self {
        Self {
            mode: FingerprintMode::Consistent,
        }
    }

    pub fn reference() -> Self {
        Self {
            mode: FingerprintMode::Reference,
        }
    }
}

/// Hash a single value with the std hasher (fixed keys, stable within a build).
pub(crate) fn hash_one<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}
