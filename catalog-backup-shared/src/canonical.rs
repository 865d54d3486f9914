//! Explicit identity keys for structural deduplication.

use std::hash::Hash;

/// A record whose structural identity can be expressed as an owned key.
///
/// Two records are the same entry exactly when their keys are equal. Keys are
/// built from a fixed field order, never from serialized output.
pub trait Canonical {
    type Key: Hash + Eq;

    fn canonical_key(&self) -> Self::Key;
}
