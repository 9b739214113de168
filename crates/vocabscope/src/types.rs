//! # Common Types

/// Type Alias for hash sets in this crate.
///
/// This uses the ``ahash`` hasher; token sets are hashed a lot
/// (once per token per set during subset counting).
pub type VSHashSet<V> = std::collections::HashSet<V, ahash::RandomState>;
