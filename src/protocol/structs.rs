//! Protocol data structures.

/// Ordered key to values multimap.
pub mod query_values;
