//! Client data structures.

/// The tracker client handle.
pub mod mogile_client;
