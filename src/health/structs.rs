//! Health data structures.

/// Timestamped tracker blacklist with a dead timeout.
pub mod tracker_blacklist;
