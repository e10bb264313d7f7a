//! Health traits.

/// Eligibility contract used by the tracker selector.
pub mod tracker_health;
