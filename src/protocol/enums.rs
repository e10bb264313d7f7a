//! Protocol enumerations.

/// One classified reply line.
pub mod tracker_reply;
