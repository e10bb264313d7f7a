//! Implementation blocks for protocol types.

pub mod query_values;
pub mod tracker_reply;
