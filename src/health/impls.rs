//! Implementation blocks for health types.

pub mod tracker_blacklist;
