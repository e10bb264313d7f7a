//! Tracker health bookkeeping.
//!
//! Every tracker address is either eligible or blacklisted. A tracker gets
//! blacklisted when connecting to it fails, when the connection breaks while a
//! request is in flight, or when it answers with a line the protocol does not
//! know. It becomes eligible again once a request it served succeeds, or once
//! its dead timeout has passed. `ERR` replies never count against a tracker.
//!
//! The state is shared by every client of the process through
//! [`health::shared_health`], and clients talk to it through the
//! [`traits::tracker_health::TrackerHealth`] trait so it can be swapped out.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use mogilefs_client::health::structs::tracker_blacklist::TrackerBlacklist;
//! use mogilefs_client::health::traits::tracker_health::TrackerHealth;
//!
//! let blacklist = TrackerBlacklist::new(Duration::from_secs(5));
//! blacklist.blacklist("10.0.0.1:7001");
//! assert!(blacklist.is_blacklisted("10.0.0.1:7001"));
//! ```

/// Process-wide shared health state.
#[allow(clippy::module_inception)]
pub mod health;

/// Implementation blocks for the blacklist.
pub mod impls;

/// Blacklist data structure.
pub mod structs;

/// The health contract clients depend on.
pub mod traits;
