//! MogileFS tracker client.
//!
//! `MogileClient` owns the tracker list and a single tracker connection. The
//! first request selects a tracker in two passes over the list: the first pass
//! skips blacklisted trackers, the second tries every tracker. The winning
//! connection is then used for every later request of that client.
//!
//! # Sticky connection
//!
//! Once bound, a client never selects again, even after a transport failure
//! on its connection. A broken connection keeps failing until the client is
//! dropped and a new one is created. Whether a transport failure should force
//! a new selection is an open question; the current behavior is kept as is.
//!
//! # Blame
//!
//! After every request that reached a tracker, the tracker is either
//! blacklisted (write/read failure, unrecognized reply) or marked eligible
//! (`OK` reply, `ERR` reply, broken `OK` payload).
//!
//! # Concurrency
//!
//! One request at a time per client. All I/O is blocking, only connecting is
//! bounded by the dial timeout; a tracker that hangs after accepting the
//! connection blocks the caller. A reply line longer than `MAX_REPLY_LENGTH`
//! is a transport failure.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use mogilefs_client::client::structs::mogile_client::MogileClient;
//!
//! let mut client = MogileClient::new(vec!["10.0.0.1:7001".to_string()], Duration::from_secs(1))
//!     .with_domain("photos");
//! let paths = client.get_paths("cat.jpg", false)?;
//! ```

/// Client state and error enumerations.
pub mod enums;

/// Implementation blocks for the client.
pub mod impls;

/// Client data structures.
pub mod structs;
