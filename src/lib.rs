//! # MogileFS Tracker Client
//!
//! A blocking client for the line-oriented MogileFS tracker protocol, built to
//! keep working while individual trackers of a replicated set are down.
//!
//! ## Overview
//!
//! A client is created with an ordered list of tracker addresses. The first
//! request picks a tracker: trackers currently blacklisted are skipped, and if
//! none of the others accepts a connection every tracker is tried once more
//! regardless of its state. The connection that wins is kept for the lifetime
//! of the client.
//!
//! Each request is a single line (`<COMMAND> <urlencoded args>\r\n`) answered
//! by a single line, which is either `OK <urlencoded values>`, `ERR <code> ...`
//! or a protocol violation. Transport failures and protocol violations
//! blacklist the tracker; `ERR` replies do not.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mogilefs_client::client::structs::mogile_client::MogileClient;
//! use mogilefs_client::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! let mut client = MogileClient::from_config(&config.tracker_config);
//! for path in client.get_paths("cat.jpg", false)? {
//!     println!("{}", path);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`client`] - Tracker selection, request execution and command builders
//! - [`common`] - Logging setup and shared helpers
//! - [`config`] - Configuration management and TOML parsing
//! - [`health`] - Tracker blacklist shared by every client of the process
//! - [`protocol`] - Request encoding, reply classification and query codec
//! - [`structs`] - CLI argument parsing

/// Tracker client module.
///
/// Owns the tracker list and the single tracker connection, selects a tracker
/// on first use and turns one command into one request/reply exchange.
pub mod client;

/// Common utilities and shared functionality.
pub mod common;

/// Configuration management module.
///
/// Loads and validates `config.toml`: log level, tracker addresses, domain,
/// dial timeout and dead timeout.
pub mod config;

/// Tracker health bookkeeping.
///
/// Decides which trackers are eligible for selection and records the outcome
/// of each request.
pub mod health;

/// MogileFS tracker wire protocol.
pub mod protocol;

/// CLI argument parsing.
pub mod structs;
