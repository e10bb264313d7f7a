//! Common utilities and shared functionality.
//!
//! This module contains helper functions and data structures used across
//! the client, the configuration layer and the command line binary.
//!
//! # Utilities
//!
//! - Log level parsing
//! - Logging setup
//!
//! # Data Structures
//!
//! - `CustomError` - Free-form error used on the startup path
//!
//! # Example
//!
//! ```rust,ignore
//! use mogilefs_client::common::common::setup_logging;
//! use mogilefs_client::config::structs::configuration::Configuration;
//!
//! let config = Configuration::init();
//! setup_logging(&config);
//! ```

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
