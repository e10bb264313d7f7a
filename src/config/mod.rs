//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the client configuration
//! from TOML files.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml`) contains:
//! - **log_level**: One of `off`, `trace`, `debug`, `info`, `warn`, `error`
//! - **tracker_config**: Tracker addresses, MogileFS domain, dial and dead timeouts
//!
//! # Example
//!
//! ```rust,ignore
//! use mogilefs_client::config::structs::configuration::Configuration;
//!
//! // Load configuration from file, creating a default one when asked to
//! let config = Configuration::load_from_file("config.toml", false)?;
//!
//! // Generate default configuration
//! let default_config = Configuration::init();
//! ```

/// Configuration error enumeration.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving/validation.
pub mod impls;
