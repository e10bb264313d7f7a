//! Client enumerations.

/// Every failure a request can end with.
pub mod client_error;

/// Whether the client already committed to a tracker.
pub mod client_state;
