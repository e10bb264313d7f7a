//! Common data structures.

/// Free-form error with a message, used on the startup path.
pub mod custom_error;
