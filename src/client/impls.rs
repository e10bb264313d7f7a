//! Implementation blocks for client types.

pub mod client_error;
pub mod client_state;
pub mod mogile_client;
pub mod mogile_client_commands;
