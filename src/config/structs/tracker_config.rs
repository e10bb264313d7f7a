use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Tracker addresses as `host:port`, tried in this order.
    pub trackers: Vec<String>,
    /// MogileFS domain the command builders send along.
    pub domain: String,
    /// Connect timeout per tracker, in milliseconds.
    pub dial_timeout: u64,
    /// Seconds a failing tracker stays blacklisted.
    pub dead_timeout: u64,
}
