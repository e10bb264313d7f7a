use std::collections::HashMap;
use std::time::{Duration, Instant};
use parking_lot::RwLock;

pub struct TrackerBlacklist {
    pub(crate) dead_timeout: Duration,
    pub(crate) entries: RwLock<HashMap<String, Instant>>,
}
