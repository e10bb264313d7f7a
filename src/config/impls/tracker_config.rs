use std::time::Duration;
use crate::config::structs::tracker_config::TrackerConfig;

pub const DEFAULT_DIAL_TIMEOUT_MS: u64 = 1000;
pub const DEFAULT_DEAD_TIMEOUT_SECS: u64 = 5;

impl TrackerConfig {
    pub fn dial_timeout_duration(&self) -> Duration {
        Duration::from_millis(self.dial_timeout)
    }

    pub fn dead_timeout_duration(&self) -> Duration {
        Duration::from_secs(self.dead_timeout)
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            trackers: vec![String::from("127.0.0.1:7001")],
            domain: String::from("default"),
            dial_timeout: DEFAULT_DIAL_TIMEOUT_MS,
            dead_timeout: DEFAULT_DEAD_TIMEOUT_SECS,
        }
    }
}
