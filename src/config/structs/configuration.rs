use serde::{Deserialize, Serialize};
use crate::config::structs::tracker_config::TrackerConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub log_level: String,
    pub tracker_config: TrackerConfig
}
