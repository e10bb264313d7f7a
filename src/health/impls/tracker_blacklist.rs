use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};
use log::{info, warn};
use parking_lot::{RwLock, RwLockUpgradableReadGuard};
use crate::config::impls::tracker_config::DEFAULT_DEAD_TIMEOUT_SECS;
use crate::health::structs::tracker_blacklist::TrackerBlacklist;
use crate::health::traits::tracker_health::TrackerHealth;

impl TrackerBlacklist {
    pub fn new(dead_timeout: Duration) -> TrackerBlacklist {
        TrackerBlacklist {
            dead_timeout,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn dead_timeout(&self) -> Duration {
        self.dead_timeout
    }

    /// Addresses blacklisted right now, sorted.
    pub fn blacklisted(&self) -> Vec<String> {
        let entries = self.entries.read();
        let mut addresses: Vec<String> = entries
            .iter()
            .filter(|(_, marked_at)| marked_at.elapsed() < self.dead_timeout)
            .map(|(address, _)| address.clone())
            .collect();
        drop(entries);
        addresses.sort();
        addresses
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

impl Default for TrackerBlacklist {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_DEAD_TIMEOUT_SECS))
    }
}

impl fmt::Debug for TrackerBlacklist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackerBlacklist")
            .field("dead_timeout", &self.dead_timeout)
            .field("blacklisted", &self.blacklisted())
            .finish()
    }
}

impl TrackerHealth for TrackerBlacklist {
    fn is_blacklisted(&self, address: &str) -> bool {
        let entries = self.entries.upgradable_read();
        match entries.get(address) {
            None => false,
            Some(marked_at) if marked_at.elapsed() < self.dead_timeout => true,
            Some(_) => {
                let mut entries = RwLockUpgradableReadGuard::upgrade(entries);
                entries.remove(address);
                drop(entries);
                info!("[HEALTH] Tracker {} passed its dead timeout, eligible again", address);
                false
            }
        }
    }

    fn blacklist(&self, address: &str) {
        self.entries.write().insert(address.to_string(), Instant::now());
        warn!("[HEALTH] Tracker {} blacklisted for {:?}", address, self.dead_timeout);
    }

    fn mark_eligible(&self, address: &str) {
        if self.entries.write().remove(address).is_some() {
            info!("[HEALTH] Tracker {} marked eligible", address);
        }
    }
}
