use std::sync::Arc;
use std::time::Duration;
use log::warn;
use once_cell::sync::OnceCell;
use crate::health::structs::tracker_blacklist::TrackerBlacklist;

static SHARED_HEALTH: OnceCell<Arc<TrackerBlacklist>> = OnceCell::new();

/// The blacklist every client of this process shares unless one is injected.
///
/// Created with the default dead timeout unless
/// [`configure_shared_health`] ran first.
pub fn shared_health() -> Arc<TrackerBlacklist> {
    Arc::clone(SHARED_HEALTH.get_or_init(|| Arc::new(TrackerBlacklist::default())))
}

/// Sets the dead timeout of the shared blacklist. Only the first call before
/// any client touched the shared blacklist takes effect.
pub fn configure_shared_health(dead_timeout: Duration) -> bool {
    let configured = SHARED_HEALTH.set(Arc::new(TrackerBlacklist::new(dead_timeout))).is_ok();
    if !configured {
        warn!("[HEALTH] Shared tracker blacklist already in use, keeping its dead timeout");
    }
    configured
}
