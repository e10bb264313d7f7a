use std::io::BufReader;
use std::net::TcpStream;
use std::sync::Arc;
use std::time::Duration;
use crate::client::enums::client_state::ClientState;
use crate::health::traits::tracker_health::TrackerHealth;

pub struct MogileClient {
    pub(crate) trackers: Vec<String>,
    pub(crate) connection: Option<BufReader<TcpStream>>,
    pub(crate) last_tracker: Option<String>,
    pub(crate) state: ClientState,
    pub(crate) dial_timeout: Duration,
    pub(crate) reconnect_counter: u64,
    pub(crate) domain: String,
    pub(crate) health: Arc<dyn TrackerHealth>,
}
