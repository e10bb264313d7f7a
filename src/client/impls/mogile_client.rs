use std::fmt;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::net::{Shutdown, TcpStream, ToSocketAddrs};
use std::sync::Arc;
use std::time::Duration;
use log::{debug, info, warn};
use crate::client::enums::client_error::ClientError;
use crate::client::enums::client_state::ClientState;
use crate::client::structs::mogile_client::MogileClient;
use crate::config::structs::tracker_config::TrackerConfig;
use crate::health::health::shared_health;
use crate::health::traits::tracker_health::TrackerHealth;
use crate::protocol::enums::tracker_reply::TrackerReply;
use crate::protocol::protocol::{classify_reply, encode_request, parse_query};
use crate::protocol::structs::query_values::QueryValues;

/// Longest reply line accepted from a tracker, terminator included.
pub const MAX_REPLY_LENGTH: usize = 1024 * 1024;

impl MogileClient {
    /// Client backed by the process-wide tracker health state.
    pub fn new(trackers: Vec<String>, dial_timeout: Duration) -> MogileClient {
        Self::with_health(trackers, dial_timeout, shared_health())
    }

    pub fn with_health(trackers: Vec<String>, dial_timeout: Duration, health: Arc<dyn TrackerHealth>) -> MogileClient {
        MogileClient {
            trackers,
            connection: None,
            last_tracker: None,
            state: ClientState::Uninitialized,
            dial_timeout,
            reconnect_counter: 0,
            domain: String::new(),
            health,
        }
    }

    pub fn from_config(config: &TrackerConfig) -> MogileClient {
        Self::new(config.trackers.clone(), config.dial_timeout_duration())
            .with_domain(config.domain.as_str())
    }

    pub fn with_domain(mut self, domain: &str) -> MogileClient {
        self.domain = domain.to_string();
        self
    }

    pub fn trackers(&self) -> &[String] {
        &self.trackers
    }

    pub fn last_tracker(&self) -> Option<&str> {
        self.last_tracker.as_deref()
    }

    pub fn state(&self) -> ClientState {
        self.state
    }

    pub fn is_initialized(&self) -> bool {
        self.state == ClientState::Bound
    }

    pub fn reconnect_counter(&self) -> u64 {
        self.reconnect_counter
    }

    pub fn dial_timeout(&self) -> Duration {
        self.dial_timeout
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Returns the tracker connection, selecting a tracker on first use.
    ///
    /// A bound client hands back its connection without looking at tracker
    /// health again.
    ///
    /// # Errors
    ///
    /// - `ClientError::NoTrackers` - If the tracker list is empty
    /// - `ClientError::Acquisition` - If no tracker accepted a connection in
    ///   either pass, carrying the last connect error
    pub fn acquire(&mut self) -> Result<&mut BufReader<TcpStream>, ClientError> {
        let connection = match self.connection.take() {
            Some(connection) if self.state == ClientState::Bound => connection,
            _ => self.select_tracker()?,
        };
        Ok(self.connection.insert(connection))
    }

    fn select_tracker(&mut self) -> Result<BufReader<TcpStream>, ClientError> {
        if self.trackers.is_empty() {
            return Err(ClientError::NoTrackers);
        }

        let trackers = self.trackers.clone();
        let mut last_error: Option<(String, io::Error)> = None;

        for ignore_blacklist in [false, true] {
            for tracker in trackers.iter() {
                if !ignore_blacklist && self.health.is_blacklisted(tracker) {
                    debug!("[CLIENT] Skipping blacklisted tracker {}", tracker);
                    continue;
                }

                match dial(tracker, self.dial_timeout) {
                    Ok(stream) => {
                        info!("[CLIENT] Connected to tracker {}", tracker);
                        self.state = ClientState::Bound;
                        self.reconnect_counter = 0;
                        self.last_tracker = Some(tracker.clone());
                        return Ok(BufReader::new(stream));
                    }
                    Err(error) => {
                        warn!("[CLIENT] Connecting to tracker {} failed: {}", tracker, error);
                        self.health.blacklist(tracker);
                        last_error = Some((tracker.clone(), error));
                    }
                }
            }
        }

        match last_error {
            Some((tracker, source)) => Err(ClientError::Acquisition { tracker, source }),
            None => Err(ClientError::NoTrackers),
        }
    }

    /// Records the outcome of a request against the tracker that served it.
    ///
    /// The connection stays open.
    pub fn release(&mut self, had_error: bool) {
        let Some(tracker) = self.last_tracker.as_deref() else {
            return;
        };
        if had_error {
            self.health.blacklist(tracker);
        } else {
            self.health.mark_eligible(tracker);
        }
    }

    /// Shuts the tracker socket down.
    ///
    /// The client stays bound: later requests go to the closed socket and fail
    /// with a transport error.
    pub fn teardown(&mut self) {
        if let Some(connection) = self.connection.as_ref() {
            if let Err(error) = connection.get_ref().shutdown(Shutdown::Both) {
                debug!("[CLIENT] Shutting down tracker connection: {}", error);
            }
        }
    }

    /// Sends one command to a tracker and returns the decoded `OK` payload.
    ///
    /// # Errors
    ///
    /// - `ClientError::NoTrackers` / `ClientError::Acquisition` - No tracker
    ///   connection could be obtained; no tracker is blamed
    /// - `ClientError::Transport` - Writing the request or reading the reply
    ///   failed, or the reply line is too long; the tracker is blacklisted
    /// - `ClientError::MalformedReply` - The reply matched neither `OK` nor
    ///   `ERR`; the tracker is blacklisted
    /// - `ClientError::Application` - The tracker answered `ERR <code>`
    /// - `ClientError::PayloadParse` - The `OK` payload is not valid UTF-8 or not a
    ///   valid query string
    pub fn execute(&mut self, command: &str, args: &QueryValues) -> Result<QueryValues, ClientError> {
        let request = encode_request(command, args);

        let outcome = {
            let connection = self.acquire()?;
            debug!("[CLIENT] >> {}", request.trim_end());
            exchange(connection, &request)
        };
        let tracker = self.last_tracker.clone().unwrap_or_default();

        let (result, blame_tracker) = match outcome {
            Err(source) => (Err(ClientError::Transport { tracker, source }), true),
            Ok(reply) => {
                debug!("[CLIENT] << {}", String::from_utf8_lossy(&reply).trim_end());
                match classify_reply(&reply) {
                    Err(error) => (Err(error), false),
                    Ok(classified) => {
                        let blame_tracker = classified.blames_tracker();
                        let result = match classified {
                            TrackerReply::Ok(payload) => parse_query(&payload),
                            TrackerReply::Err(code) => Err(ClientError::Application { code }),
                            TrackerReply::Malformed(line) => Err(ClientError::MalformedReply { tracker, line }),
                        };
                        (result, blame_tracker)
                    }
                }
            }
        };

        self.release(blame_tracker);
        result
    }
}

impl fmt::Debug for MogileClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MogileClient")
            .field("trackers", &self.trackers)
            .field("connected", &self.connection.is_some())
            .field("last_tracker", &self.last_tracker)
            .field("state", &self.state)
            .field("dial_timeout", &self.dial_timeout)
            .field("reconnect_counter", &self.reconnect_counter)
            .field("domain", &self.domain)
            .finish()
    }
}

fn dial(address: &str, timeout: Duration) -> io::Result<TcpStream> {
    let mut last_error = None;
    for socket_addr in address.to_socket_addrs()? {
        let attempt = if timeout.is_zero() {
            TcpStream::connect(socket_addr)
        } else {
            TcpStream::connect_timeout(&socket_addr, timeout)
        };
        match attempt {
            Ok(stream) => return Ok(stream),
            Err(error) => last_error = Some(error),
        }
    }
    Err(last_error.unwrap_or_else(|| {
        io::Error::new(io::ErrorKind::AddrNotAvailable, format!("{} resolved to no addresses", address))
    }))
}

/// Writes `request` and reads back one raw reply line.
///
/// A line cut short by end of stream is still returned; nothing at all is an
/// `UnexpectedEof` error, and a line running past `MAX_REPLY_LENGTH` without a
/// newline is `InvalidData`.
fn exchange(connection: &mut BufReader<TcpStream>, request: &str) -> io::Result<Vec<u8>> {
    connection.get_mut().write_all(request.as_bytes())?;
    let mut reply = Vec::new();
    let read = connection.by_ref().take(MAX_REPLY_LENGTH as u64).read_until(b'\n', &mut reply)?;
    if read == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "tracker closed the connection"));
    }
    if read == MAX_REPLY_LENGTH && reply.last() != Some(&b'\n') {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("tracker reply exceeds {} bytes", MAX_REPLY_LENGTH),
        ));
    }
    Ok(reply)
}
