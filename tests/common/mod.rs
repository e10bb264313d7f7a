#![allow(dead_code)]
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use mogilefs_client::client::structs::mogile_client::MogileClient;
use mogilefs_client::health::structs::tracker_blacklist::TrackerBlacklist;
use tempfile::TempDir;

pub type TestHealth = Arc<TrackerBlacklist>;

pub const TEST_DIAL_TIMEOUT: Duration = Duration::from_millis(500);

/// A tracker stand-in serving exactly one connection.
pub struct FakeTracker {
    pub address: String,
    handle: JoinHandle<Vec<String>>,
}

impl FakeTracker {
    /// Answers each request line with the next reply, then hangs up.
    pub fn spawn(replies: Vec<&'static str>) -> FakeTracker {
        Self::spawn_raw(replies.into_iter().map(|reply| reply.as_bytes().to_vec()).collect())
    }

    /// Same as `spawn`, with replies given as raw bytes.
    pub fn spawn_raw(replies: Vec<Vec<u8>>) -> FakeTracker {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind fake tracker");
        let address = listener.local_addr().unwrap().to_string();
        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().expect("Fake tracker accept failed");
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut writer = stream;
            let mut requests = Vec::new();
            for reply in replies {
                let mut line = String::new();
                match reader.read_line(&mut line) {
                    Ok(0) | Err(_) => break,
                    Ok(_) => {}
                }
                requests.push(line);
                if writer.write_all(&reply).is_err() {
                    break;
                }
            }
            requests
        });
        FakeTracker { address, handle }
    }

    /// Request lines received, once the client is gone.
    pub fn requests(self) -> Vec<String> {
        self.handle.join().expect("Fake tracker panicked")
    }
}

/// An address nothing listens on.
pub fn refused_address() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let address = listener.local_addr().unwrap().to_string();
    drop(listener);
    address
}

pub fn create_test_health() -> TestHealth {
    Arc::new(TrackerBlacklist::new(Duration::from_secs(60)))
}

pub fn create_test_client(trackers: Vec<String>, health: &TestHealth) -> MogileClient {
    MogileClient::with_health(trackers, TEST_DIAL_TIMEOUT, health.clone()).with_domain("testdomain")
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}
