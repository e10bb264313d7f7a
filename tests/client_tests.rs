mod common;

use common::FakeTracker;
use mogilefs_client::client::enums::client_error::ClientError;
use mogilefs_client::client::enums::client_state::ClientState;
use mogilefs_client::client::structs::mogile_client::MogileClient;
use mogilefs_client::config::structs::tracker_config::TrackerConfig;
use mogilefs_client::health::health::shared_health;
use mogilefs_client::health::traits::tracker_health::TrackerHealth;
use mogilefs_client::protocol::structs::query_values::QueryValues;

#[test]
fn test_ok_reply_parses_to_mapping() {
    let health = common::create_test_health();
    let tracker = FakeTracker::spawn(vec!["OK a=1&b=2\r\n"]);
    let mut client = common::create_test_client(vec![tracker.address.clone()], &health);

    let reply = client.execute("file_debug", &QueryValues::new()).expect("OK reply should parse");
    assert_eq!(reply.get_all("a"), ["1"]);
    assert_eq!(reply.get_all("b"), ["2"]);
    assert_eq!(reply.len(), 2);
}

#[test]
fn test_err_reply_does_not_blacklist() {
    let health = common::create_test_health();
    let tracker = FakeTracker::spawn(vec!["ERR unknown_key some text\r\n"]);
    let address = tracker.address.clone();
    let mut client = common::create_test_client(vec![address.clone()], &health);

    let error = client.execute("get_paths", &QueryValues::new()).unwrap_err();
    assert!(error.is_application());
    assert_eq!(error.code(), Some("unknown_key"));
    assert_eq!(error.to_string(), "mogilefsd:unknown_key");
    assert!(!health.is_blacklisted(&address), "ERR replies must not blacklist");
}

#[test]
fn test_invalid_utf8_payload_is_rejected() {
    let health = common::create_test_health();
    let tracker = FakeTracker::spawn_raw(vec![b"OK path1=caf\xe9&paths=1\r\n".to_vec()]);
    let address = tracker.address.clone();
    let mut client = common::create_test_client(vec![address.clone()], &health);

    let result = client.execute("get_paths", &QueryValues::new());
    assert!(matches!(result, Err(ClientError::PayloadParse(_))), "got {:?}", result);
    assert!(!health.is_blacklisted(&address), "a broken payload must not blacklist");
}

#[test]
fn test_garbage_reply_blacklists() {
    let health = common::create_test_health();
    let tracker = FakeTracker::spawn(vec!["garbage\r\n"]);
    let address = tracker.address.clone();
    let mut client = common::create_test_client(vec![address.clone()], &health);

    let error = client.execute("get_paths", &QueryValues::new()).unwrap_err();
    assert!(matches!(error, ClientError::MalformedReply { .. }));
    assert!(health.is_blacklisted(&address), "malformed replies must blacklist");
}

#[test]
fn test_failover_to_third_tracker() {
    let health = common::create_test_health();
    let first = common::refused_address();
    let second = common::refused_address();
    let tracker = FakeTracker::spawn(vec!["OK paths=0\r\n"]);
    let third = tracker.address.clone();
    let mut client = common::create_test_client(vec![first.clone(), second.clone(), third.clone()], &health);

    let reply = client.execute("get_paths", &QueryValues::new()).unwrap();
    assert_eq!(reply.get("paths"), Some("0"));
    assert_eq!(client.last_tracker(), Some(third.as_str()));
    assert!(health.is_blacklisted(&first));
    assert!(health.is_blacklisted(&second));
    assert!(!health.is_blacklisted(&third));
}

#[test]
fn test_all_trackers_unreachable() {
    let health = common::create_test_health();
    let first = common::refused_address();
    let last = common::refused_address();
    let mut client = common::create_test_client(vec![first.clone(), last.clone()], &health);

    match client.execute("get_paths", &QueryValues::new()) {
        Err(ClientError::Acquisition { tracker, source }) => {
            assert_eq!(tracker, last);
            assert_eq!(source.kind(), std::io::ErrorKind::ConnectionRefused);
        }
        other => panic!("expected acquisition error, got {:?}", other),
    }
    assert_eq!(client.state(), ClientState::Uninitialized);
    assert!(client.last_tracker().is_none());
}

#[test]
fn test_blacklisted_tracker_is_tried_last() {
    let health = common::create_test_health();
    let preferred = FakeTracker::spawn(vec![]);
    let fallback = FakeTracker::spawn(vec!["OK \r\n"]);
    health.blacklist(&preferred.address);
    let mut client = common::create_test_client(vec![preferred.address.clone(), fallback.address.clone()], &health);

    client.execute("noop", &QueryValues::new()).unwrap();
    assert_eq!(client.last_tracker(), Some(fallback.address.as_str()));
    drop(client);
    assert_eq!(fallback.requests(), vec!["noop \r\n"]);
}

#[test]
fn test_connection_is_sticky() {
    let health = common::create_test_health();
    let tracker = FakeTracker::spawn(vec!["OK n=1\r\n", "OK n=2\r\n"]);
    let other = FakeTracker::spawn(vec![]);
    let address = tracker.address.clone();
    let mut client = common::create_test_client(vec![address.clone(), other.address.clone()], &health);

    assert_eq!(client.execute("first", &QueryValues::new()).unwrap().get("n"), Some("1"));

    // Health changes after binding are not looked at again.
    health.blacklist(&address);
    health.mark_eligible(&other.address);

    assert_eq!(client.execute("second", &QueryValues::new()).unwrap().get("n"), Some("2"));
    assert_eq!(client.last_tracker(), Some(address.as_str()));
    assert!(!health.is_blacklisted(&address), "successful request marks the tracker eligible");

    drop(client);
    assert_eq!(tracker.requests(), vec!["first \r\n", "second \r\n"]);
}

#[test]
fn test_transport_failure_does_not_reselect() {
    let health = common::create_test_health();
    let tracker = FakeTracker::spawn(vec!["OK \r\n"]);
    let standby = FakeTracker::spawn(vec![]);
    let address = tracker.address.clone();
    let mut client = common::create_test_client(vec![address.clone(), standby.address.clone()], &health);

    client.execute("first", &QueryValues::new()).unwrap();
    // The fake tracker hangs up after its only reply.
    let error = client.execute("second", &QueryValues::new()).unwrap_err();
    assert!(matches!(error, ClientError::Transport { ref tracker, .. } if *tracker == address));
    assert!(health.is_blacklisted(&address));

    let error = client.execute("third", &QueryValues::new()).unwrap_err();
    assert!(matches!(error, ClientError::Transport { .. }));
    assert_eq!(client.last_tracker(), Some(address.as_str()));
    assert_eq!(client.state(), ClientState::Bound);
}

#[test]
fn test_teardown_keeps_client_bound() {
    let health = common::create_test_health();
    let tracker = FakeTracker::spawn(vec!["OK \r\n", "OK \r\n"]);
    let address = tracker.address.clone();
    let mut client = common::create_test_client(vec![address.clone()], &health);

    client.execute("first", &QueryValues::new()).unwrap();
    client.teardown();
    assert!(client.is_initialized());

    let error = client.execute("second", &QueryValues::new()).unwrap_err();
    assert!(error.blames_tracker());
    assert!(health.is_blacklisted(&address));
}

#[test]
fn test_release_blames_only_last_tracker() {
    let health = common::create_test_health();
    let tracker = FakeTracker::spawn(vec![]);
    let address = tracker.address.clone();
    let others = vec![common::refused_address(), common::refused_address()];
    let mut trackers = vec![address.clone()];
    trackers.extend(others.iter().cloned());
    let mut client = common::create_test_client(trackers, &health);

    client.acquire().unwrap();
    client.release(true);
    assert_eq!(health.blacklisted(), vec![address]);
}

#[test]
fn test_from_config_uses_shared_health() {
    let unreachable = common::refused_address();
    let config = TrackerConfig {
        trackers: vec![unreachable.clone()],
        domain: String::from("photos"),
        dial_timeout: 300,
        dead_timeout: 5,
    };
    let mut client = MogileClient::from_config(&config);
    assert_eq!(client.domain(), "photos");
    assert_eq!(client.dial_timeout().as_millis(), 300);

    assert!(client.execute("noop", &QueryValues::new()).is_err());
    assert!(shared_health().is_blacklisted(&unreachable));
}

#[test]
fn test_get_paths_end_to_end() {
    let health = common::create_test_health();
    let tracker = FakeTracker::spawn(vec!["OK paths=1&path1=http%3A%2F%2F127.0.0.1%3A7500%2Fdev1%2F0%2F000%2F000%2F0000000007.fid\r\n"]);
    let mut client = common::create_test_client(vec![tracker.address.clone()], &health);

    let paths = client.get_paths("some key", false).unwrap();
    assert_eq!(paths, vec!["http://127.0.0.1:7500/dev1/0/000/000/0000000007.fid"]);
    drop(client);
    assert_eq!(tracker.requests(), vec!["get_paths domain=testdomain&key=some+key&noverify=0\r\n"]);
}
