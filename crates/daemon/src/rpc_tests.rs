use super::*;

use std::path::PathBuf;
use std::thread;

use perch_protocol::BrowseRequest;
use tempfile::tempdir;

fn test_config() -> Arc<DaemonConfig> {
    Arc::new(DaemonConfig {
        socket_path: PathBuf::from("/tmp/perch-test.sock"),
    })
}

/// Drive handle_client over a socketpair: one request in, one
/// response out, connection closed.
fn serve_one(request: DaemonRequest) -> DaemonResponse {
    let (mut client, server) = UnixStream::pair().expect("socketpair");
    let config = test_config();

    let handle = thread::spawn(move || handle_client(server, config));

    write_message(&mut client, &request).expect("write request");
    let response: DaemonResponse = read_message(&mut client).expect("read response");

    handle
        .join()
        .expect("handler thread")
        .expect("handler result");
    response
}

#[test]
fn ping_yields_pong() {
    assert!(matches!(
        serve_one(DaemonRequest::Ping),
        DaemonResponse::Pong
    ));
}

#[test]
fn status_reports_daemon_configuration() {
    match serve_one(DaemonRequest::Status) {
        DaemonResponse::Status(status) => {
            assert!(status.contains("perch-test.sock"), "got status {status:?}");
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

#[test]
fn browse_round_trips_over_a_socket() {
    let tmp = tempdir().expect("create temp dir");
    let root = tmp.path();

    fs::create_dir(root.join("sub")).expect("create sub");
    fs::write(root.join("a.txt"), b"a").expect("write a.txt");

    let request = DaemonRequest::Browse(BrowseRequest {
        request_id: 5,
        path: root.to_string_lossy().into_owned(),
    });

    match serve_one(request) {
        DaemonResponse::Listing(listing) => {
            assert_eq!(listing.request_id, 5);

            let names: Vec<_> = listing.entries.iter().map(|e| e.name.as_str()).collect();
            assert_eq!(names, vec!["sub", "a.txt"]);
        }
        other => panic!("expected Listing, got {other:?}"),
    }
}
