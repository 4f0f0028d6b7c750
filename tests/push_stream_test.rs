//! Integration tests for the push stream client against a raw TCP fixture:
//! event delivery over newline-delimited JSON and connection teardown.

use std::io::{ErrorKind, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::{Duration, Instant};

use uniportal::app::{Config, PushClient, PushStatus};
use uniportal::shared::config::AppConfig;
use uniportal::shared::PushEvent;

/// Accept one subscription, send the response head plus `body`, and hand the
/// still-open socket back for inspection.
fn serve_stream(listener: TcpListener, body: &'static [u8]) -> thread::JoinHandle<TcpStream> {
    thread::spawn(move || {
        let (mut socket, _) = listener.accept().unwrap();
        let mut request = [0u8; 1024];
        let _ = socket.read(&mut request).unwrap();
        socket
            .write_all(b"HTTP/1.1 200 OK\r\ncontent-type: application/json\r\n\r\n")
            .unwrap();
        socket.write_all(body).unwrap();
        socket.flush().unwrap();
        socket
    })
}

fn connect_to(addr: std::net::SocketAddr) -> PushClient {
    let config = Config::with_builder(
        AppConfig::builder().server_url(format!("http://{}", addr)),
    )
    .unwrap();
    PushClient::connect(config, "u-1")
}

fn wait_for_connected(push: &PushClient) {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if push.poll_status() == Some(PushStatus::Connected) {
            return;
        }
        assert!(Instant::now() < deadline, "push client never connected");
        thread::sleep(Duration::from_millis(10));
    }
}

#[test]
fn delivers_events_parsed_from_the_stream() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let server = serve_stream(
        listener,
        b"{\"event\":\"reaction_update\",\"post_id\":\"p-1\",\"likes\":3,\"dislikes\":1}\n",
    );

    let mut push = connect_to(addr);
    wait_for_connected(&push);

    let deadline = Instant::now() + Duration::from_secs(5);
    let event = loop {
        if let Some(event) = push.poll_events().into_iter().next() {
            break event;
        }
        assert!(Instant::now() < deadline, "no event arrived");
        thread::sleep(Duration::from_millis(10));
    };
    assert_eq!(
        event,
        PushEvent::ReactionUpdate {
            post_id: "p-1".to_string(),
            likes: 3,
            dislikes: 1,
        }
    );

    push.shutdown();
    drop(server.join().unwrap());
}

#[test]
fn shutdown_closes_an_idle_connection() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    // Response head only; the stream then goes idle with no events.
    let server = serve_stream(listener, b"");

    let mut push = connect_to(addr);
    wait_for_connected(&push);
    let mut socket = server.join().unwrap();

    // Returns only after the subscription thread has exited.
    push.shutdown();

    // The client side of the connection must be gone: the next read sees
    // EOF or a reset, never a still-open socket timing out.
    socket
        .set_read_timeout(Some(Duration::from_secs(5)))
        .unwrap();
    let mut buf = [0u8; 64];
    match socket.read(&mut buf) {
        Ok(0) => {}
        Ok(n) => panic!("expected a closed connection, read {} bytes", n),
        Err(e) if e.kind() == ErrorKind::WouldBlock || e.kind() == ErrorKind::TimedOut => {
            panic!("connection still open after shutdown")
        }
        Err(_) => {}
    }
}
