//! End-to-end tests for the specula relay.
//!
//! These drive the full forwarding path over real localhost sockets:
//! a client sends a datagram to the relay, a stub upstream answers with
//! a canned reply, and the test asserts both legs were relayed verbatim.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::UdpSocket;
use tokio::time::timeout;

use specula_proto::{Message, RecordType, Type};
use specula_relay::{RelayConfig, UdpRelay};

/// ID 0x1234, RD set, one question for example.com A IN.
const QUERY: &[u8] = &[
    0x12, 0x34, 0x01, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0x65, 0x78,
    0x61, 0x6D, 0x70, 0x6C, 0x65, 0x03, 0x63, 0x6F, 0x6D, 0x00, 0x00, 0x01, 0x00, 0x01,
];

const RECV_TIMEOUT: Duration = Duration::from_secs(5);

/// A stub upstream resolver: answers every datagram with a canned reply
/// and hands the received bytes back for inspection.
struct StubUpstream {
    addr: SocketAddr,
    received: tokio::sync::mpsc::UnboundedReceiver<Vec<u8>>,
}

impl StubUpstream {
    async fn start(reply: &'static [u8]) -> Self {
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let addr = socket.local_addr().unwrap();
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 65535];
            loop {
                let Ok((len, src)) = socket.recv_from(&mut buf).await else {
                    break;
                };
                let _ = tx.send(buf[..len].to_vec());
                let _ = socket.send_to(reply, src).await;
            }
        });

        Self { addr, received: rx }
    }

    async fn next_query(&mut self) -> Vec<u8> {
        timeout(RECV_TIMEOUT, self.received.recv())
            .await
            .expect("upstream never saw the query")
            .unwrap()
    }
}

/// Binds a relay in front of the given upstream and runs it.
async fn start_relay(upstream: SocketAddr) -> SocketAddr {
    let config = RelayConfig {
        listen: "127.0.0.1:0".parse().unwrap(),
        upstream,
        upstream_timeout: Duration::from_secs(2),
    };

    let relay = Arc::new(UdpRelay::bind(config).await.unwrap());
    let addr = relay.local_addr();

    tokio::spawn(async move {
        let _ = relay.run().await;
    });

    addr
}

async fn send_and_recv(relay: SocketAddr, payload: &[u8]) -> Vec<u8> {
    let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    client.send_to(payload, relay).await.unwrap();

    let mut buf = vec![0u8; 65535];
    let (len, from) = timeout(RECV_TIMEOUT, client.recv_from(&mut buf))
        .await
        .expect("no reply relayed")
        .unwrap();
    assert_eq!(from, relay);
    buf.truncate(len);
    buf
}

#[tokio::test]
async fn test_query_forwarded_verbatim() {
    // Reply: same ID, QR set, one answer claimed (bytes are opaque to
    // the relay, so any payload works)
    const REPLY: &[u8] = &[
        0x12, 0x34, 0x81, 0x80, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00,
    ];

    let mut upstream = StubUpstream::start(REPLY).await;
    let relay = start_relay(upstream.addr).await;

    let reply = send_and_recv(relay, QUERY).await;

    // The upstream saw the query byte-for-byte
    assert_eq!(upstream.next_query().await, QUERY);
    // The client got the upstream's reply byte-for-byte
    assert_eq!(reply, REPLY);
}

#[tokio::test]
async fn test_malformed_datagram_still_forwarded() {
    // The relay never parses before forwarding; bytes that the decoder
    // rejects must still round-trip untouched.
    const NOISE: &[u8] = &[0xC0, 0xFF, 0xEE];
    const REPLY: &[u8] = &[0x00];

    assert!(Message::parse(NOISE).is_err());

    let mut upstream = StubUpstream::start(REPLY).await;
    let relay = start_relay(upstream.addr).await;

    let reply = send_and_recv(relay, NOISE).await;

    assert_eq!(upstream.next_query().await, NOISE);
    assert_eq!(reply, REPLY);
}

#[tokio::test]
async fn test_concurrent_clients_get_their_own_replies() {
    // Each query uses a fresh outbound socket, so interleaved clients
    // must each get the reply to their own datagram.
    const REPLY: &[u8] = &[0xAB, 0xCD];

    let upstream = StubUpstream::start(REPLY).await;
    let relay = start_relay(upstream.addr).await;

    let mut handles = Vec::new();
    for _ in 0..8 {
        handles.push(tokio::spawn(async move {
            send_and_recv(relay, QUERY).await
        }));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap(), REPLY);
    }
}

#[tokio::test]
async fn test_forwarded_query_decodes() {
    // Sanity: what the relay forwards is exactly what the decoder sees
    const REPLY: &[u8] = &[0x00];

    let mut upstream = StubUpstream::start(REPLY).await;
    let relay = start_relay(upstream.addr).await;

    let _ = send_and_recv(relay, QUERY).await;
    let seen = upstream.next_query().await;

    let message = Message::parse(&seen).unwrap();
    assert_eq!(message.id(), 0x1234);
    assert_eq!(message.questions().len(), 1);
    let question = message.question().unwrap();
    assert_eq!(question.qname.to_string(), "example.com.");
    assert_eq!(question.qtype, Type::Known(RecordType::A));
}
