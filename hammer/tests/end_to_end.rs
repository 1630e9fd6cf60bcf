//! End-to-end tests over real localhost sockets.

use std::time::Duration;

use tokio::{
    io::AsyncReadExt,
    net::{TcpListener, UdpSocket},
    time::timeout,
};
use tokio_util::sync::CancellationToken;

use hammer::Hammer;
use hammer_payload::{PacketCatalog, Protocol};

const WAIT: Duration = Duration::from_secs(10);

#[tokio::test(flavor = "multi_thread")]
async fn tcp_transport_delivers_the_catalog_in_order() {
    let _ = tracing_subscriber::fmt::try_init();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    let hammer = Hammer::connect(Protocol::Hep, "127.0.0.1", port, "tcp", 500).await.unwrap();
    let (mut stream, _) = listener.accept().await.unwrap();

    let cancel = CancellationToken::new();
    let engine = tokio::spawn(hammer.run(cancel.clone()));

    // One full catalog cycle must arrive byte-for-byte, in enqueue order.
    let catalog = PacketCatalog::build(Protocol::Hep);
    let expected: Vec<u8> =
        catalog.iter().flat_map(|packet| packet.payload().to_vec()).collect();

    let mut received = vec![0u8; expected.len()];
    timeout(WAIT, stream.read_exact(&mut received)).await.unwrap().unwrap();
    assert_eq!(received, expected);

    cancel.cancel();
    timeout(WAIT, engine).await.unwrap().unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn udp_transport_preserves_datagram_boundaries() {
    let _ = tracing_subscriber::fmt::try_init();

    let receiver = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let port = receiver.local_addr().unwrap().port();

    let hammer = Hammer::connect(Protocol::Ipfix, "127.0.0.1", port, "udp", 200).await.unwrap();

    let cancel = CancellationToken::new();
    let engine = tokio::spawn(hammer.run(cancel.clone()));

    // Each packet must arrive as its own datagram, in catalog order.
    let catalog = PacketCatalog::build(Protocol::Ipfix);
    let mut buf = vec![0u8; 9000];
    for expected in &catalog {
        let n = timeout(WAIT, receiver.recv(&mut buf)).await.unwrap().unwrap();
        assert_eq!(&buf[..n], expected.payload());
    }

    cancel.cancel();
    timeout(WAIT, engine).await.unwrap().unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn two_transports_send_independently() {
    let _ = tracing_subscriber::fmt::try_init();

    let receiver = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let port = receiver.local_addr().unwrap().port();

    // Both entries dial the same receiver; each keeps its own queue and
    // socket, so the receiver sees two distinct source ports.
    let hammer = Hammer::connect(Protocol::Hep, "127.0.0.1", port, "udp,udp", 400).await.unwrap();
    assert_eq!(hammer.transport_count(), 2);
    assert_eq!(hammer.rate(), 200);

    let cancel = CancellationToken::new();
    let engine = tokio::spawn(hammer.run(cancel.clone()));

    // The launches are staggered, so the first transport alone covers the
    // opening stretch of traffic. Keep reading until the second source
    // port shows up, with a hard cap so a regression still fails fast.
    let mut buf = vec![0u8; 9000];
    let mut sources = std::collections::HashSet::new();
    for _ in 0..500 {
        let (_, from) = timeout(WAIT, receiver.recv_from(&mut buf)).await.unwrap().unwrap();
        sources.insert(from);
        if sources.len() == 2 {
            break;
        }
    }
    assert_eq!(sources.len(), 2);

    cancel.cancel();
    timeout(WAIT, engine).await.unwrap().unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn cancellation_stops_a_running_hammer() {
    let _ = tracing_subscriber::fmt::try_init();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    // Unthrottled via the library path (the CLI enforces rate >= 1, the
    // engine itself treats 0 as "no pacing").
    let hammer = Hammer::connect(Protocol::Ipfix, "127.0.0.1", port, "tcp", 0).await.unwrap();
    let (mut stream, _) = listener.accept().await.unwrap();

    let cancel = CancellationToken::new();
    let engine = tokio::spawn(hammer.run(cancel.clone()));

    // Let some traffic flow, then pull the plug.
    let mut buf = vec![0u8; 4096];
    timeout(WAIT, stream.read(&mut buf)).await.unwrap().unwrap();
    cancel.cancel();

    timeout(WAIT, engine).await.unwrap().unwrap();
}
