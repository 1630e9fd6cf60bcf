use std::time::Duration;

use tokio::{sync::mpsc, task::JoinSet, time::sleep};
use tokio_util::sync::CancellationToken;
use tracing::info;

use hammer_payload::{PacketCatalog, Protocol};
use hammer_transport::{Connection, Connector, Error, NetConnector};

/// Fixed capacity of every transport's outbound queue. A full queue blocks
/// its producer; packets are never shed.
pub const QUEUE_CAPACITY: usize = 1_000_000;

/// Delay between launching consecutive transports, to avoid a simultaneous
/// connection burst at startup.
const SPAWN_STAGGER: Duration = Duration::from_millis(200);

/// The orchestrator: owns all transports and splits the aggregate rate
/// across them.
#[derive(Debug)]
pub struct Hammer {
    protocol: Protocol,
    /// Per-transport rate in packets per second (0 = unthrottled).
    rate: u32,
    transports: Vec<(NetConnector, Connection)>,
}

impl Hammer {
    /// Dials every requested transport up front. Any dial failure —
    /// including an unsupported transport name — aborts the whole
    /// construction; there is no partial start.
    pub async fn connect(
        protocol: Protocol,
        host: &str,
        port: u16,
        transports: &str,
        rate: u32,
    ) -> Result<Self, Error> {
        let names = split_transports(transports);
        let rate = per_transport_rate(rate, names.len());

        let mut dialed = Vec::with_capacity(names.len());
        for name in names {
            let connector = NetConnector::new(name, host, port);
            let conn = connector.connect().await?;
            dialed.push((connector, conn));
        }

        Ok(Self { protocol, rate, transports: dialed })
    }

    pub fn transport_count(&self) -> usize {
        self.transports.len()
    }

    /// The per-transport packet rate derived from the aggregate.
    pub fn rate(&self) -> u32 {
        self.rate
    }

    /// Builds the shared catalog, launches one writer/producer pair per
    /// transport with a short stagger in between, and blocks until all
    /// tasks finish — which they only do once `cancel` fires.
    pub async fn run(self, cancel: CancellationToken) {
        let catalog = PacketCatalog::build(self.protocol);
        info!(
            protocol = %self.protocol,
            packets = catalog.len(),
            transports = self.transports.len(),
            rate = self.rate,
            "starting transports"
        );

        let mut tasks = JoinSet::new();
        for (connector, conn) in self.transports {
            let (tx, rx) = mpsc::channel(QUEUE_CAPACITY);

            let sender = crate::Sender::new(connector, conn, rx);
            tasks.spawn(sender.run(cancel.clone()));

            sleep(SPAWN_STAGGER).await;

            let producer = crate::Producer::new(catalog.clone(), tx, self.rate);
            tasks.spawn(producer.run(cancel.clone()));
        }

        while tasks.join_next().await.is_some() {}
    }
}

/// Normalizes a transport list: lowercased, all whitespace stripped, split
/// on commas. An empty or all-whitespace input yields a single empty name,
/// which later fails to dial as an unsupported transport.
fn split_transports(input: &str) -> Vec<String> {
    input
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .split(',')
        .map(str::to_string)
        .collect()
}

/// Splits the aggregate rate evenly across transports. Integer floor
/// division: the remainder is dropped, not redistributed.
fn per_transport_rate(aggregate: u32, transport_count: usize) -> u32 {
    aggregate / transport_count as u32
}

#[cfg(test)]
mod tests {
    use tokio::net::UdpSocket;

    use super::*;

    #[test]
    fn transport_lists_normalize_case_and_whitespace() {
        assert_eq!(split_transports("tcp,udp"), ["tcp", "udp"]);
        assert_eq!(split_transports(" TCP , Udp"), ["tcp", "udp"]);
        assert_eq!(split_transports("\tTLS\n"), ["tls"]);
    }

    #[test]
    fn empty_transport_lists_yield_one_empty_name() {
        assert_eq!(split_transports(""), [""]);
        assert_eq!(split_transports("   "), [""]);
    }

    #[test]
    fn rate_splits_by_floor_division() {
        assert_eq!(per_transport_rate(100, 3), 33);
        assert_eq!(per_transport_rate(100, 1), 100);
        assert_eq!(per_transport_rate(1, 3), 0);
        assert_eq!(per_transport_rate(16, 2), 8);
    }

    #[tokio::test]
    async fn connect_dials_every_transport() {
        let receiver = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let port = receiver.local_addr().unwrap().port();

        // Session-bound UDP dials never fail on a live host, so one port
        // serves both entries.
        let hammer =
            Hammer::connect(Protocol::Hep, "127.0.0.1", port, "udp , UDP", 100).await.unwrap();
        assert_eq!(hammer.transport_count(), 2);
        assert_eq!(hammer.rate(), 50);
    }

    #[tokio::test]
    async fn connect_rejects_unsupported_transports() {
        let err = Hammer::connect(Protocol::Hep, "127.0.0.1", 9060, "carrier-pigeon", 16)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedTransport(ref name) if name == "carrier-pigeon"));
    }

    #[tokio::test]
    async fn connect_rejects_empty_transport_lists() {
        let err = Hammer::connect(Protocol::Hep, "127.0.0.1", 9060, "  ", 16).await.unwrap_err();
        assert!(matches!(err, Error::UnsupportedTransport(ref name) if name.is_empty()));
    }

    #[tokio::test]
    async fn one_bad_name_aborts_the_whole_construction() {
        let receiver = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let port = receiver.local_addr().unwrap().port();

        let err =
            Hammer::connect(Protocol::Hep, "127.0.0.1", port, "udp,quic", 16).await.unwrap_err();
        assert!(matches!(err, Error::UnsupportedTransport(ref name) if name == "quic"));
    }
}
