//! Transport dialing for the hammer.
//!
//! A transport is one independently-managed connection to the target: a
//! session-bound UDP socket, a TCP stream, or a TLS stream with server
//! certificate verification disabled. The [`Connector`] trait is the seam
//! between the writer task and the dialing code, so reconnection can be
//! exercised against something other than a live network.

use std::{fmt, io, net::IpAddr, str::FromStr, sync::Arc};

use tokio::net::{TcpStream, UdpSocket};
use tokio_rustls::TlsConnector;
use tracing::debug;

mod conn;
pub use conn::Connection;

mod tls;

/// Capacity of the write buffer wrapped around every connection, and the
/// upper bound on a single datagram.
pub const WRITE_BUFFER_SIZE: usize = 8192;

/// Errors from dialing a transport.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unsupported transport: {0}")]
    UnsupportedTransport(String),
    #[error("dial transport failed: {0}")]
    Dial(#[from] io::Error),
    #[error("invalid tls server name: {0}")]
    ServerName(#[from] rustls::pki_types::InvalidDnsNameError),
}

/// The kind of transport used to reach the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// Connectionless but session-bound datagrams.
    Udp,
    /// A plain TCP stream.
    Tcp,
    /// A TLS stream over TCP, without certificate verification.
    Tls,
}

impl FromStr for TransportKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "udp" => Ok(Self::Udp),
            "tcp" => Ok(Self::Tcp),
            "tls" => Ok(Self::Tls),
            other => Err(Error::UnsupportedTransport(other.to_string())),
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Udp => f.write_str("udp"),
            Self::Tcp => f.write_str("tcp"),
            Self::Tls => f.write_str("tls"),
        }
    }
}

/// Opens a connection to a fixed target. Implementations must be usable for
/// repeated dials: the writer task goes back to its connector every time it
/// decides the current connection is dead.
#[async_trait::async_trait]
pub trait Connector: Send + Sync + 'static {
    type Io: tokio::io::AsyncWrite + Unpin + Send;

    async fn connect(&self) -> Result<Self::Io, Error>;
}

/// Dials a real network target. The transport name is resolved on every
/// connect, so an unsupported name surfaces as a dial failure rather than a
/// parse failure.
#[derive(Debug, Clone)]
pub struct NetConnector {
    name: String,
    host: String,
    port: u16,
}

impl NetConnector {
    pub fn new(name: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
        Self { name: name.into(), host: host.into(), port }
    }

    /// The (normalized) transport name this connector dials.
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[async_trait::async_trait]
impl Connector for NetConnector {
    type Io = Connection;

    async fn connect(&self) -> Result<Connection, Error> {
        let kind: TransportKind = self.name.parse()?;
        let target = (self.host.as_str(), self.port);

        let conn = match kind {
            TransportKind::Udp => {
                let socket = UdpSocket::bind("0.0.0.0:0").await?;
                socket.connect(target).await?;
                Connection::Udp(socket)
            }
            TransportKind::Tcp => {
                let stream = TcpStream::connect(target).await?;
                stream.set_nodelay(true)?;
                Connection::Tcp(stream)
            }
            TransportKind::Tls => {
                let stream = TcpStream::connect(target).await?;
                stream.set_nodelay(true)?;

                // Verification is disabled on purpose: the targets are
                // ephemeral load-test receivers with throwaway certificates.
                let connector = TlsConnector::from(Arc::new(tls::insecure_client_config()));
                let server_name = match self.host.parse::<IpAddr>() {
                    Ok(ip) => rustls::pki_types::ServerName::from(ip),
                    Err(_) => rustls::pki_types::ServerName::try_from(self.host.clone())?,
                };
                let stream = connector.connect(server_name, stream).await?;
                Connection::Tls(Box::new(stream))
            }
        };

        debug!(transport = %kind, host = %self.host, port = self.port, "dialed transport");
        Ok(conn)
    }
}

#[cfg(test)]
mod tests {
    use tokio::{io::AsyncWriteExt, net::TcpListener};

    use super::*;

    #[test]
    fn transport_names_resolve() {
        assert_eq!("udp".parse::<TransportKind>().unwrap(), TransportKind::Udp);
        assert_eq!("tcp".parse::<TransportKind>().unwrap(), TransportKind::Tcp);
        assert_eq!("tls".parse::<TransportKind>().unwrap(), TransportKind::Tls);
    }

    #[test]
    fn unknown_and_empty_names_are_unsupported() {
        for name in ["sctp", "TCP", "", " "] {
            let err = name.parse::<TransportKind>().unwrap_err();
            assert!(matches!(err, Error::UnsupportedTransport(ref n) if n == name), "{err}");
        }
    }

    #[tokio::test]
    async fn dialing_an_unsupported_name_fails() {
        let _ = tracing_subscriber::fmt::try_init();

        let connector = NetConnector::new("", "127.0.0.1", 9060);
        let err = connector.connect().await.unwrap_err();
        assert!(matches!(err, Error::UnsupportedTransport(ref n) if n.is_empty()));
    }

    #[tokio::test]
    async fn dialing_a_closed_tcp_port_fails() {
        // Bind and drop a listener so the port is (very likely) closed.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let connector = NetConnector::new("tcp", "127.0.0.1", port);
        let err = connector.connect().await.unwrap_err();
        assert!(matches!(err, Error::Dial(_)));
    }

    #[tokio::test]
    async fn udp_connect_is_session_bound() {
        let _ = tracing_subscriber::fmt::try_init();

        let receiver = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let port = receiver.local_addr().unwrap().port();

        let connector = NetConnector::new("udp", "127.0.0.1", port);
        let mut conn = connector.connect().await.unwrap();
        conn.write_all(b"hello").await.unwrap();

        let mut buf = [0u8; 16];
        let n = receiver.recv(&mut buf).await.unwrap();
        assert_eq!(&buf[..n], b"hello");
    }
}
