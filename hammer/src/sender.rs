use std::io;

use tokio::{
    io::{AsyncWriteExt, BufWriter},
    sync::mpsc::Receiver,
};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, trace, warn};

use hammer_payload::Packet;
use hammer_transport::{Connector, WRITE_BUFFER_SIZE};

/// Number of consecutive write failures that trips a reconnect attempt.
pub const RECONNECT_THRESHOLD: u32 = 64;

/// The per-transport writer task.
///
/// A `Sender` exclusively owns its connection handle, write buffer and
/// failure counter; no lock is needed because nothing else ever touches
/// them. It drains its queue in FIFO order, flushing after every packet so
/// per-packet latency stays bounded.
///
/// Failure policy: a failed write is counted, not retried — the packet is
/// lost and the queue keeps draining into the broken connection. When the
/// counter reaches [`RECONNECT_THRESHOLD`] it resets to zero and one
/// reconnect is attempted through the connector; whether or not that dial
/// succeeds, the loop goes straight back to writing. Already-enqueued
/// packets survive a reconnect unchanged.
pub struct Sender<C: Connector> {
    connector: C,
    writer: BufWriter<C::Io>,
    queue: Receiver<Packet>,
    err_count: u32,
}

impl<C: Connector> Sender<C> {
    /// Binds an already-dialed connection to its queue.
    pub fn new(connector: C, io: C::Io, queue: Receiver<Packet>) -> Self {
        Self {
            connector,
            writer: BufWriter::with_capacity(WRITE_BUFFER_SIZE, io),
            queue,
            err_count: 0,
        }
    }

    /// Drains the queue until the token is cancelled or the producer side
    /// is dropped. Never returns under normal operation.
    pub async fn run(mut self, cancel: CancellationToken) {
        loop {
            let packet = tokio::select! {
                _ = cancel.cancelled() => break,
                packet = self.queue.recv() => match packet {
                    Some(packet) => packet,
                    None => break,
                },
            };

            tokio::select! {
                _ = cancel.cancelled() => break,
                () = self.process(packet) => {}
            }
        }

        debug!("writer task stopped");
    }

    /// Writes one packet, counting failures and cycling the connection at
    /// the threshold.
    async fn process(&mut self, packet: Packet) {
        let Err(err) = self.write(&packet).await else {
            return;
        };

        self.err_count += 1;
        trace!(%err, count = self.err_count, "write failed");

        if self.err_count == RECONNECT_THRESHOLD {
            // Reset before dialing: the counter restarts regardless of
            // whether the reconnect below succeeds.
            self.err_count = 0;
            error!(%err, "write errors reached threshold, reconnecting");
            self.reconnect().await;
        }
    }

    async fn write(&mut self, packet: &Packet) -> io::Result<()> {
        self.writer.write_all(packet.payload()).await?;
        self.writer.flush().await?;
        Ok(())
    }

    /// Replaces the connection handle in place. The queue and anything
    /// already enqueued are untouched.
    async fn reconnect(&mut self) {
        match self.connector.connect().await {
            Ok(io) => {
                self.writer = BufWriter::with_capacity(WRITE_BUFFER_SIZE, io);
                debug!("transport reconnected");
            }
            Err(err) => warn!(%err, "reconnect failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        pin::Pin,
        sync::{
            atomic::{AtomicUsize, Ordering},
            Arc,
        },
        task::{Context, Poll},
    };

    use tokio::sync::mpsc;

    use hammer_payload::{PacketCatalog, Protocol};
    use hammer_transport::Error;

    use super::*;

    /// An IO handle whose writes always fail.
    struct BrokenIo;

    impl tokio::io::AsyncWrite for BrokenIo {
        fn poll_write(
            self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            _buf: &[u8],
        ) -> Poll<io::Result<usize>> {
            Poll::Ready(Err(io::ErrorKind::BrokenPipe.into()))
        }

        fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
            Poll::Ready(Ok(()))
        }

        fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
            Poll::Ready(Ok(()))
        }
    }

    #[derive(Clone)]
    struct BrokenConnector {
        attempts: Arc<AtomicUsize>,
    }

    #[async_trait::async_trait]
    impl Connector for BrokenConnector {
        type Io = BrokenIo;

        async fn connect(&self) -> Result<BrokenIo, Error> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            Ok(BrokenIo)
        }
    }

    fn broken_sender() -> (Sender<BrokenConnector>, Arc<AtomicUsize>) {
        let attempts = Arc::new(AtomicUsize::new(0));
        let connector = BrokenConnector { attempts: Arc::clone(&attempts) };
        let (_tx, rx) = mpsc::channel(1);
        (Sender::new(connector, BrokenIo, rx), attempts)
    }

    async fn feed_failures(sender: &mut Sender<BrokenConnector>, count: usize) {
        let catalog = PacketCatalog::build(Protocol::Hep);
        let packet = catalog.get(0).unwrap();
        for _ in 0..count {
            sender.process(packet.clone()).await;
        }
    }

    #[tokio::test]
    async fn sixty_three_failures_do_not_reconnect() {
        let (mut sender, attempts) = broken_sender();

        feed_failures(&mut sender, 63).await;
        assert_eq!(attempts.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn sixty_four_failures_reconnect_exactly_once() {
        let (mut sender, attempts) = broken_sender();

        feed_failures(&mut sender, 64).await;
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn counter_resets_at_the_threshold() {
        let (mut sender, attempts) = broken_sender();

        // 64 + 63: the counter restarted after the first reconnect, so the
        // trailing 63 failures must not trip another one.
        feed_failures(&mut sender, 64 + 63).await;
        assert_eq!(attempts.load(Ordering::SeqCst), 1);

        // One more completes the second group of 64.
        feed_failures(&mut sender, 1).await;
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn run_stops_on_cancellation() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let connector = BrokenConnector { attempts };
        let (_tx, rx) = mpsc::channel::<Packet>(1);
        let sender = Sender::new(connector, BrokenIo, rx);

        let cancel = CancellationToken::new();
        let task = tokio::spawn(sender.run(cancel.clone()));

        cancel.cancel();
        task.await.unwrap();
    }
}
