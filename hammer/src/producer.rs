use std::time::Duration;

use tokio::{
    sync::mpsc,
    time::{sleep_until, Instant},
};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use hammer_payload::{Packet, PacketCatalog};

/// Paces emissions to a fixed packets-per-second rate.
///
/// Deadline-based: each tick schedules the next one at `previous + 1/rate`,
/// so the long-run rate matches the configured value exactly. A producer
/// that stalls on a full queue accumulates a deficit and briefly bursts to
/// catch up once the queue drains.
#[derive(Debug)]
pub struct Pacer {
    interval: Duration,
    next: Instant,
}

impl Pacer {
    /// Returns `None` for a zero rate: rate zero means explicitly
    /// unthrottled, never a degenerate limiter.
    pub fn new(rate: u32) -> Option<Self> {
        (rate > 0).then(|| Self { interval: Duration::from_secs(1) / rate, next: Instant::now() })
    }

    /// Waits for the next emission slot.
    pub async fn pace(&mut self) {
        sleep_until(self.next).await;
        self.next += self.interval;
    }
}

/// Feeds one transport's queue from the shared catalog, forever.
#[derive(Debug)]
pub struct Producer {
    catalog: PacketCatalog,
    queue: mpsc::Sender<Packet>,
    pacer: Option<Pacer>,
}

impl Producer {
    pub fn new(catalog: PacketCatalog, queue: mpsc::Sender<Packet>, rate: u32) -> Self {
        Self { catalog, queue, pacer: Pacer::new(rate) }
    }

    /// Cycles the catalog in its fixed order, pacing each enqueue. Suspends
    /// on the pacer and on a full queue; returns only on cancellation or
    /// when the writer side goes away.
    pub async fn run(mut self, cancel: CancellationToken) {
        if self.catalog.is_empty() {
            warn!("empty packet catalog, nothing to send");
            return;
        }

        loop {
            for packet in &self.catalog {
                if let Some(pacer) = &mut self.pacer {
                    tokio::select! {
                        _ = cancel.cancelled() => return,
                        () = pacer.pace() => {}
                    }
                }

                tokio::select! {
                    _ = cancel.cancelled() => return,
                    sent = self.queue.send(packet.clone()) => {
                        if sent.is_err() {
                            debug!("queue closed, producer stopping");
                            return;
                        }
                    }
                }
            }
        }
    }
}
