//! The multi-transport sending engine behind the `hammer` binary.
//!
//! A [`Hammer`] owns one writer/producer pair per transport. Producers pace
//! a shared, immutable packet catalog into bounded per-transport queues;
//! writer tasks drain their queue onto the wire and own reconnection. All
//! pairs are independent of each other and share nothing but the read-only
//! catalog and a cancellation token.

mod hammer;
pub use hammer::{Hammer, QUEUE_CAPACITY};

mod producer;
pub use producer::{Pacer, Producer};

mod sender;
pub use sender::{Sender, RECONNECT_THRESHOLD};
