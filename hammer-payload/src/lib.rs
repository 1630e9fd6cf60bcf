//! Packet catalogs for the hammer.
//!
//! A [`PacketCatalog`] is a finite, ordered, immutable list of byte payloads
//! built once at startup from a static record corpus and then replayed in a
//! loop by every producer. Catalogs are cheap to clone and safe to share
//! across tasks: the packet list sits behind an [`Arc`] and is never mutated
//! after construction.

use std::{fmt, slice, sync::Arc};

use bytes::{Bytes, BytesMut};

mod templates;

/// Upper bound on a single packet payload. Every template is copied into a
/// buffer of this capacity and trimmed to its real length.
pub const MAX_PACKET_SIZE: usize = 8192;

/// The payload protocol a catalog is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Protocol {
    /// HEP3 capture encapsulation, the default record kind.
    #[default]
    Hep,
    /// IPFIX flow export messages.
    Ipfix,
}

impl Protocol {
    /// Resolves a protocol selector case-insensitively. Anything that is not
    /// `ipfix` selects the HEP corpus.
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("ipfix") {
            Self::Ipfix
        } else {
            Self::Hep
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hep => f.write_str("hep"),
            Self::Ipfix => f.write_str("ipfix"),
        }
    }
}

/// An immutable byte payload, emitted verbatim on the wire.
///
/// Cloning a packet is cheap and shares the underlying storage; the bytes
/// themselves are never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    payload: Bytes,
}

impl Packet {
    /// Copies a template into freshly owned storage so the packet never
    /// aliases the static corpus.
    fn from_template(template: &[u8]) -> Self {
        debug_assert!(template.len() <= MAX_PACKET_SIZE);

        let mut buf = BytesMut::with_capacity(MAX_PACKET_SIZE);
        buf.extend_from_slice(template);

        Self { payload: buf.freeze() }
    }

    /// The exact bytes to write to the wire.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn len(&self) -> usize {
        self.payload.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}

/// An ordered, immutable, shareable list of [`Packet`]s.
#[derive(Debug, Clone)]
pub struct PacketCatalog {
    packets: Arc<Vec<Packet>>,
}

impl PacketCatalog {
    /// Builds the catalog for the given protocol.
    ///
    /// The IPFIX corpus passes through unmodified. HEP records carry the
    /// capture timestamp pair (seconds and microseconds, two big-endian
    /// `u32`s) at bytes 62..70 of every record; both fields are forced to
    /// zero so the static fixtures do not masquerade as stale captures.
    ///
    /// This is a pure function over the static corpus: two builds with the
    /// same protocol yield byte-identical catalogs.
    pub fn build(protocol: Protocol) -> Self {
        let packets = match protocol {
            Protocol::Ipfix => {
                templates::IPFIX.iter().map(|t| Packet::from_template(t)).collect()
            }
            Protocol::Hep => templates::HEP
                .iter()
                .map(|t| {
                    let mut record = t.to_vec();
                    record[62..66].copy_from_slice(&0u32.to_be_bytes());
                    record[66..70].copy_from_slice(&0u32.to_be_bytes());
                    Packet::from_template(&record)
                })
                .collect(),
        };

        Self { packets: Arc::new(packets) }
    }

    pub fn len(&self) -> usize {
        self.packets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packets.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Packet> {
        self.packets.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, Packet> {
        self.packets.iter()
    }

    /// Builds a catalog from arbitrary payloads, in iteration order.
    /// [`build`](Self::build) is the normal entry point; this exists for
    /// custom corpora and for exercising consumers against degenerate
    /// catalogs (including an empty one).
    pub fn from_payloads<I>(payloads: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let packets =
            payloads.into_iter().map(|payload| Packet::from_template(payload.as_ref())).collect();

        Self { packets: Arc::new(packets) }
    }
}

impl<'a> IntoIterator for &'a PacketCatalog {
    type Item = &'a Packet;
    type IntoIter = slice::Iter<'a, Packet>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_selector_is_case_insensitive_and_defaults_to_hep() {
        assert_eq!(Protocol::from_name("ipfix"), Protocol::Ipfix);
        assert_eq!(Protocol::from_name("IPFIX"), Protocol::Ipfix);
        assert_eq!(Protocol::from_name("hep"), Protocol::Hep);
        assert_eq!(Protocol::from_name("HEP"), Protocol::Hep);
        // Unknown selectors fall through to HEP.
        assert_eq!(Protocol::from_name("netflow"), Protocol::Hep);
        assert_eq!(Protocol::from_name(""), Protocol::Hep);
    }

    #[test]
    fn ipfix_catalog_matches_the_corpus_verbatim() {
        let catalog = PacketCatalog::build(Protocol::Ipfix);

        assert_eq!(catalog.len(), templates::IPFIX.len());
        for (packet, template) in catalog.iter().zip(templates::IPFIX) {
            assert_eq!(packet.payload(), *template);
        }
    }

    #[test]
    fn hep_catalog_zeroes_the_timestamp_pair() {
        let catalog = PacketCatalog::build(Protocol::Hep);

        assert_eq!(catalog.len(), templates::HEP.len());
        for (packet, template) in catalog.iter().zip(templates::HEP) {
            let payload = packet.payload();
            assert_eq!(&payload[62..70], &[0u8; 8]);
            // Everything around the patch is untouched.
            assert_eq!(&payload[..62], &template[..62]);
            assert_eq!(&payload[70..], &template[70..]);
        }
    }

    #[test]
    fn hep_fixtures_are_large_enough_to_patch() {
        for template in templates::HEP {
            assert!(template.len() >= 70);
            assert!(template.len() <= MAX_PACKET_SIZE);
        }
    }

    #[test]
    fn building_twice_is_deterministic() {
        for protocol in [Protocol::Hep, Protocol::Ipfix] {
            let a = PacketCatalog::build(protocol);
            let b = PacketCatalog::build(protocol);

            assert_eq!(a.len(), b.len());
            for (x, y) in a.iter().zip(&b) {
                assert_eq!(x, y);
            }
        }
    }

    #[test]
    fn custom_catalogs_preserve_payloads_and_order() {
        let catalog = PacketCatalog::from_payloads([b"first".as_slice(), b"second"]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).unwrap().payload(), b"first");
        assert_eq!(catalog.get(1).unwrap().payload(), b"second");

        let empty = PacketCatalog::from_payloads(std::iter::empty::<&[u8]>());
        assert!(empty.is_empty());
    }

    #[test]
    fn packets_own_independent_storage() {
        let catalog = PacketCatalog::build(Protocol::Hep);
        let packet = catalog.get(0).unwrap();

        // The patched record cannot alias the static template.
        assert_ne!(packet.payload().as_ptr(), templates::HEP[0].as_ptr());
        assert!(!packet.is_empty());
    }
}
