//! Static record corpora replayed by the hammer.
//!
//! These are canned captures, not live traffic: a short SIP dialog wrapped
//! in HEP3 capture envelopes, and a few IPFIX export messages carrying the
//! matching flow records. The rest of the workspace treats every record as
//! an opaque byte blob.

/// The HEP3 capture records, in dialog order.
pub(crate) static HEP: &[&[u8]] = &[HEP_INVITE, HEP_RINGING, HEP_OK, HEP_ACK, HEP_BYE];

/// The IPFIX export messages, in export order.
pub(crate) static IPFIX: &[&[u8]] = &[IPFIX_SIG, IPFIX_RTP_OUT, IPFIX_RTP_IN];

const HEP_INVITE: &[u8] = &[
    0x48, 0x45, 0x50, 0x33, 0x02, 0x50, 0x00, 0x00, 0x00, 0x01, 0x00, 0x07, 0x02, 0x00, 0x00, 0x00,
    0x02, 0x00, 0x07, 0x11, 0x00, 0x00, 0x00, 0x03, 0x00, 0x0a, 0xc0, 0xa8, 0x03, 0x28, 0x00, 0x00,
    0x00, 0x04, 0x00, 0x0a, 0xc0, 0xa8, 0x03, 0x32, 0x00, 0x00, 0x00, 0x07, 0x00, 0x08, 0x13, 0xc4,
    0x00, 0x00, 0x00, 0x08, 0x00, 0x08, 0x13, 0xc4, 0x00, 0x00, 0x00, 0x09, 0x00, 0x0e, 0x5b, 0x91,
    0x2e, 0x30, 0x00, 0x08, 0xd3, 0x76, 0x00, 0x00, 0x00, 0x0b, 0x00, 0x07, 0x01, 0x00, 0x00, 0x00,
    0x0c, 0x00, 0x0a, 0x00, 0x00, 0x07, 0xd1, 0x00, 0x00, 0x00, 0x0f, 0x01, 0xf9, 0x49, 0x4e, 0x56,
    0x49, 0x54, 0x45, 0x20, 0x73, 0x69, 0x70, 0x3a, 0x62, 0x6f, 0x62, 0x40, 0x31, 0x39, 0x32, 0x2e,
    0x31, 0x36, 0x38, 0x2e, 0x33, 0x2e, 0x35, 0x30, 0x20, 0x53, 0x49, 0x50, 0x2f, 0x32, 0x2e, 0x30,
    0x0d, 0x0a, 0x56, 0x69, 0x61, 0x3a, 0x20, 0x53, 0x49, 0x50, 0x2f, 0x32, 0x2e, 0x30, 0x2f, 0x55,
    0x44, 0x50, 0x20, 0x31, 0x39, 0x32, 0x2e, 0x31, 0x36, 0x38, 0x2e, 0x33, 0x2e, 0x34, 0x30, 0x3a,
    0x35, 0x30, 0x36, 0x30, 0x3b, 0x62, 0x72, 0x61, 0x6e, 0x63, 0x68, 0x3d, 0x7a, 0x39, 0x68, 0x47,
    0x34, 0x62, 0x4b, 0x37, 0x37, 0x36, 0x61, 0x73, 0x64, 0x68, 0x64, 0x73, 0x0d, 0x0a, 0x4d, 0x61,
    0x78, 0x2d, 0x46, 0x6f, 0x72, 0x77, 0x61, 0x72, 0x64, 0x73, 0x3a, 0x20, 0x37, 0x30, 0x0d, 0x0a,
    0x46, 0x72, 0x6f, 0x6d, 0x3a, 0x20, 0x3c, 0x73, 0x69, 0x70, 0x3a, 0x61, 0x6c, 0x69, 0x63, 0x65,
    0x40, 0x31, 0x39, 0x32, 0x2e, 0x31, 0x36, 0x38, 0x2e, 0x33, 0x2e, 0x34, 0x30, 0x3e, 0x3b, 0x74,
    0x61, 0x67, 0x3d, 0x34, 0x31, 0x35, 0x37, 0x34, 0x36, 0x33, 0x30, 0x33, 0x0d, 0x0a, 0x54, 0x6f,
    0x3a, 0x20, 0x3c, 0x73, 0x69, 0x70, 0x3a, 0x62, 0x6f, 0x62, 0x40, 0x31, 0x39, 0x32, 0x2e, 0x31,
    0x36, 0x38, 0x2e, 0x33, 0x2e, 0x35, 0x30, 0x3e, 0x0d, 0x0a, 0x43, 0x61, 0x6c, 0x6c, 0x2d, 0x49,
    0x44, 0x3a, 0x20, 0x64, 0x61, 0x35, 0x63, 0x37, 0x38, 0x66, 0x33, 0x65, 0x39, 0x65, 0x31, 0x66,
    0x35, 0x36, 0x61, 0x40, 0x31, 0x39, 0x32, 0x2e, 0x31, 0x36, 0x38, 0x2e, 0x33, 0x2e, 0x34, 0x30,
    0x0d, 0x0a, 0x43, 0x53, 0x65, 0x71, 0x3a, 0x20, 0x31, 0x20, 0x49, 0x4e, 0x56, 0x49, 0x54, 0x45,
    0x0d, 0x0a, 0x43, 0x6f, 0x6e, 0x74, 0x61, 0x63, 0x74, 0x3a, 0x20, 0x3c, 0x73, 0x69, 0x70, 0x3a,
    0x61, 0x6c, 0x69, 0x63, 0x65, 0x40, 0x31, 0x39, 0x32, 0x2e, 0x31, 0x36, 0x38, 0x2e, 0x33, 0x2e,
    0x34, 0x30, 0x3a, 0x35, 0x30, 0x36, 0x30, 0x3e, 0x0d, 0x0a, 0x43, 0x6f, 0x6e, 0x74, 0x65, 0x6e,
    0x74, 0x2d, 0x54, 0x79, 0x70, 0x65, 0x3a, 0x20, 0x61, 0x70, 0x70, 0x6c, 0x69, 0x63, 0x61, 0x74,
    0x69, 0x6f, 0x6e, 0x2f, 0x73, 0x64, 0x70, 0x0d, 0x0a, 0x43, 0x6f, 0x6e, 0x74, 0x65, 0x6e, 0x74,
    0x2d, 0x4c, 0x65, 0x6e, 0x67, 0x74, 0x68, 0x3a, 0x20, 0x31, 0x36, 0x30, 0x0d, 0x0a, 0x0d, 0x0a,
    0x76, 0x3d, 0x30, 0x0d, 0x0a, 0x6f, 0x3d, 0x68, 0x61, 0x6d, 0x6d, 0x65, 0x72, 0x20, 0x35, 0x33,
    0x36, 0x35, 0x35, 0x37, 0x36, 0x35, 0x20, 0x32, 0x33, 0x35, 0x33, 0x36, 0x38, 0x37, 0x36, 0x33,
    0x37, 0x20, 0x49, 0x4e, 0x20, 0x49, 0x50, 0x34, 0x20, 0x31, 0x39, 0x32, 0x2e, 0x31, 0x36, 0x38,
    0x2e, 0x33, 0x2e, 0x34, 0x30, 0x0d, 0x0a, 0x73, 0x3d, 0x2d, 0x0d, 0x0a, 0x63, 0x3d, 0x49, 0x4e,
    0x20, 0x49, 0x50, 0x34, 0x20, 0x31, 0x39, 0x32, 0x2e, 0x31, 0x36, 0x38, 0x2e, 0x33, 0x2e, 0x34,
    0x30, 0x0d, 0x0a, 0x74, 0x3d, 0x30, 0x20, 0x30, 0x0d, 0x0a, 0x6d, 0x3d, 0x61, 0x75, 0x64, 0x69,
    0x6f, 0x20, 0x36, 0x30, 0x30, 0x30, 0x20, 0x52, 0x54, 0x50, 0x2f, 0x41, 0x56, 0x50, 0x20, 0x30,
    0x20, 0x38, 0x0d, 0x0a, 0x61, 0x3d, 0x72, 0x74, 0x70, 0x6d, 0x61, 0x70, 0x3a, 0x30, 0x20, 0x50,
    0x43, 0x4d, 0x55, 0x2f, 0x38, 0x30, 0x30, 0x30, 0x0d, 0x0a, 0x61, 0x3d, 0x72, 0x74, 0x70, 0x6d,
    0x61, 0x70, 0x3a, 0x38, 0x20, 0x50, 0x43, 0x4d, 0x41, 0x2f, 0x38, 0x30, 0x30, 0x30, 0x0d, 0x0a,
];

const HEP_RINGING: &[u8] = &[
    0x48, 0x45, 0x50, 0x33, 0x01, 0x8b, 0x00, 0x00, 0x00, 0x01, 0x00, 0x07, 0x02, 0x00, 0x00, 0x00,
    0x02, 0x00, 0x07, 0x11, 0x00, 0x00, 0x00, 0x03, 0x00, 0x0a, 0xc0, 0xa8, 0x03, 0x32, 0x00, 0x00,
    0x00, 0x04, 0x00, 0x0a, 0xc0, 0xa8, 0x03, 0x28, 0x00, 0x00, 0x00, 0x07, 0x00, 0x08, 0x13, 0xc4,
    0x00, 0x00, 0x00, 0x08, 0x00, 0x08, 0x13, 0xc4, 0x00, 0x00, 0x00, 0x09, 0x00, 0x0e, 0x5b, 0x91,
    0x2e, 0x30, 0x00, 0x09, 0x5a, 0x27, 0x00, 0x00, 0x00, 0x0b, 0x00, 0x07, 0x01, 0x00, 0x00, 0x00,
    0x0c, 0x00, 0x0a, 0x00, 0x00, 0x07, 0xd1, 0x00, 0x00, 0x00, 0x0f, 0x01, 0x34, 0x53, 0x49, 0x50,
    0x2f, 0x32, 0x2e, 0x30, 0x20, 0x31, 0x38, 0x30, 0x20, 0x52, 0x69, 0x6e, 0x67, 0x69, 0x6e, 0x67,
    0x0d, 0x0a, 0x56, 0x69, 0x61, 0x3a, 0x20, 0x53, 0x49, 0x50, 0x2f, 0x32, 0x2e, 0x30, 0x2f, 0x55,
    0x44, 0x50, 0x20, 0x31, 0x39, 0x32, 0x2e, 0x31, 0x36, 0x38, 0x2e, 0x33, 0x2e, 0x34, 0x30, 0x3a,
    0x35, 0x30, 0x36, 0x30, 0x3b, 0x62, 0x72, 0x61, 0x6e, 0x63, 0x68, 0x3d, 0x7a, 0x39, 0x68, 0x47,
    0x34, 0x62, 0x4b, 0x37, 0x37, 0x36, 0x61, 0x73, 0x64, 0x68, 0x64, 0x73, 0x0d, 0x0a, 0x4d, 0x61,
    0x78, 0x2d, 0x46, 0x6f, 0x72, 0x77, 0x61, 0x72, 0x64, 0x73, 0x3a, 0x20, 0x37, 0x30, 0x0d, 0x0a,
    0x46, 0x72, 0x6f, 0x6d, 0x3a, 0x20, 0x3c, 0x73, 0x69, 0x70, 0x3a, 0x61, 0x6c, 0x69, 0x63, 0x65,
    0x40, 0x31, 0x39, 0x32, 0x2e, 0x31, 0x36, 0x38, 0x2e, 0x33, 0x2e, 0x34, 0x30, 0x3e, 0x3b, 0x74,
    0x61, 0x67, 0x3d, 0x34, 0x31, 0x35, 0x37, 0x34, 0x36, 0x33, 0x30, 0x33, 0x0d, 0x0a, 0x54, 0x6f,
    0x3a, 0x20, 0x3c, 0x73, 0x69, 0x70, 0x3a, 0x62, 0x6f, 0x62, 0x40, 0x31, 0x39, 0x32, 0x2e, 0x31,
    0x36, 0x38, 0x2e, 0x33, 0x2e, 0x35, 0x30, 0x3e, 0x3b, 0x74, 0x61, 0x67, 0x3d, 0x37, 0x39, 0x34,
    0x32, 0x36, 0x31, 0x33, 0x35, 0x34, 0x0d, 0x0a, 0x43, 0x61, 0x6c, 0x6c, 0x2d, 0x49, 0x44, 0x3a,
    0x20, 0x64, 0x61, 0x35, 0x63, 0x37, 0x38, 0x66, 0x33, 0x65, 0x39, 0x65, 0x31, 0x66, 0x35, 0x36,
    0x61, 0x40, 0x31, 0x39, 0x32, 0x2e, 0x31, 0x36, 0x38, 0x2e, 0x33, 0x2e, 0x34, 0x30, 0x0d, 0x0a,
    0x43, 0x53, 0x65, 0x71, 0x3a, 0x20, 0x31, 0x20, 0x49, 0x4e, 0x56, 0x49, 0x54, 0x45, 0x0d, 0x0a,
    0x43, 0x6f, 0x6e, 0x74, 0x61, 0x63, 0x74, 0x3a, 0x20, 0x3c, 0x73, 0x69, 0x70, 0x3a, 0x62, 0x6f,
    0x62, 0x40, 0x31, 0x39, 0x32, 0x2e, 0x31, 0x36, 0x38, 0x2e, 0x33, 0x2e, 0x35, 0x30, 0x3a, 0x35,
    0x30, 0x36, 0x30, 0x3e, 0x0d, 0x0a, 0x43, 0x6f, 0x6e, 0x74, 0x65, 0x6e, 0x74, 0x2d, 0x4c, 0x65,
    0x6e, 0x67, 0x74, 0x68, 0x3a, 0x20, 0x30, 0x0d, 0x0a, 0x0d, 0x0a,
];

const HEP_OK: &[u8] = &[
    0x48, 0x45, 0x50, 0x33, 0x02, 0x47, 0x00, 0x00, 0x00, 0x01, 0x00, 0x07, 0x02, 0x00, 0x00, 0x00,
    0x02, 0x00, 0x07, 0x11, 0x00, 0x00, 0x00, 0x03, 0x00, 0x0a, 0xc0, 0xa8, 0x03, 0x32, 0x00, 0x00,
    0x00, 0x04, 0x00, 0x0a, 0xc0, 0xa8, 0x03, 0x28, 0x00, 0x00, 0x00, 0x07, 0x00, 0x08, 0x13, 0xc4,
    0x00, 0x00, 0x00, 0x08, 0x00, 0x08, 0x13, 0xc4, 0x00, 0x00, 0x00, 0x09, 0x00, 0x0e, 0x5b, 0x91,
    0x2e, 0x33, 0x00, 0x01, 0xa4, 0x18, 0x00, 0x00, 0x00, 0x0b, 0x00, 0x07, 0x01, 0x00, 0x00, 0x00,
    0x0c, 0x00, 0x0a, 0x00, 0x00, 0x07, 0xd1, 0x00, 0x00, 0x00, 0x0f, 0x01, 0xf0, 0x53, 0x49, 0x50,
    0x2f, 0x32, 0x2e, 0x30, 0x20, 0x32, 0x30, 0x30, 0x20, 0x4f, 0x4b, 0x0d, 0x0a, 0x56, 0x69, 0x61,
    0x3a, 0x20, 0x53, 0x49, 0x50, 0x2f, 0x32, 0x2e, 0x30, 0x2f, 0x55, 0x44, 0x50, 0x20, 0x31, 0x39,
    0x32, 0x2e, 0x31, 0x36, 0x38, 0x2e, 0x33, 0x2e, 0x34, 0x30, 0x3a, 0x35, 0x30, 0x36, 0x30, 0x3b,
    0x62, 0x72, 0x61, 0x6e, 0x63, 0x68, 0x3d, 0x7a, 0x39, 0x68, 0x47, 0x34, 0x62, 0x4b, 0x37, 0x37,
    0x36, 0x61, 0x73, 0x64, 0x68, 0x64, 0x73, 0x0d, 0x0a, 0x4d, 0x61, 0x78, 0x2d, 0x46, 0x6f, 0x72,
    0x77, 0x61, 0x72, 0x64, 0x73, 0x3a, 0x20, 0x37, 0x30, 0x0d, 0x0a, 0x46, 0x72, 0x6f, 0x6d, 0x3a,
    0x20, 0x3c, 0x73, 0x69, 0x70, 0x3a, 0x61, 0x6c, 0x69, 0x63, 0x65, 0x40, 0x31, 0x39, 0x32, 0x2e,
    0x31, 0x36, 0x38, 0x2e, 0x33, 0x2e, 0x34, 0x30, 0x3e, 0x3b, 0x74, 0x61, 0x67, 0x3d, 0x34, 0x31,
    0x35, 0x37, 0x34, 0x36, 0x33, 0x30, 0x33, 0x0d, 0x0a, 0x54, 0x6f, 0x3a, 0x20, 0x3c, 0x73, 0x69,
    0x70, 0x3a, 0x62, 0x6f, 0x62, 0x40, 0x31, 0x39, 0x32, 0x2e, 0x31, 0x36, 0x38, 0x2e, 0x33, 0x2e,
    0x35, 0x30, 0x3e, 0x3b, 0x74, 0x61, 0x67, 0x3d, 0x37, 0x39, 0x34, 0x32, 0x36, 0x31, 0x33, 0x35,
    0x34, 0x0d, 0x0a, 0x43, 0x61, 0x6c, 0x6c, 0x2d, 0x49, 0x44, 0x3a, 0x20, 0x64, 0x61, 0x35, 0x63,
    0x37, 0x38, 0x66, 0x33, 0x65, 0x39, 0x65, 0x31, 0x66, 0x35, 0x36, 0x61, 0x40, 0x31, 0x39, 0x32,
    0x2e, 0x31, 0x36, 0x38, 0x2e, 0x33, 0x2e, 0x34, 0x30, 0x0d, 0x0a, 0x43, 0x53, 0x65, 0x71, 0x3a,
    0x20, 0x31, 0x20, 0x49, 0x4e, 0x56, 0x49, 0x54, 0x45, 0x0d, 0x0a, 0x43, 0x6f, 0x6e, 0x74, 0x61,
    0x63, 0x74, 0x3a, 0x20, 0x3c, 0x73, 0x69, 0x70, 0x3a, 0x62, 0x6f, 0x62, 0x40, 0x31, 0x39, 0x32,
    0x2e, 0x31, 0x36, 0x38, 0x2e, 0x33, 0x2e, 0x35, 0x30, 0x3a, 0x35, 0x30, 0x36, 0x30, 0x3e, 0x0d,
    0x0a, 0x43, 0x6f, 0x6e, 0x74, 0x65, 0x6e, 0x74, 0x2d, 0x54, 0x79, 0x70, 0x65, 0x3a, 0x20, 0x61,
    0x70, 0x70, 0x6c, 0x69, 0x63, 0x61, 0x74, 0x69, 0x6f, 0x6e, 0x2f, 0x73, 0x64, 0x70, 0x0d, 0x0a,
    0x43, 0x6f, 0x6e, 0x74, 0x65, 0x6e, 0x74, 0x2d, 0x4c, 0x65, 0x6e, 0x67, 0x74, 0x68, 0x3a, 0x20,
    0x31, 0x36, 0x30, 0x0d, 0x0a, 0x0d, 0x0a, 0x76, 0x3d, 0x30, 0x0d, 0x0a, 0x6f, 0x3d, 0x68, 0x61,
    0x6d, 0x6d, 0x65, 0x72, 0x20, 0x35, 0x33, 0x36, 0x35, 0x35, 0x37, 0x36, 0x35, 0x20, 0x32, 0x33,
    0x35, 0x33, 0x36, 0x38, 0x37, 0x36, 0x33, 0x37, 0x20, 0x49, 0x4e, 0x20, 0x49, 0x50, 0x34, 0x20,
    0x31, 0x39, 0x32, 0x2e, 0x31, 0x36, 0x38, 0x2e, 0x33, 0x2e, 0x34, 0x30, 0x0d, 0x0a, 0x73, 0x3d,
    0x2d, 0x0d, 0x0a, 0x63, 0x3d, 0x49, 0x4e, 0x20, 0x49, 0x50, 0x34, 0x20, 0x31, 0x39, 0x32, 0x2e,
    0x31, 0x36, 0x38, 0x2e, 0x33, 0x2e, 0x34, 0x30, 0x0d, 0x0a, 0x74, 0x3d, 0x30, 0x20, 0x30, 0x0d,
    0x0a, 0x6d, 0x3d, 0x61, 0x75, 0x64, 0x69, 0x6f, 0x20, 0x36, 0x30, 0x30, 0x30, 0x20, 0x52, 0x54,
    0x50, 0x2f, 0x41, 0x56, 0x50, 0x20, 0x30, 0x20, 0x38, 0x0d, 0x0a, 0x61, 0x3d, 0x72, 0x74, 0x70,
    0x6d, 0x61, 0x70, 0x3a, 0x30, 0x20, 0x50, 0x43, 0x4d, 0x55, 0x2f, 0x38, 0x30, 0x30, 0x30, 0x0d,
    0x0a, 0x61, 0x3d, 0x72, 0x74, 0x70, 0x6d, 0x61, 0x70, 0x3a, 0x38, 0x20, 0x50, 0x43, 0x4d, 0x41,
    0x2f, 0x38, 0x30, 0x30, 0x30, 0x0d, 0x0a,
];

const HEP_ACK: &[u8] = &[
    0x48, 0x45, 0x50, 0x33, 0x01, 0x6f, 0x00, 0x00, 0x00, 0x01, 0x00, 0x07, 0x02, 0x00, 0x00, 0x00,
    0x02, 0x00, 0x07, 0x11, 0x00, 0x00, 0x00, 0x03, 0x00, 0x0a, 0xc0, 0xa8, 0x03, 0x28, 0x00, 0x00,
    0x00, 0x04, 0x00, 0x0a, 0xc0, 0xa8, 0x03, 0x32, 0x00, 0x00, 0x00, 0x07, 0x00, 0x08, 0x13, 0xc4,
    0x00, 0x00, 0x00, 0x08, 0x00, 0x08, 0x13, 0xc4, 0x00, 0x00, 0x00, 0x09, 0x00, 0x0e, 0x5b, 0x91,
    0x2e, 0x33, 0x00, 0x02, 0x2f, 0xce, 0x00, 0x00, 0x00, 0x0b, 0x00, 0x07, 0x01, 0x00, 0x00, 0x00,
    0x0c, 0x00, 0x0a, 0x00, 0x00, 0x07, 0xd1, 0x00, 0x00, 0x00, 0x0f, 0x01, 0x18, 0x41, 0x43, 0x4b,
    0x20, 0x73, 0x69, 0x70, 0x3a, 0x62, 0x6f, 0x62, 0x40, 0x31, 0x39, 0x32, 0x2e, 0x31, 0x36, 0x38,
    0x2e, 0x33, 0x2e, 0x35, 0x30, 0x20, 0x53, 0x49, 0x50, 0x2f, 0x32, 0x2e, 0x30, 0x0d, 0x0a, 0x56,
    0x69, 0x61, 0x3a, 0x20, 0x53, 0x49, 0x50, 0x2f, 0x32, 0x2e, 0x30, 0x2f, 0x55, 0x44, 0x50, 0x20,
    0x31, 0x39, 0x32, 0x2e, 0x31, 0x36, 0x38, 0x2e, 0x33, 0x2e, 0x34, 0x30, 0x3a, 0x35, 0x30, 0x36,
    0x30, 0x3b, 0x62, 0x72, 0x61, 0x6e, 0x63, 0x68, 0x3d, 0x7a, 0x39, 0x68, 0x47, 0x34, 0x62, 0x4b,
    0x38, 0x38, 0x37, 0x6b, 0x6a, 0x66, 0x71, 0x6c, 0x63, 0x0d, 0x0a, 0x4d, 0x61, 0x78, 0x2d, 0x46,
    0x6f, 0x72, 0x77, 0x61, 0x72, 0x64, 0x73, 0x3a, 0x20, 0x37, 0x30, 0x0d, 0x0a, 0x46, 0x72, 0x6f,
    0x6d, 0x3a, 0x20, 0x3c, 0x73, 0x69, 0x70, 0x3a, 0x61, 0x6c, 0x69, 0x63, 0x65, 0x40, 0x31, 0x39,
    0x32, 0x2e, 0x31, 0x36, 0x38, 0x2e, 0x33, 0x2e, 0x34, 0x30, 0x3e, 0x3b, 0x74, 0x61, 0x67, 0x3d,
    0x34, 0x31, 0x35, 0x37, 0x34, 0x36, 0x33, 0x30, 0x33, 0x0d, 0x0a, 0x54, 0x6f, 0x3a, 0x20, 0x3c,
    0x73, 0x69, 0x70, 0x3a, 0x62, 0x6f, 0x62, 0x40, 0x31, 0x39, 0x32, 0x2e, 0x31, 0x36, 0x38, 0x2e,
    0x33, 0x2e, 0x35, 0x30, 0x3e, 0x3b, 0x74, 0x61, 0x67, 0x3d, 0x37, 0x39, 0x34, 0x32, 0x36, 0x31,
    0x33, 0x35, 0x34, 0x0d, 0x0a, 0x43, 0x61, 0x6c, 0x6c, 0x2d, 0x49, 0x44, 0x3a, 0x20, 0x64, 0x61,
    0x35, 0x63, 0x37, 0x38, 0x66, 0x33, 0x65, 0x39, 0x65, 0x31, 0x66, 0x35, 0x36, 0x61, 0x40, 0x31,
    0x39, 0x32, 0x2e, 0x31, 0x36, 0x38, 0x2e, 0x33, 0x2e, 0x34, 0x30, 0x0d, 0x0a, 0x43, 0x53, 0x65,
    0x71, 0x3a, 0x20, 0x31, 0x20, 0x41, 0x43, 0x4b, 0x0d, 0x0a, 0x43, 0x6f, 0x6e, 0x74, 0x65, 0x6e,
    0x74, 0x2d, 0x4c, 0x65, 0x6e, 0x67, 0x74, 0x68, 0x3a, 0x20, 0x30, 0x0d, 0x0a, 0x0d, 0x0a,
];

const HEP_BYE: &[u8] = &[
    0x48, 0x45, 0x50, 0x33, 0x01, 0x6f, 0x00, 0x00, 0x00, 0x01, 0x00, 0x07, 0x02, 0x00, 0x00, 0x00,
    0x02, 0x00, 0x07, 0x11, 0x00, 0x00, 0x00, 0x03, 0x00, 0x0a, 0xc0, 0xa8, 0x03, 0x28, 0x00, 0x00,
    0x00, 0x04, 0x00, 0x0a, 0xc0, 0xa8, 0x03, 0x32, 0x00, 0x00, 0x00, 0x07, 0x00, 0x08, 0x13, 0xc4,
    0x00, 0x00, 0x00, 0x08, 0x00, 0x08, 0x13, 0xc4, 0x00, 0x00, 0x00, 0x09, 0x00, 0x0e, 0x5b, 0x91,
    0x2e, 0x5c, 0x00, 0x0e, 0x30, 0xdf, 0x00, 0x00, 0x00, 0x0b, 0x00, 0x07, 0x01, 0x00, 0x00, 0x00,
    0x0c, 0x00, 0x0a, 0x00, 0x00, 0x07, 0xd1, 0x00, 0x00, 0x00, 0x0f, 0x01, 0x18, 0x42, 0x59, 0x45,
    0x20, 0x73, 0x69, 0x70, 0x3a, 0x62, 0x6f, 0x62, 0x40, 0x31, 0x39, 0x32, 0x2e, 0x31, 0x36, 0x38,
    0x2e, 0x33, 0x2e, 0x35, 0x30, 0x20, 0x53, 0x49, 0x50, 0x2f, 0x32, 0x2e, 0x30, 0x0d, 0x0a, 0x56,
    0x69, 0x61, 0x3a, 0x20, 0x53, 0x49, 0x50, 0x2f, 0x32, 0x2e, 0x30, 0x2f, 0x55, 0x44, 0x50, 0x20,
    0x31, 0x39, 0x32, 0x2e, 0x31, 0x36, 0x38, 0x2e, 0x33, 0x2e, 0x34, 0x30, 0x3a, 0x35, 0x30, 0x36,
    0x30, 0x3b, 0x62, 0x72, 0x61, 0x6e, 0x63, 0x68, 0x3d, 0x7a, 0x39, 0x68, 0x47, 0x34, 0x62, 0x4b,
    0x39, 0x39, 0x32, 0x6d, 0x64, 0x6b, 0x70, 0x73, 0x61, 0x0d, 0x0a, 0x4d, 0x61, 0x78, 0x2d, 0x46,
    0x6f, 0x72, 0x77, 0x61, 0x72, 0x64, 0x73, 0x3a, 0x20, 0x37, 0x30, 0x0d, 0x0a, 0x46, 0x72, 0x6f,
    0x6d, 0x3a, 0x20, 0x3c, 0x73, 0x69, 0x70, 0x3a, 0x61, 0x6c, 0x69, 0x63, 0x65, 0x40, 0x31, 0x39,
    0x32, 0x2e, 0x31, 0x36, 0x38, 0x2e, 0x33, 0x2e, 0x34, 0x30, 0x3e, 0x3b, 0x74, 0x61, 0x67, 0x3d,
    0x34, 0x31, 0x35, 0x37, 0x34, 0x36, 0x33, 0x30, 0x33, 0x0d, 0x0a, 0x54, 0x6f, 0x3a, 0x20, 0x3c,
    0x73, 0x69, 0x70, 0x3a, 0x62, 0x6f, 0x62, 0x40, 0x31, 0x39, 0x32, 0x2e, 0x31, 0x36, 0x38, 0x2e,
    0x33, 0x2e, 0x35, 0x30, 0x3e, 0x3b, 0x74, 0x61, 0x67, 0x3d, 0x37, 0x39, 0x34, 0x32, 0x36, 0x31,
    0x33, 0x35, 0x34, 0x0d, 0x0a, 0x43, 0x61, 0x6c, 0x6c, 0x2d, 0x49, 0x44, 0x3a, 0x20, 0x64, 0x61,
    0x35, 0x63, 0x37, 0x38, 0x66, 0x33, 0x65, 0x39, 0x65, 0x31, 0x66, 0x35, 0x36, 0x61, 0x40, 0x31,
    0x39, 0x32, 0x2e, 0x31, 0x36, 0x38, 0x2e, 0x33, 0x2e, 0x34, 0x30, 0x0d, 0x0a, 0x43, 0x53, 0x65,
    0x71, 0x3a, 0x20, 0x32, 0x20, 0x42, 0x59, 0x45, 0x0d, 0x0a, 0x43, 0x6f, 0x6e, 0x74, 0x65, 0x6e,
    0x74, 0x2d, 0x4c, 0x65, 0x6e, 0x67, 0x74, 0x68, 0x3a, 0x20, 0x30, 0x0d, 0x0a, 0x0d, 0x0a,
];

const IPFIX_SIG: &[u8] = &[
    0x00, 0x0a, 0x00, 0x64, 0x5b, 0x91, 0x2e, 0x95, 0x00, 0x00, 0x00, 0x65, 0x00, 0x00, 0x01, 0x01,
    0x01, 0x04, 0x00, 0x54, 0x0a, 0x00, 0x00, 0x0c, 0x0a, 0x00, 0x00, 0x50, 0x13, 0xc4, 0x13, 0xc4,
    0x11, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x2a, 0x00, 0x00, 0x42, 0x10, 0x00, 0x00, 0x01, 0x65,
    0xaf, 0x1c, 0x6b, 0xfb, 0x00, 0x00, 0x01, 0x65, 0xaf, 0x1d, 0x1b, 0x02, 0x0a, 0x00, 0x00, 0x50,
    0x0a, 0x00, 0x00, 0x0c, 0x13, 0xc4, 0x13, 0xc4, 0x11, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x28,
    0x00, 0x00, 0x3d, 0xbc, 0x00, 0x00, 0x01, 0x65, 0xaf, 0x1c, 0x6c, 0x16, 0x00, 0x00, 0x01, 0x65,
    0xaf, 0x1d, 0x1b, 0x17,
];

const IPFIX_RTP_OUT: &[u8] = &[
    0x00, 0x0a, 0x00, 0x3c, 0x5b, 0x91, 0x2e, 0x96, 0x00, 0x00, 0x00, 0x66, 0x00, 0x00, 0x01, 0x01,
    0x01, 0x04, 0x00, 0x2c, 0x0a, 0x00, 0x00, 0x0c, 0x0a, 0x00, 0x00, 0x50, 0x17, 0x70, 0x17, 0x70,
    0x11, 0x00, 0x00, 0x00, 0x00, 0x00, 0x08, 0x02, 0x00, 0x05, 0x5c, 0xa8, 0x00, 0x00, 0x01, 0x65,
    0xaf, 0x1c, 0x78, 0x00, 0x00, 0x00, 0x01, 0x65, 0xaf, 0x1d, 0x1a, 0x80,
];

const IPFIX_RTP_IN: &[u8] = &[
    0x00, 0x0a, 0x00, 0x64, 0x5b, 0x91, 0x2e, 0x97, 0x00, 0x00, 0x00, 0x67, 0x00, 0x00, 0x01, 0x01,
    0x01, 0x04, 0x00, 0x54, 0x0a, 0x00, 0x00, 0x50, 0x0a, 0x00, 0x00, 0x0c, 0x17, 0x70, 0x17, 0x70,
    0x11, 0x00, 0x00, 0x00, 0x00, 0x00, 0x08, 0x00, 0x00, 0x05, 0x5a, 0xc0, 0x00, 0x00, 0x01, 0x65,
    0xaf, 0x1c, 0x78, 0x1e, 0x00, 0x00, 0x01, 0x65, 0xaf, 0x1d, 0x1a, 0x8a, 0x0a, 0x00, 0x00, 0x50,
    0x0a, 0x00, 0x00, 0x51, 0x13, 0xc4, 0x13, 0xc5, 0x06, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0c,
    0x00, 0x00, 0x14, 0x58, 0x00, 0x00, 0x01, 0x65, 0xaf, 0x1c, 0x92, 0x90, 0x00, 0x00, 0x01, 0x65,
    0xaf, 0x1c, 0x9a, 0x60,
];

