//! Tracker wire format.
//!
//! Pure functions turning a raw announce query string into an
//! [`AnnounceRequest`](crate::tracker::structs::announce_request::AnnounceRequest),
//! packing peers into compact form (BEP 23 and BEP 7), and serializing
//! responses as bencoded dictionaries. Nothing in here performs I/O.

/// Compact peer representation.
pub mod enums;

pub mod impls;

/// Query parsing, announce decoding, compact packing and response encoding.
#[allow(clippy::module_inception)]
pub mod codec;
