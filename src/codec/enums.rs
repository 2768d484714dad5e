/// A peer packed in compact format, tagged by address family.
pub mod compact_peer;
