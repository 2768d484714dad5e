/// Byte access and peer list packing for `CompactPeer`.
pub mod compact_peer;
