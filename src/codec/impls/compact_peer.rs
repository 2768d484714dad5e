use crate::codec::enums::compact_peer::CompactPeer;

impl CompactPeer {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            CompactPeer::V4(bytes) => bytes,
            CompactPeer::V6(bytes) => bytes,
        }
    }

    /// Appends this peer to the list matching its address family.
    pub fn append_to(&self, peers: &mut Vec<u8>, peers6: &mut Vec<u8>) {
        match self {
            CompactPeer::V4(bytes) => peers.extend_from_slice(bytes),
            CompactPeer::V6(bytes) => peers6.extend_from_slice(bytes),
        }
    }
}
