//! BitTorrent peer identifier.

/// A 20-byte peer identifier chosen by the client.
///
/// Together with the torrent and the account it identifies exactly one swarm
/// membership (`PeerRecord`).
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct PeerId(pub [u8; 20]);
