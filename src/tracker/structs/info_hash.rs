//! BitTorrent info hash identifier.

/// A 20-byte BitTorrent info hash.
///
/// The info hash is the SHA-1 hash of the "info" dictionary in a torrent file.
/// Announce requests carry it as 20 raw, percent-encoded bytes; the swarm store
/// looks torrents up by its 40 character lowercase hex form (see `Display`).
///
/// # Example
///
/// ```rust
/// use torrust_announce::tracker::structs::info_hash::InfoHash;
///
/// let hash = InfoHash([0xabu8; 20]);
/// assert_eq!(hash.to_string(), "ab".repeat(20));
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct InfoHash(pub [u8; 20]);
