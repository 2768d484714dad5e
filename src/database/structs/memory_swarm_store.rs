use std::collections::{BTreeMap, HashMap};
use parking_lot::RwLock;
use crate::tracker::structs::account::Account;
use crate::tracker::structs::group::Group;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::peer_record::PeerRecord;
use crate::tracker::structs::torrent::Torrent;

pub type PeerKey = (u64, u64, PeerId);

/// Swarm store held in process memory.
///
/// Peer records are ordered by `(torrent_id, user_id, peer_id)` so the records
/// of one torrent form a contiguous range.
#[derive(Debug, Default)]
pub struct MemorySwarmStore {
    pub(crate) accounts: RwLock<BTreeMap<u64, Account>>,
    pub(crate) passkeys: RwLock<HashMap<String, u64>>,
    pub(crate) groups: RwLock<BTreeMap<u64, Group>>,
    pub(crate) torrents: RwLock<BTreeMap<u64, Torrent>>,
    pub(crate) info_hashes: RwLock<HashMap<InfoHash, u64>>,
    pub(crate) peers: RwLock<BTreeMap<PeerKey, PeerRecord>>,
}
