use serde::{Deserialize, Serialize};
use crate::tracker::enums::moderation_status::ModerationStatus;
use crate::tracker::structs::info_hash::InfoHash;

/// A torrent resolved from its info hash.
///
/// `seeders` and `leechers` are cached counters refreshed by the announce
/// worker, they are not recomputed while answering an announce.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Torrent {
    pub id: u64,
    pub info_hash: InfoHash,
    pub status: ModerationStatus,
    pub free: bool,
    pub double_upload: bool,
    pub seeders: u64,
    pub leechers: u64,
    pub times_completed: u64,
}
