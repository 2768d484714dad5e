use std::net::IpAddr;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::tracker::structs::peer_id::PeerId;

/// One swarm membership, unique per `(torrent_id, user_id, peer_id)`.
///
/// A record only exists after a started (or completed) announce was
/// processed, the completion consistency check relies on that.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PeerRecord {
    pub torrent_id: u64,
    pub user_id: u64,
    pub peer_id: PeerId,
    pub ip: Option<IpAddr>,
    pub port: Option<u16>,
    pub seeder: bool,
    pub uploaded: u64,
    pub downloaded: u64,
    pub left: u64,
    pub agent: String,
    pub updated_at: DateTime<Utc>,
}
