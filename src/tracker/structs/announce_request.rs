use std::net::IpAddr;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;

/// A decoded and field-validated announce.
///
/// Only the protocol codec builds this struct, after every field-level check
/// passed. The fields are crate private and exposed through getters, so the
/// request can not be altered once built.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AnnounceRequest {
    pub(crate) info_hash: InfoHash,
    pub(crate) peer_id: PeerId,
    pub(crate) port: u16,
    pub(crate) uploaded: u64,
    pub(crate) downloaded: u64,
    pub(crate) left: u64,
    pub(crate) event: AnnounceEvent,
    pub(crate) numwant: u64,
    pub(crate) corrupt: u64,
    pub(crate) key: String,
    pub(crate) ip_address: IpAddr,
    pub(crate) user_agent: String,
    pub(crate) received_at: DateTime<Utc>,
}
