use std::net::IpAddr;
use chrono::{DateTime, Utc};
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::announce_request::AnnounceRequest;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;

impl AnnounceRequest {
    #[inline]
    pub fn info_hash(&self) -> &InfoHash {
        &self.info_hash
    }
    #[inline]
    pub fn peer_id(&self) -> &PeerId {
        &self.peer_id
    }
    #[inline]
    pub fn port(&self) -> u16 {
        self.port
    }
    #[inline]
    pub fn uploaded(&self) -> u64 {
        self.uploaded
    }
    #[inline]
    pub fn downloaded(&self) -> u64 {
        self.downloaded
    }
    #[inline]
    pub fn left(&self) -> u64 {
        self.left
    }
    #[inline]
    pub fn event(&self) -> AnnounceEvent {
        self.event
    }
    #[inline]
    pub fn numwant(&self) -> u64 {
        self.numwant
    }
    #[inline]
    pub fn corrupt(&self) -> u64 {
        self.corrupt
    }
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }
    #[inline]
    pub fn ip_address(&self) -> IpAddr {
        self.ip_address
    }
    #[inline]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
    #[inline]
    pub fn received_at(&self) -> DateTime<Utc> {
        self.received_at
    }

    /// A client with nothing left to download only seeds.
    #[inline]
    pub fn is_seeding(&self) -> bool {
        self.left == 0
    }
}
