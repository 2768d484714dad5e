use serde::{Deserialize, Serialize};
use crate::tracker::structs::account::Account;
use crate::tracker::structs::announce_request::AnnounceRequest;
use crate::tracker::structs::torrent::Torrent;

/// Work item handed to the announce dispatcher after a successful announce.
///
/// The worker consuming it upserts or removes the peer record, credits the
/// account and refreshes the torrent counters.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AnnounceJob {
    pub request: AnnounceRequest,
    pub account: Account,
    pub torrent: Torrent,
}
