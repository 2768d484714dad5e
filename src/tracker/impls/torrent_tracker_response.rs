use rand::RngExt;
use crate::codec::codec::encode_compact_peer;
use crate::database::enums::store_error::StoreError;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::enums::announce_response::AnnounceResponse;
use crate::tracker::structs::account::Account;
use crate::tracker::structs::announce_request::AnnounceRequest;
use crate::tracker::structs::torrent::Torrent;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    /// Random re-announce interval within the configured bounds.
    pub fn announce_interval(&self) -> u64
    {
        let tracker_config = &self.config.tracker_config;
        if tracker_config.request_interval_max <= tracker_config.request_interval_min {
            return tracker_config.request_interval_min;
        }
        rand::rng().random_range(tracker_config.request_interval_min..=tracker_config.request_interval_max)
    }

    /// Success dictionary for a request that passed every check.
    ///
    /// `complete` and `incomplete` are the torrent's cached counters. Seeders
    /// only receive leechers, stopped clients receive no peers at all.
    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn build_success_response(&self, request: &AnnounceRequest, account: &Account, torrent: &Torrent) -> Result<AnnounceResponse, StoreError>
    {
        let mut peers = Vec::new();
        let mut peers6 = Vec::new();

        if request.event() != AnnounceEvent::Stopped {
            let limit = request.numwant().min(self.config.tracker_config.peers_returned);
            if limit > 0 {
                let candidates = self.store.find_swarm_peers(torrent.id, account.id, request.is_seeding(), limit).await?;
                for candidate in candidates.iter() {
                    if let (Some(ip), Some(port)) = (candidate.ip, candidate.port) {
                        encode_compact_peer(ip, port).append_to(&mut peers, &mut peers6);
                    }
                }
            }
        }

        Ok(AnnounceResponse::Success {
            interval: self.announce_interval(),
            min_interval: self.config.tracker_config.request_interval_minimum,
            complete: torrent.seeders,
            incomplete: torrent.leechers,
            peers,
            peers6,
        })
    }
}
