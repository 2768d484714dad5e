use std::sync::Arc;
use crate::config::structs::configuration::Configuration;
use crate::database::structs::group_cache::GroupCache;
use crate::database::traits::swarm_store::SwarmStore;
use crate::dispatcher::structs::announce_dispatcher::AnnounceDispatcher;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::enums::announce_response::AnnounceResponse;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

/// Reason text of the code 100 failure.
pub const INTERNAL_FAILURE_REASON: &str = "Tracker temporarily unavailable, please try again later.";

impl TorrentTracker {
    pub fn new(config: Arc<Configuration>, store: Arc<dyn SwarmStore>, dispatcher: AnnounceDispatcher, stats: Arc<StatsAtomics>) -> TorrentTracker
    {
        TorrentTracker {
            config,
            store,
            dispatcher,
            group_cache: GroupCache::new(),
            stats,
        }
    }

    pub fn failure_response(&self, reason: String) -> AnnounceResponse
    {
        AnnounceResponse::Failure {
            reason,
            min_interval: self.config.tracker_config.request_interval_minimum,
        }
    }

    pub fn internal_failure_response(&self) -> AnnounceResponse
    {
        self.failure_response(String::from(INTERNAL_FAILURE_REASON))
    }
}
