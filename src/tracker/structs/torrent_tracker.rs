use std::sync::Arc;
use crate::config::structs::configuration::Configuration;
use crate::database::structs::group_cache::GroupCache;
use crate::database::traits::swarm_store::SwarmStore;
use crate::dispatcher::structs::announce_dispatcher::AnnounceDispatcher;
use crate::stats::structs::stats_atomics::StatsAtomics;

pub struct TorrentTracker {
    pub config: Arc<Configuration>,
    pub store: Arc<dyn SwarmStore>,
    pub dispatcher: AnnounceDispatcher,
    pub group_cache: GroupCache,
    pub stats: Arc<StatsAtomics>,
}
