use std::sync::Arc;
use tokio::sync::mpsc;
use crate::config::structs::configuration::Configuration;
use crate::database::traits::swarm_store::SwarmStore;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::announce_job::AnnounceJob;

pub struct AnnounceWorker {
    pub(crate) receiver: mpsc::Receiver<AnnounceJob>,
    pub(crate) store: Arc<dyn SwarmStore>,
    pub(crate) config: Arc<Configuration>,
    pub(crate) stats: Arc<StatsAtomics>,
}
