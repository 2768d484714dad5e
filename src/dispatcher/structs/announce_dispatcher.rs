use std::sync::Arc;
use tokio::sync::mpsc;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::announce_job::AnnounceJob;

#[derive(Debug, Clone)]
pub struct AnnounceDispatcher {
    pub(crate) sender: mpsc::Sender<AnnounceJob>,
    pub(crate) stats: Arc<StatsAtomics>,
}
