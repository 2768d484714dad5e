use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use crate::dispatcher::enums::dispatch_error::DispatchError;
use crate::dispatcher::structs::announce_dispatcher::AnnounceDispatcher;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::announce_job::AnnounceJob;

impl AnnounceDispatcher {
    /// Creates the queue. The receiver goes to an `AnnounceWorker`.
    pub fn new(capacity: usize, stats: Arc<StatsAtomics>) -> (AnnounceDispatcher, mpsc::Receiver<AnnounceJob>)
    {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        (AnnounceDispatcher { sender, stats }, receiver)
    }

    /// Hands `job` to the worker without waiting.
    pub fn enqueue(&self, job: AnnounceJob) -> Result<(), DispatchError>
    {
        match self.sender.try_send(job) {
            Ok(_) => {
                self.stats.update_stats(StatsEvent::JobsEnqueued, 1);
                Ok(())
            }
            Err(TrySendError::Full(_)) => {
                self.stats.update_stats(StatsEvent::JobsDropped, 1);
                Err(DispatchError::QueueFull { capacity: self.sender.max_capacity() })
            }
            Err(TrySendError::Closed(_)) => {
                self.stats.update_stats(StatsEvent::JobsDropped, 1);
                Err(DispatchError::Closed)
            }
        }
    }

    /// Jobs waiting in the queue.
    pub fn pending(&self) -> usize
    {
        self.sender.max_capacity() - self.sender.capacity()
    }
}
