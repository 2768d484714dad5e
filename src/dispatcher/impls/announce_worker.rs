use std::sync::Arc;
use std::time::Duration;
use log::{debug, error, info, warn};
use tokio::sync::mpsc;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::tracker_config::TrackerConfig;
use crate::database::enums::store_error::StoreError;
use crate::database::traits::swarm_store::SwarmStore;
use crate::dispatcher::structs::announce_worker::AnnounceWorker;
use crate::dispatcher::structs::job_progress::JobProgress;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::announce_job::AnnounceJob;
use crate::tracker::structs::peer_record::PeerRecord;

/// Transfer to add to the account for one announce.
///
/// Deltas are taken against the previous peer record. Counters lower than the
/// recorded ones mean the client restarted its session, the reported value
/// is credited as is. Freeleech zeroes the download, double upload doubles
/// the upload; torrent flags and site-wide toggles combine with OR.
pub fn credited_transfer(job: &AnnounceJob, previous: Option<&PeerRecord>, tracker_config: &TrackerConfig) -> (u64, u64)
{
    let request = &job.request;
    let delta = |current: u64, recorded: u64| if current >= recorded { current - recorded } else { current };
    let (uploaded, downloaded) = match previous {
        None => (request.uploaded(), request.downloaded()),
        Some(previous) => (
            delta(request.uploaded(), previous.uploaded),
            delta(request.downloaded(), previous.downloaded),
        ),
    };
    let downloaded = if job.torrent.free || tracker_config.freeleech { 0 } else { downloaded };
    let uploaded = if job.torrent.double_upload || tracker_config.double_upload { uploaded.saturating_mul(2) } else { uploaded };
    (uploaded, downloaded)
}

/// The peer record an announce leaves behind.
pub fn peer_record_from_job(job: &AnnounceJob) -> PeerRecord
{
    let request = &job.request;
    PeerRecord {
        torrent_id: job.torrent.id,
        user_id: job.account.id,
        peer_id: *request.peer_id(),
        ip: Some(request.ip_address().to_canonical()),
        port: Some(request.port()),
        seeder: request.is_seeding(),
        uploaded: request.uploaded(),
        downloaded: request.downloaded(),
        left: request.left(),
        agent: request.user_agent().to_string(),
        updated_at: request.received_at(),
    }
}

impl AnnounceWorker {
    pub fn new(receiver: mpsc::Receiver<AnnounceJob>, store: Arc<dyn SwarmStore>, config: Arc<Configuration>, stats: Arc<StatsAtomics>) -> AnnounceWorker
    {
        AnnounceWorker { receiver, store, config, stats }
    }

    /// Consumes jobs until every dispatcher is dropped.
    pub async fn run(mut self)
    {
        info!("[WORKER] Announce worker started");
        while let Some(job) = self.receiver.recv().await {
            self.process_with_retry(job).await;
        }
        info!("[WORKER] Announce queue closed, worker stopped");
    }

    /// Returns whether the job was fully applied.
    pub async fn process_with_retry(&self, job: AnnounceJob) -> bool
    {
        let max_attempts = self.config.dispatcher.max_attempts.max(1);
        let mut progress = JobProgress::default();
        for attempt in 1..=max_attempts {
            match self.process(&job, &mut progress).await {
                Ok(_) => {
                    self.stats.update_stats(StatsEvent::JobsProcessed, 1);
                    return true;
                }
                Err(error) => {
                    warn!(
                        "[WORKER] Attempt {attempt}/{max_attempts} failed for torrent {} user {}: {error}",
                        job.torrent.id, job.account.id
                    );
                    if attempt < max_attempts {
                        tokio::time::sleep(Duration::from_millis(self.config.dispatcher.retry_delay_ms.saturating_mul(attempt as u64))).await;
                    }
                }
            }
        }
        error!(
            "[WORKER] Giving up on announce of torrent {} user {} after {max_attempts} attempts",
            job.torrent.id, job.account.id
        );
        self.stats.update_stats(StatsEvent::JobsFailed, 1);
        false
    }

    /// Applies the remaining steps of `job`, recording each one in `progress`.
    #[tracing::instrument(level = "debug", skip(self, job, progress))]
    pub async fn process(&self, job: &AnnounceJob, progress: &mut JobProgress) -> Result<(), StoreError>
    {
        let request = &job.request;
        let torrent_id = job.torrent.id;
        let user_id = job.account.id;

        let credit = match progress.credit {
            Some(credit) => credit,
            None => {
                let previous = self.store.find_peer(torrent_id, user_id, request.peer_id()).await?;
                let credit = credited_transfer(job, previous.as_ref(), &self.config.tracker_config);
                progress.credit = Some(credit);
                credit
            }
        };

        if !progress.peer_written {
            if request.event() == AnnounceEvent::Stopped {
                self.store.remove_peer(torrent_id, user_id, request.peer_id()).await?;
            } else {
                self.store.upsert_peer(&peer_record_from_job(job)).await?;
            }
            progress.peer_written = true;
        }

        if !progress.account_credited {
            let (uploaded, downloaded) = credit;
            if uploaded > 0 || downloaded > 0 {
                self.store.credit_account(user_id, uploaded, downloaded).await?;
            }
            progress.account_credited = true;
        }

        if request.event() == AnnounceEvent::Completed && !progress.completion_counted {
            self.store.increment_completed(torrent_id).await?;
            progress.completion_counted = true;
        }

        let (seeders, leechers) = self.store.refresh_torrent_counters(torrent_id).await?;
        debug!("[WORKER] Torrent {torrent_id} now has {seeders} seeders and {leechers} leechers");
        Ok(())
    }
}
