use std::net::IpAddr;
use log::{debug, error, warn};
use crate::codec::codec::decode;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::announce_error::AnnounceError;
use crate::tracker::enums::announce_response::AnnounceResponse;
use crate::tracker::impls::torrent_tracker_validation::{check_client, check_passkey};
use crate::tracker::structs::announce_job::AnnounceJob;
use crate::tracker::structs::torrent_tracker::TorrentTracker;
use crate::tracker::types::announce_headers::AnnounceHeaders;

impl TorrentTracker {
    /// Answers one announce. Never fails: refusals and internal faults both
    /// come back as a failure dictionary.
    ///
    /// `headers` must use lowercase names. On success the work item is handed
    /// to the dispatcher without waiting for it.
    #[tracing::instrument(level = "debug", skip(self, passkey, headers))]
    pub async fn handle_announce(&self, passkey: Option<&str>, query: &str, headers: &AnnounceHeaders, remote_addr: IpAddr) -> AnnounceResponse
    {
        match self.process_announce(passkey, query, headers, remote_addr).await {
            Ok((response, job)) => {
                if let Err(dispatch_error) = self.dispatcher.enqueue(job) {
                    warn!("[DISPATCH] Unable to dispatch announce from {remote_addr}: {dispatch_error}");
                }
                self.stats.update_stats(StatsEvent::AnnouncesHandled, 1);
                response
            }
            Err(AnnounceError::Tracker(tracker_error)) => {
                debug!("[ANNOUNCE] Refused announce from {remote_addr} with code {}: {tracker_error}", tracker_error.code());
                self.stats.update_stats(StatsEvent::AnnouncesFailed, 1);
                self.failure_response(tracker_error.to_string())
            }
            Err(AnnounceError::Store(store_error)) => {
                error!("[ANNOUNCE] Swarm store failure while answering {remote_addr}: {store_error}");
                sentry::capture_error(&store_error);
                self.stats.update_stats(StatsEvent::InternalErrors, 1);
                self.internal_failure_response()
            }
        }
    }

    /// Runs every check in order and builds the success reply. The first
    /// failing check ends the pipeline.
    pub async fn process_announce(&self, passkey: Option<&str>, query: &str, headers: &AnnounceHeaders, remote_addr: IpAddr) -> Result<(AnnounceResponse, AnnounceJob), AnnounceError>
    {
        check_client(headers, &self.config.tracker_config.blacklisted_clients)?;
        let passkey = check_passkey(passkey)?;
        let request = decode(query, headers, remote_addr)?;
        debug!(
            "[ANNOUNCE] {} peer {} client {} event {:?}",
            request.info_hash(),
            request.peer_id(),
            request.peer_id().get_client_prefix().unwrap_or("??"),
            request.event()
        );

        let account = self.resolve_account(passkey, request.left()).await?;
        let torrent = self.resolve_torrent(request.info_hash()).await?;
        self.check_completion(&request, &account, &torrent).await?;
        self.check_min_interval(&request, &account, &torrent).await?;
        self.check_max_connections(&account, &torrent).await?;
        self.check_download_slots(&request, &account).await?;

        let response = self.build_success_response(&request, &account, &torrent).await?;
        Ok((response, AnnounceJob { request, account, torrent }))
    }
}
