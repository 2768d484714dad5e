use lazy_static::lazy_static;
use rand::RngExt;
use regex::Regex;
use crate::common::common::is_lower_hex;
use crate::database::structs::group_index::GroupIndex;
use crate::tracker::enums::announce_error::AnnounceError;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::account::Account;
use crate::tracker::structs::announce_request::AnnounceRequest;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::torrent::Torrent;
use crate::tracker::structs::torrent_tracker::TorrentTracker;
use crate::tracker::types::announce_headers::AnnounceHeaders;

pub const MAX_USER_AGENT_LENGTH: usize = 64;
pub const PASSKEY_LENGTH: usize = 32;

/// Headers real BitTorrent clients never send.
pub const SUSPICIOUS_HEADERS: [&str; 4] = ["accept-language", "referer", "accept-charset", "want-digest"];

lazy_static! {
    static ref BROWSER_AGENT: Regex = Regex::new(r"(?i)(Mozilla|Browser|Chrome|Safari|AppleWebKit|Opera|Links|Lynx|Bot|Unknown)")
        .expect("browser user-agent pattern");
}

/// Client checks on the request headers. Returns the User-Agent.
///
/// `blacklisted_clients` entries must equal the User-Agent exactly.
pub fn check_client(headers: &AnnounceHeaders, blacklisted_clients: &[String]) -> Result<String, TrackerError>
{
    let agent = headers.get("user-agent")
        .map(|agent| agent.trim())
        .filter(|agent| !agent.is_empty())
        .ok_or(TrackerError::UaMissing)?;

    if let Some(header) = SUSPICIOUS_HEADERS.iter().find(|header| headers.contains_key(**header)) {
        return Err(TrackerError::SuspiciousHeaders { header });
    }
    if agent.len() > MAX_USER_AGENT_LENGTH {
        return Err(TrackerError::UaTooLong { length: agent.len() });
    }
    if BROWSER_AGENT.is_match(agent) {
        return Err(TrackerError::UaLooksLikeBrowser);
    }
    if blacklisted_clients.iter().any(|client| client == agent) {
        return Err(TrackerError::UaBlacklisted { agent: agent.to_string() });
    }
    Ok(agent.to_string())
}

pub fn check_passkey(passkey: Option<&str>) -> Result<&str, TrackerError>
{
    let passkey = passkey.filter(|passkey| !passkey.is_empty()).ok_or(TrackerError::PasskeyMissing)?;
    let length = passkey.chars().count();
    if length != PASSKEY_LENGTH {
        return Err(TrackerError::PasskeyLengthInvalid { expected: PASSKEY_LENGTH, actual: length });
    }
    if !is_lower_hex(passkey) {
        return Err(TrackerError::PasskeyFormatInvalid);
    }
    Ok(passkey)
}

pub fn check_account(account: Option<Account>, groups: &GroupIndex, left: u64) -> Result<Account, TrackerError>
{
    let account = account.ok_or(TrackerError::UserUnknown)?;
    if !account.active || groups.is_validating(account.group_id) {
        return Err(TrackerError::UserRestricted { status: "Unactivated/Validating" });
    }
    if groups.is_banned(account.group_id) {
        return Err(TrackerError::UserRestricted { status: "Banned" });
    }
    if groups.is_disabled(account.group_id) {
        return Err(TrackerError::UserRestricted { status: "Disabled" });
    }
    if !account.can_download && left != 0 {
        return Err(TrackerError::DownloadDenied);
    }
    Ok(account)
}

pub fn check_torrent(torrent: Option<Torrent>) -> Result<Torrent, TrackerError>
{
    let torrent = torrent.ok_or(TrackerError::TorrentUnknown)?;
    if !torrent.status.is_approved() {
        return Err(TrackerError::TorrentNotApproved { status: torrent.status });
    }
    Ok(torrent)
}

impl TorrentTracker {
    #[tracing::instrument(level = "debug", skip(self, passkey))]
    pub async fn resolve_account(&self, passkey: &str, left: u64) -> Result<Account, AnnounceError>
    {
        let account = self.store.find_account_by_passkey(passkey).await?;
        let groups = self.group_cache.get(self.store.as_ref()).await?;
        Ok(check_account(account, &groups, left)?)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn resolve_torrent(&self, info_hash: &InfoHash) -> Result<Torrent, AnnounceError>
    {
        let torrent = self.store.find_torrent_by_info_hash(info_hash).await?;
        Ok(check_torrent(torrent)?)
    }

    /// A completed event needs the peer record of a previous start.
    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn check_completion(&self, request: &AnnounceRequest, account: &Account, torrent: &Torrent) -> Result<(), AnnounceError>
    {
        if request.event() != AnnounceEvent::Completed {
            return Ok(());
        }
        if !self.store.peer_exists(torrent.id, account.id, request.peer_id()).await? {
            return Err(TrackerError::CompletedWithoutPeer.into());
        }
        Ok(())
    }

    /// Refuses announces arriving within a random window of one to two
    /// `min_interval.interval` after the previous one of the same peer.
    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn check_min_interval(&self, request: &AnnounceRequest, account: &Account, torrent: &Torrent) -> Result<(), AnnounceError>
    {
        let min_interval = &self.config.tracker_config.min_interval;
        if !min_interval.enabled || min_interval.interval == 0 {
            return Ok(());
        }
        if matches!(request.event(), AnnounceEvent::Completed | AnnounceEvent::Stopped) {
            return Ok(());
        }
        let Some(peer) = self.store.find_peer(torrent.id, account.id, request.peer_id()).await? else {
            return Ok(());
        };
        let window = rand::rng().random_range(min_interval.interval..=min_interval.interval.saturating_mul(2));
        let elapsed = request.received_at().signed_duration_since(peer.updated_at).num_seconds();
        if elapsed < i64::try_from(window).unwrap_or(i64::MAX) {
            return Err(TrackerError::AnnounceTooSoon { interval: min_interval.interval }.into());
        }
        Ok(())
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn check_max_connections(&self, account: &Account, torrent: &Torrent) -> Result<(), AnnounceError>
    {
        let limit = self.config.tracker_config.rate_limit;
        let connections = self.store.count_user_torrent_peers(torrent.id, account.id).await?;
        if connections > limit {
            return Err(TrackerError::TooManyConnections { limit }.into());
        }
        Ok(())
    }

    /// Leeching is limited to the group's slot count, across all torrents.
    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn check_download_slots(&self, request: &AnnounceRequest, account: &Account) -> Result<(), AnnounceError>
    {
        if !self.config.tracker_config.slots_system.enabled || request.is_seeding() {
            return Ok(());
        }
        let groups = self.group_cache.get(self.store.as_ref()).await?;
        let Some(slots) = groups.download_slots(account.group_id) else {
            return Ok(());
        };
        let leeching = self.store.count_user_leeching_peers(account.id, request.peer_id()).await?;
        if leeching >= u64::try_from(slots).unwrap_or(0) {
            return Err(TrackerError::SlotsExhausted { slots }.into());
        }
        Ok(())
    }
}
