use async_trait::async_trait;
use crate::database::enums::store_error::StoreError;
use crate::tracker::structs::account::Account;
use crate::tracker::structs::group::Group;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::peer_record::PeerRecord;
use crate::tracker::structs::torrent::Torrent;

/// Storage capability injected into the tracker.
///
/// The validation pipeline and the response builder only call the read
/// methods. The write methods (`upsert_peer` and below) belong to the announce
/// worker.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SwarmStore: Send + Sync {
    async fn find_account_by_passkey(&self, passkey: &str) -> Result<Option<Account>, StoreError>;

    /// Looks a torrent up whatever its moderation status.
    async fn find_torrent_by_info_hash(&self, info_hash: &InfoHash) -> Result<Option<Torrent>, StoreError>;

    async fn find_peer(&self, torrent_id: u64, user_id: u64, peer_id: &PeerId) -> Result<Option<PeerRecord>, StoreError>;

    async fn peer_exists(&self, torrent_id: u64, user_id: u64, peer_id: &PeerId) -> Result<bool, StoreError> {
        Ok(self.find_peer(torrent_id, user_id, peer_id).await?.is_some())
    }

    /// Peer records of `user_id` on `torrent_id`, any peer id.
    async fn count_user_torrent_peers(&self, torrent_id: u64, user_id: u64) -> Result<u64, StoreError>;

    /// Leeching peer records of `user_id` across all torrents, without the
    /// records of `exclude_peer_id`.
    async fn count_user_leeching_peers(&self, user_id: u64, exclude_peer_id: &PeerId) -> Result<u64, StoreError>;

    /// Up to `limit` randomly ordered peers of `torrent_id` that do not belong
    /// to `exclude_user_id`. With `leechers_only` seeders are left out.
    async fn find_swarm_peers(&self, torrent_id: u64, exclude_user_id: u64, leechers_only: bool, limit: u64) -> Result<Vec<PeerRecord>, StoreError>;

    async fn list_groups(&self) -> Result<Vec<Group>, StoreError>;

    async fn upsert_peer(&self, peer: &PeerRecord) -> Result<(), StoreError>;

    async fn remove_peer(&self, torrent_id: u64, user_id: u64, peer_id: &PeerId) -> Result<bool, StoreError>;

    async fn credit_account(&self, user_id: u64, uploaded: u64, downloaded: u64) -> Result<(), StoreError>;

    async fn increment_completed(&self, torrent_id: u64) -> Result<(), StoreError>;

    /// Recounts seeders and leechers of `torrent_id`, stores and returns them.
    async fn refresh_torrent_counters(&self, torrent_id: u64) -> Result<(u64, u64), StoreError>;
}
