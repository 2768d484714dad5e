use std::ops::RangeInclusive;
use async_trait::async_trait;
use rand::seq::SliceRandom;
use crate::database::enums::store_error::StoreError;
use crate::database::structs::memory_swarm_store::{MemorySwarmStore, PeerKey};
use crate::database::traits::swarm_store::SwarmStore;
use crate::tracker::structs::account::Account;
use crate::tracker::structs::group::Group;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::peer_record::PeerRecord;
use crate::tracker::structs::torrent::Torrent;

fn torrent_range(torrent_id: u64) -> RangeInclusive<PeerKey> {
    (torrent_id, 0, PeerId([0u8; 20]))..=(torrent_id, u64::MAX, PeerId([0xffu8; 20]))
}

impl MemorySwarmStore {
    pub fn new() -> MemorySwarmStore
    {
        MemorySwarmStore::default()
    }

    pub fn insert_account(&self, account: Account)
    {
        let mut passkeys = self.passkeys.write();
        let mut accounts = self.accounts.write();
        if let Some(previous) = accounts.get(&account.id) {
            passkeys.remove(&previous.passkey);
        }
        passkeys.insert(account.passkey.clone(), account.id);
        accounts.insert(account.id, account);
    }

    pub fn insert_group(&self, group: Group)
    {
        self.groups.write().insert(group.id, group);
    }

    pub fn insert_torrent(&self, torrent: Torrent)
    {
        let mut info_hashes = self.info_hashes.write();
        let mut torrents = self.torrents.write();
        if let Some(previous) = torrents.get(&torrent.id) {
            info_hashes.remove(&previous.info_hash);
        }
        info_hashes.insert(torrent.info_hash, torrent.id);
        torrents.insert(torrent.id, torrent);
    }

    pub fn insert_peer(&self, peer: PeerRecord)
    {
        self.peers.write().insert((peer.torrent_id, peer.user_id, peer.peer_id), peer);
    }

    pub fn get_account(&self, user_id: u64) -> Option<Account>
    {
        self.accounts.read().get(&user_id).cloned()
    }

    pub fn get_torrent(&self, torrent_id: u64) -> Option<Torrent>
    {
        self.torrents.read().get(&torrent_id).cloned()
    }

    pub fn peer_count(&self) -> usize
    {
        self.peers.read().len()
    }
}

#[async_trait]
impl SwarmStore for MemorySwarmStore {
    #[tracing::instrument(level = "debug", skip(self, passkey))]
    async fn find_account_by_passkey(&self, passkey: &str) -> Result<Option<Account>, StoreError>
    {
        let user_id = match self.passkeys.read().get(passkey) {
            None => return Ok(None),
            Some(user_id) => *user_id,
        };
        Ok(self.accounts.read().get(&user_id).cloned())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn find_torrent_by_info_hash(&self, info_hash: &InfoHash) -> Result<Option<Torrent>, StoreError>
    {
        let torrent_id = match self.info_hashes.read().get(info_hash) {
            None => return Ok(None),
            Some(torrent_id) => *torrent_id,
        };
        Ok(self.torrents.read().get(&torrent_id).cloned())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn find_peer(&self, torrent_id: u64, user_id: u64, peer_id: &PeerId) -> Result<Option<PeerRecord>, StoreError>
    {
        Ok(self.peers.read().get(&(torrent_id, user_id, *peer_id)).cloned())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn count_user_torrent_peers(&self, torrent_id: u64, user_id: u64) -> Result<u64, StoreError>
    {
        let range = (torrent_id, user_id, PeerId([0u8; 20]))..=(torrent_id, user_id, PeerId([0xffu8; 20]));
        Ok(self.peers.read().range(range).count() as u64)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn count_user_leeching_peers(&self, user_id: u64, exclude_peer_id: &PeerId) -> Result<u64, StoreError>
    {
        Ok(self.peers.read()
            .values()
            .filter(|peer| peer.user_id == user_id && !peer.seeder && peer.peer_id != *exclude_peer_id)
            .count() as u64)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn find_swarm_peers(&self, torrent_id: u64, exclude_user_id: u64, leechers_only: bool, limit: u64) -> Result<Vec<PeerRecord>, StoreError>
    {
        let mut candidates: Vec<PeerRecord> = self.peers.read()
            .range(torrent_range(torrent_id))
            .map(|(_, peer)| peer)
            .filter(|peer| peer.user_id != exclude_user_id && (!leechers_only || !peer.seeder))
            .cloned()
            .collect();
        candidates.shuffle(&mut rand::rng());
        candidates.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        Ok(candidates)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn list_groups(&self) -> Result<Vec<Group>, StoreError>
    {
        Ok(self.groups.read().values().cloned().collect())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn upsert_peer(&self, peer: &PeerRecord) -> Result<(), StoreError>
    {
        self.insert_peer(peer.clone());
        Ok(())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn remove_peer(&self, torrent_id: u64, user_id: u64, peer_id: &PeerId) -> Result<bool, StoreError>
    {
        Ok(self.peers.write().remove(&(torrent_id, user_id, *peer_id)).is_some())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn credit_account(&self, user_id: u64, uploaded: u64, downloaded: u64) -> Result<(), StoreError>
    {
        match self.accounts.write().get_mut(&user_id) {
            None => Err(StoreError::CorruptRecord(format!("account {user_id} does not exist"))),
            Some(account) => {
                account.uploaded = account.uploaded.saturating_add(uploaded);
                account.downloaded = account.downloaded.saturating_add(downloaded);
                Ok(())
            }
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn increment_completed(&self, torrent_id: u64) -> Result<(), StoreError>
    {
        match self.torrents.write().get_mut(&torrent_id) {
            None => Err(StoreError::CorruptRecord(format!("torrent {torrent_id} does not exist"))),
            Some(torrent) => {
                torrent.times_completed += 1;
                Ok(())
            }
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn refresh_torrent_counters(&self, torrent_id: u64) -> Result<(u64, u64), StoreError>
    {
        let (seeders, leechers) = self.peers.read()
            .range(torrent_range(torrent_id))
            .fold((0u64, 0u64), |(seeders, leechers), (_, peer)| {
                if peer.seeder { (seeders + 1, leechers) } else { (seeders, leechers + 1) }
            });
        match self.torrents.write().get_mut(&torrent_id) {
            None => Err(StoreError::CorruptRecord(format!("torrent {torrent_id} does not exist"))),
            Some(torrent) => {
                torrent.seeders = seeders;
                torrent.leechers = leechers;
                Ok((seeders, leechers))
            }
        }
    }
}
