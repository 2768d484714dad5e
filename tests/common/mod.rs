#![allow(dead_code)]
use std::net::IpAddr;
use std::sync::Arc;
use bip_bencode::{BDecodeOpt, BDictAccess, BRefAccess, BencodeRef};
use chrono::{TimeDelta, Utc};
use percent_encoding::{percent_encode, NON_ALPHANUMERIC};
use rand::RngExt;
use tokio::sync::mpsc;
use torrust_announce::config::structs::configuration::Configuration;
use torrust_announce::config::structs::http_trackers_config::HttpTrackersConfig;
use torrust_announce::database::structs::memory_swarm_store::MemorySwarmStore;
use torrust_announce::dispatcher::structs::announce_dispatcher::AnnounceDispatcher;
use torrust_announce::stats::structs::stats_atomics::StatsAtomics;
use torrust_announce::tracker::enums::announce_response::AnnounceResponse;
use torrust_announce::tracker::enums::moderation_status::ModerationStatus;
use torrust_announce::tracker::structs::account::Account;
use torrust_announce::tracker::structs::announce_job::AnnounceJob;
use torrust_announce::tracker::structs::group::Group;
use torrust_announce::tracker::structs::info_hash::InfoHash;
use torrust_announce::tracker::structs::peer_id::PeerId;
use torrust_announce::tracker::structs::peer_record::PeerRecord;
use torrust_announce::tracker::structs::torrent::Torrent;
use torrust_announce::tracker::structs::torrent_tracker::TorrentTracker;

pub const PASSKEY: &str = "5f1c3e2a9b8d7c6e5f4a3b2c1d0e9f8a";
pub const USER_ID: u64 = 1;
pub const TORRENT_ID: u64 = 1;
pub const INFO_HASH: [u8; 20] = [0xabu8; 20];
pub const USER_AGENT: &str = "qBittorrent/4.6.5";

pub type TestTracker = Arc<TorrentTracker>;

pub fn create_test_config() -> Configuration {
    let mut config = Configuration::init();
    config.dispatcher.retry_delay_ms = 1;
    config
}

pub fn create_test_http_config() -> Arc<HttpTrackersConfig> {
    Arc::new(HttpTrackersConfig {
        enabled: true,
        bind_address: "127.0.0.1:6969".to_string(),
        real_ip: String::new(),
        keep_alive: 5,
        request_timeout: 10,
        disconnect_timeout: 5,
        threads: 1,
        ssl: false,
        ssl_key: String::new(),
        ssl_cert: String::new(),
    })
}

/// A store holding one member account and one approved torrent.
pub fn create_test_store() -> Arc<MemorySwarmStore> {
    let store = Arc::new(MemorySwarmStore::new());
    store.insert_group(Group { id: 1, slug: "user".to_string(), download_slots: Some(2) });
    store.insert_account(Account {
        id: USER_ID,
        passkey: PASSKEY.to_string(),
        group_id: 1,
        active: true,
        can_download: true,
        uploaded: 0,
        downloaded: 0,
    });
    store.insert_torrent(Torrent {
        id: TORRENT_ID,
        info_hash: InfoHash(INFO_HASH),
        status: ModerationStatus::Approved,
        free: false,
        double_upload: false,
        seeders: 0,
        leechers: 0,
        times_completed: 0,
    });
    store
}

pub fn create_test_tracker(store: Arc<MemorySwarmStore>, config: Configuration) -> (TestTracker, mpsc::Receiver<AnnounceJob>) {
    let stats = Arc::new(StatsAtomics::new());
    let (dispatcher, receiver) = AnnounceDispatcher::new(1024, stats.clone());
    (Arc::new(TorrentTracker::new(Arc::new(config), store, dispatcher, stats)), receiver)
}

pub fn random_info_hash() -> InfoHash {
    let mut rng = rand::rng();
    let bytes: [u8; 20] = rng.random();
    InfoHash(bytes)
}

pub fn random_peer_id() -> PeerId {
    let mut rng = rand::rng();
    let bytes: [u8; 20] = rng.random();
    PeerId(bytes)
}

/// A peer of another member, last seen an hour ago.
pub fn create_test_peer(user_id: u64, ip: IpAddr, port: u16, seeder: bool) -> PeerRecord {
    PeerRecord {
        torrent_id: TORRENT_ID,
        user_id,
        peer_id: random_peer_id(),
        ip: Some(ip),
        port: Some(port),
        seeder,
        uploaded: 0,
        downloaded: 0,
        left: if seeder { 0 } else { 1000 },
        agent: "Transmission/4.0.5".to_string(),
        updated_at: Utc::now() - TimeDelta::hours(1),
    }
}

pub fn announce_query(info_hash: &[u8], peer_id: &[u8], left: u64, extra: &str) -> String {
    format!(
        "info_hash={}&peer_id={}&port=51413&uploaded=0&downloaded=0&left={left}{extra}",
        percent_encode(info_hash, NON_ALPHANUMERIC),
        percent_encode(peer_id, NON_ALPHANUMERIC)
    )
}

pub fn failure_body(reason: String) -> Vec<u8> {
    AnnounceResponse::Failure { reason, min_interval: 3600 }.encode()
}

pub fn response_int(body: &[u8], key: &str) -> Option<i64> {
    let bencode = BencodeRef::decode(body, BDecodeOpt::default()).ok()?;
    bencode.dict()?.lookup(key.as_bytes())?.int()
}

pub fn response_bytes(body: &[u8], key: &str) -> Option<Vec<u8>> {
    let bencode = BencodeRef::decode(body, BDecodeOpt::default()).ok()?;
    bencode.dict()?.lookup(key.as_bytes())?.bytes().map(|bytes| bytes.to_vec())
}
