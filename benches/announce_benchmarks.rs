// Run with: cargo bench

use std::hint::black_box;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use chrono::{TimeDelta, Utc};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use percent_encoding::{percent_encode, NON_ALPHANUMERIC};
use rand::RngExt;
use torrust_announce::codec::codec::{decode, encode_compact_peer, encode_response};
use torrust_announce::config::structs::configuration::Configuration;
use torrust_announce::database::structs::memory_swarm_store::MemorySwarmStore;
use torrust_announce::dispatcher::structs::announce_dispatcher::AnnounceDispatcher;
use torrust_announce::stats::structs::stats_atomics::StatsAtomics;
use torrust_announce::tracker::enums::announce_response::AnnounceResponse;
use torrust_announce::tracker::enums::moderation_status::ModerationStatus;
use torrust_announce::tracker::structs::account::Account;
use torrust_announce::tracker::structs::info_hash::InfoHash;
use torrust_announce::tracker::structs::peer_id::PeerId;
use torrust_announce::tracker::structs::peer_record::PeerRecord;
use torrust_announce::tracker::structs::torrent::Torrent;
use torrust_announce::tracker::structs::torrent_tracker::TorrentTracker;
use torrust_announce::tracker::types::announce_headers::AnnounceHeaders;

const PASSKEY: &str = "0123456789abcdef0123456789abcdef";
const INFO_HASH: [u8; 20] = [0x42u8; 20];

fn random_peer_id() -> PeerId {
    let mut rng = rand::rng();
    let bytes: [u8; 20] = rng.random();
    PeerId(bytes)
}

fn headers() -> AnnounceHeaders {
    let mut headers = AnnounceHeaders::new();
    headers.insert("user-agent".to_string(), "qBittorrent/4.6.5".to_string());
    headers
}

fn query(peer_id: &PeerId) -> String {
    format!(
        "info_hash={}&peer_id={}&port=51413&uploaded=1024&downloaded=2048&left=4096&event=started&numwant=50",
        percent_encode(&INFO_HASH, NON_ALPHANUMERIC),
        percent_encode(&peer_id.0, NON_ALPHANUMERIC)
    )
}

fn create_tracker(swarm_size: u32) -> (Arc<TorrentTracker>, tokio::sync::mpsc::Receiver<torrust_announce::tracker::structs::announce_job::AnnounceJob>) {
    let store = Arc::new(MemorySwarmStore::new());
    store.insert_account(Account {
        id: 1,
        passkey: PASSKEY.to_string(),
        group_id: 1,
        active: true,
        can_download: true,
        uploaded: 0,
        downloaded: 0,
    });
    store.insert_torrent(Torrent {
        id: 1,
        info_hash: InfoHash(INFO_HASH),
        status: ModerationStatus::Approved,
        free: false,
        double_upload: false,
        seeders: 0,
        leechers: 0,
        times_completed: 0,
    });
    for i in 0..swarm_size {
        store.insert_peer(PeerRecord {
            torrent_id: 1,
            user_id: 1000 + i as u64,
            peer_id: random_peer_id(),
            ip: Some(IpAddr::V4(Ipv4Addr::from(0x0a00_0000 + i))),
            port: Some(6881),
            seeder: i % 3 == 0,
            uploaded: 0,
            downloaded: 0,
            left: if i % 3 == 0 { 0 } else { 1000 },
            agent: "Transmission/4.0.5".to_string(),
            updated_at: Utc::now() - TimeDelta::hours(1),
        });
    }

    let mut config = Configuration::init();
    config.tracker_config.min_interval.enabled = false;
    let stats = Arc::new(StatsAtomics::new());
    let (dispatcher, receiver) = AnnounceDispatcher::new(1 << 20, stats.clone());
    (Arc::new(TorrentTracker::new(Arc::new(config), store, dispatcher, stats)), receiver)
}

fn bench_decode(c: &mut Criterion) {
    let query = query(&random_peer_id());
    let headers = headers();
    let ip = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1));

    c.bench_function("decode_announce", |b| {
        b.iter(|| black_box(decode(black_box(&query), &headers, ip)));
    });
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_response");
    for peer_count in [0u32, 25, 50] {
        let mut peers = Vec::new();
        let mut peers6 = Vec::new();
        for i in 0..peer_count {
            encode_compact_peer(IpAddr::V4(Ipv4Addr::from(0x0a00_0000 + i)), 6881).append_to(&mut peers, &mut peers6);
        }
        let response = AnnounceResponse::Success {
            interval: 4000,
            min_interval: 3600,
            complete: 10,
            incomplete: peer_count as u64,
            peers,
            peers6,
        };
        group.bench_with_input(BenchmarkId::from_parameter(peer_count), &response, |b, response| {
            b.iter(|| black_box(encode_response(response)));
        });
    }
    group.finish();
}

fn bench_handle_announce(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let mut group = c.benchmark_group("handle_announce");
    for swarm_size in [10u32, 1000] {
        let (tracker, receiver) = create_tracker(swarm_size);
        let headers = headers();
        let ip = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1));
        group.bench_with_input(BenchmarkId::from_parameter(swarm_size), &swarm_size, |b, _| {
            b.to_async(&rt).iter(|| {
                let tracker = tracker.clone();
                let query = query(&random_peer_id());
                let headers = headers.clone();
                async move {
                    black_box(tracker.handle_announce(Some(PASSKEY), &query, &headers, ip).await)
                }
            });
        });
        drop(receiver);
    }
    group.finish();
}

criterion_group!(benches, bench_decode, bench_encode, bench_handle_announce);
criterion_main!(benches);
