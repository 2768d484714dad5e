mod common;

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::Arc;
use actix_web::{test, App};
use actix_web::http::{header, StatusCode};
use torrust_announce::config::structs::configuration::Configuration;
use torrust_announce::config::structs::http_trackers_config::HttpTrackersConfig;
use torrust_announce::database::structs::memory_swarm_store::MemorySwarmStore;
use torrust_announce::http::http::{http_service_cors, http_service_routes};
use torrust_announce::http::structs::http_service_data::HttpServiceData;
use torrust_announce::tracker::enums::tracker_error::TrackerError;

const PEER_ID: &[u8; 20] = b"-qB4650-0123456789ab";

fn peer_addr() -> SocketAddr {
    "10.0.0.1:50000".parse().unwrap()
}

fn service_data(tracker: common::TestTracker, http_config: Arc<HttpTrackersConfig>) -> Arc<HttpServiceData> {
    Arc::new(HttpServiceData {
        torrent_tracker: tracker,
        http_trackers_config: http_config,
    })
}

async fn announce(store: Arc<MemorySwarmStore>, config: Configuration, uri: &str) -> (StatusCode, Vec<u8>) {
    let (tracker, _receiver) = common::create_test_tracker(store, config);
    let app = test::init_service(
        App::new()
            .wrap(http_service_cors())
            .configure(http_service_routes(service_data(tracker, common::create_test_http_config()))),
    )
    .await;

    let req = test::TestRequest::get()
        .uri(uri)
        .insert_header((header::USER_AGENT, common::USER_AGENT))
        .peer_addr(peer_addr())
        .to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    (status, test::read_body(resp).await.to_vec())
}

fn announce_uri(left: u64, extra: &str) -> String {
    format!("/announce/{}?{}", common::PASSKEY, common::announce_query(&common::INFO_HASH, PEER_ID, left, extra))
}

#[actix_web::test]
async fn test_http_announce_started() {
    let store = common::create_test_store();
    let (tracker, mut receiver) = common::create_test_tracker(store, common::create_test_config());
    let app = test::init_service(
        App::new()
            .wrap(http_service_cors())
            .configure(http_service_routes(service_data(tracker, common::create_test_http_config()))),
    )
    .await;

    let req = test::TestRequest::get()
        .uri(&announce_uri(1000, "&event=started"))
        .insert_header((header::USER_AGENT, common::USER_AGENT))
        .peer_addr(peer_addr())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get(header::CONTENT_TYPE).unwrap(), "text/plain; charset=utf-8");
    assert_eq!(resp.headers().get(header::PRAGMA).unwrap(), "no-cache");

    let body = test::read_body(resp).await;
    let interval = common::response_int(&body, "interval").unwrap();
    assert!((3600..=5400).contains(&interval));
    assert_eq!(common::response_int(&body, "min interval"), Some(3600));
    assert_eq!(common::response_int(&body, "complete"), Some(0));
    assert_eq!(common::response_int(&body, "incomplete"), Some(0));
    assert_eq!(common::response_bytes(&body, "peers"), Some(vec![]));
    assert_eq!(common::response_bytes(&body, "peers6"), Some(vec![]));

    let job = receiver.try_recv().expect("announce should be dispatched");
    assert_eq!(job.request.ip_address(), IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)));
    assert_eq!(job.request.port(), 51413);
}

#[actix_web::test]
async fn test_http_real_ip_header() {
    let (tracker, mut receiver) = common::create_test_tracker(common::create_test_store(), common::create_test_config());
    let mut http_config = (*common::create_test_http_config()).clone();
    http_config.real_ip = "X-Real-IP".to_string();
    let app = test::init_service(
        App::new().configure(http_service_routes(service_data(tracker, Arc::new(http_config)))),
    )
    .await;

    let req = test::TestRequest::get()
        .uri(&announce_uri(1000, ""))
        .insert_header((header::USER_AGENT, common::USER_AGENT))
        .insert_header(("X-Real-IP", "2001:db8::7"))
        .peer_addr(peer_addr())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let job = receiver.try_recv().unwrap();
    assert_eq!(job.request.ip_address(), IpAddr::V6("2001:db8::7".parse::<Ipv6Addr>().unwrap()));
}

#[actix_web::test]
async fn test_http_stopped_returns_no_peers() {
    let store = common::create_test_store();
    for i in 1..=5u8 {
        store.insert_peer(common::create_test_peer(100 + i as u64, IpAddr::V4(Ipv4Addr::new(10, 1, 0, i)), 6881, false));
    }
    let (status, body) = announce(store, common::create_test_config(), &announce_uri(1000, "&event=stopped")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(common::response_bytes(&body, "peers"), Some(vec![]));
    assert_eq!(common::response_bytes(&body, "peers6"), Some(vec![]));
}

#[actix_web::test]
async fn test_http_seeder_receives_only_leechers() {
    let store = common::create_test_store();
    for i in 1..=10u8 {
        store.insert_peer(common::create_test_peer(100 + i as u64, IpAddr::V4(Ipv4Addr::new(10, 1, 0, i)), 6881, false));
    }
    for i in 1..=3u8 {
        store.insert_peer(common::create_test_peer(200 + i as u64, IpAddr::V4(Ipv4Addr::new(10, 2, 0, i)), 6881, true));
    }
    let (_, body) = announce(store, common::create_test_config(), &announce_uri(0, "&numwant=100")).await;

    let peers = common::response_bytes(&body, "peers").unwrap();
    assert_eq!(peers.len(), 10 * 6);
    for peer in peers.chunks(6) {
        assert_eq!(&peer[..2], &[10, 1]);
        assert_eq!(u16::from_be_bytes([peer[4], peer[5]]), 6881);
    }
}

#[actix_web::test]
async fn test_http_peer_list_is_capped() {
    let store = common::create_test_store();
    for i in 1..=40u8 {
        store.insert_peer(common::create_test_peer(100 + i as u64, IpAddr::V4(Ipv4Addr::new(10, 1, 0, i)), 6881, i % 2 == 0));
    }
    let (_, body) = announce(store, common::create_test_config(), &announce_uri(1000, "&numwant=100")).await;
    assert_eq!(common::response_bytes(&body, "peers").unwrap().len(), 25 * 6);
}

#[actix_web::test]
async fn test_http_ipv6_peers() {
    let store = common::create_test_store();
    store.insert_peer(common::create_test_peer(101, IpAddr::V6(Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 1)), 6881, true));
    store.insert_peer(common::create_test_peer(102, IpAddr::V6(Ipv4Addr::new(192, 0, 2, 1).to_ipv6_mapped()), 6882, true));
    let (_, body) = announce(store, common::create_test_config(), &announce_uri(1000, "")).await;
    assert_eq!(common::response_bytes(&body, "peers").unwrap(), vec![192, 0, 2, 1, 0x1a, 0xe2]);
    assert_eq!(common::response_bytes(&body, "peers6").unwrap().len(), 18);
}

#[actix_web::test]
async fn test_http_short_passkey() {
    let uri = format!("/announce/{}?{}", &common::PASSKEY[..31], common::announce_query(&common::INFO_HASH, PEER_ID, 1000, ""));
    let (status, body) = announce(common::create_test_store(), common::create_test_config(), &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, common::failure_body(TrackerError::PasskeyLengthInvalid { expected: 32, actual: 31 }.to_string()));
}

#[actix_web::test]
async fn test_http_short_info_hash() {
    let uri = format!("/announce/{}?{}", common::PASSKEY, common::announce_query(&[0xabu8; 19], PEER_ID, 1000, ""));
    let (_, body) = announce(common::create_test_store(), common::create_test_config(), &uri).await;
    assert_eq!(
        body,
        common::failure_body(TrackerError::FieldLengthInvalid { attribute: "info_hash", expected: 20, actual: 19 }.to_string())
    );
}

#[actix_web::test]
async fn test_http_completed_without_peer() {
    let (_, body) = announce(common::create_test_store(), common::create_test_config(), &announce_uri(0, "&event=completed")).await;
    assert_eq!(body, common::failure_body(TrackerError::CompletedWithoutPeer.to_string()));
}

#[actix_web::test]
async fn test_http_announce_without_passkey() {
    let uri = format!("/announce?{}", common::announce_query(&common::INFO_HASH, PEER_ID, 1000, ""));
    let (status, body) = announce(common::create_test_store(), common::create_test_config(), &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, common::failure_body(TrackerError::PasskeyMissing.to_string()));
}

#[actix_web::test]
async fn test_http_browser_is_refused() {
    let (tracker, _receiver) = common::create_test_tracker(common::create_test_store(), common::create_test_config());
    let app = test::init_service(
        App::new().configure(http_service_routes(service_data(tracker, common::create_test_http_config()))),
    )
    .await;

    let req = test::TestRequest::get()
        .uri(&announce_uri(1000, ""))
        .insert_header((header::USER_AGENT, "Mozilla/5.0 (X11; Linux x86_64)"))
        .peer_addr(peer_addr())
        .to_request();
    let body = test::read_body(test::call_service(&app, req).await).await;
    assert_eq!(body.to_vec(), common::failure_body(TrackerError::UaLooksLikeBrowser.to_string()));
}

#[actix_web::test]
async fn test_http_not_found() {
    let (tracker, _receiver) = common::create_test_tracker(common::create_test_store(), common::create_test_config());
    let app = test::init_service(
        App::new().configure(http_service_routes(service_data(tracker.clone(), common::create_test_http_config()))),
    )
    .await;

    let req = test::TestRequest::get().uri("/scrape").peer_addr(peer_addr()).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = test::read_body(resp).await;
    assert_eq!(body.to_vec(), b"d14:failure reason15:unknown requeste".to_vec());
    assert_eq!(tracker.get_stats().not_found, 1);
}
