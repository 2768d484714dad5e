#[cfg(test)]
mod http_tests {
    use std::net::SocketAddr;
    use std::sync::Arc;
    use actix_web::body::to_bytes;
    use actix_web::http::{header, StatusCode};
    use actix_web::test::TestRequest;
    use percent_encoding::{percent_encode, NON_ALPHANUMERIC};
    use crate::config::structs::configuration::Configuration;
    use crate::database::traits::swarm_store::MockSwarmStore;
    use crate::dispatcher::structs::announce_dispatcher::AnnounceDispatcher;
    use crate::http::http::{http_service_announce_handler, http_service_retrieve_remote_ip};
    use crate::http::structs::http_service_data::HttpServiceData;
    use crate::stats::structs::stats_atomics::StatsAtomics;
    use crate::tracker::enums::announce_response::AnnounceResponse;
    use crate::tracker::impls::torrent_tracker::INTERNAL_FAILURE_REASON;
    use crate::tracker::structs::torrent_tracker::TorrentTracker;

    const PASSKEY: &str = "0123456789abcdef0123456789abcdef";

    fn service_data(store: MockSwarmStore) -> Arc<HttpServiceData> {
        let config = Configuration::init();
        let mut http_config = config.http_server[0].clone();
        http_config.real_ip = String::new();
        let stats = Arc::new(StatsAtomics::new());
        let (dispatcher, _receiver) = AnnounceDispatcher::new(16, stats.clone());
        Arc::new(HttpServiceData {
            torrent_tracker: Arc::new(TorrentTracker::new(Arc::new(config), Arc::new(store), dispatcher, stats)),
            http_trackers_config: Arc::new(http_config),
        })
    }

    fn announce_uri() -> String {
        format!(
            "/announce/{PASSKEY}?info_hash={}&peer_id={}&port=51413&uploaded=0&downloaded=0&left=100",
            percent_encode(&[0x12u8; 20], NON_ALPHANUMERIC),
            percent_encode(b"-qB4650-abcdefghijkl", NON_ALPHANUMERIC)
        )
    }

    fn peer_addr() -> SocketAddr {
        "10.0.0.1:50000".parse().unwrap()
    }

    #[actix_web::test]
    async fn test_panicking_store_still_answers() {
        let mut store = MockSwarmStore::new();
        store.expect_find_account_by_passkey().returning(|_| panic!("store lost its connection"));
        let data = service_data(store);

        let request = TestRequest::get()
            .uri(&announce_uri())
            .insert_header((header::USER_AGENT, "qBittorrent/4.6.5"))
            .peer_addr(peer_addr())
            .to_http_request();
        let response = http_service_announce_handler(request, Some(PASSKEY.to_string()), data.clone()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body()).await.unwrap();
        let expected = AnnounceResponse::Failure { reason: String::from(INTERNAL_FAILURE_REASON), min_interval: 3600 }.encode();
        assert_eq!(body.to_vec(), expected);
        assert_eq!(data.torrent_tracker.get_stats().internal_errors, 1);
        assert_eq!(data.torrent_tracker.get_stats().announces_handled, 0);
    }

    #[actix_web::test]
    async fn test_real_ip_header_overrides_peer_address() {
        let request = TestRequest::get()
            .insert_header(("X-Real-IP", "203.0.113.9, 10.0.0.2"))
            .peer_addr(peer_addr())
            .to_http_request();
        assert_eq!(http_service_retrieve_remote_ip(&request, "X-Real-IP"), Some("203.0.113.9".parse().unwrap()));
        assert_eq!(http_service_retrieve_remote_ip(&request, ""), Some("10.0.0.1".parse().unwrap()));

        let request = TestRequest::get().insert_header(("X-Real-IP", "garbage")).peer_addr(peer_addr()).to_http_request();
        assert_eq!(http_service_retrieve_remote_ip(&request, "X-Real-IP"), Some("10.0.0.1".parse().unwrap()));
    }
}
