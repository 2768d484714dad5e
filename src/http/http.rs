use std::fs::File;
use std::io::BufReader;
use std::net::{IpAddr, SocketAddr};
use std::panic::AssertUnwindSafe;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use actix_cors::Cors;
use actix_web::{App, http, HttpRequest, HttpResponse, HttpServer, web};
use actix_web::dev::{Server, ServerHandle};
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::web::{Data, ServiceConfig};
use bip_bencode::{ben_bytes, ben_map};
use futures_util::FutureExt;
use log::{debug, error, info};
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::http::structs::http_service_data::HttpServiceData;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::types::announce_headers::AnnounceHeaders;

pub fn http_service_cors() -> Cors
{
    Cors::default()
        .send_wildcard()
        .allowed_methods(vec!["GET"])
        .allowed_headers(vec![http::header::X_FORWARDED_FOR, http::header::ACCEPT])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(1)
}

pub fn http_service_routes(data: Arc<HttpServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.service(web::resource("/announce").route(web::get().to(http_service_announce)));
        cfg.service(web::resource("/announce/{passkey}").route(web::get().to(http_service_announce_passkey)));
        cfg.default_service(web::route().to(http_service_not_found));
    })
}

fn http_service_tls_config(http_server_object: &HttpTrackersConfig) -> std::io::Result<rustls::ServerConfig>
{
    let key_file = &mut BufReader::new(File::open(&http_server_object.ssl_key)?);
    let certs_file = &mut BufReader::new(File::open(&http_server_object.ssl_cert)?);

    let tls_certs = rustls_pemfile::certs(certs_file).collect::<Result<Vec<_>, _>>()?;
    let tls_key = rustls_pemfile::private_key(key_file)?
        .ok_or_else(|| std::io::Error::other(format!("no private key found in {}", http_server_object.ssl_key)))?;

    rustls::ServerConfig::builder()
        .with_no_client_auth()
        .with_single_cert(tls_certs, tls_key)
        .map_err(std::io::Error::other)
}

/// Binds one listener. The returned server still has to be awaited.
pub fn http_service(addr: SocketAddr, data: Arc<HttpServiceData>) -> std::io::Result<(ServerHandle, Server)>
{
    let http_server_object = data.http_trackers_config.clone();
    let app_data = data.clone();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(http_service_cors())
            .configure(http_service_routes(app_data.clone()))
    })
        .keep_alive(Duration::from_secs(http_server_object.keep_alive))
        .client_request_timeout(Duration::from_secs(http_server_object.request_timeout))
        .client_disconnect_timeout(Duration::from_secs(http_server_object.disconnect_timeout))
        .workers(http_server_object.threads.max(1) as usize);

    let server = if http_server_object.ssl {
        info!("[HTTP] Starting server listener with SSL on {addr}");
        let tls_config = http_service_tls_config(&http_server_object)?;
        server.bind_rustls_0_23((addr.ip(), addr.port()), tls_config)?
    } else {
        info!("[HTTP] Starting server listener on {addr}");
        server.bind((addr.ip(), addr.port()))?
    };

    let server = server.disable_signals().run();
    Ok((server.handle(), server))
}

pub async fn http_service_announce(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    http_service_announce_handler(request, None, data.get_ref().clone()).await
}

pub async fn http_service_announce_passkey(request: HttpRequest, path: web::Path<String>, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    http_service_announce_handler(request, Some(path.into_inner()), data.get_ref().clone()).await
}

/// Runs the announce and always answers with a bencoded dictionary, also when
/// the announce panicked.
pub async fn http_service_announce_handler(request: HttpRequest, passkey: Option<String>, data: Arc<HttpServiceData>) -> HttpResponse
{
    let tracker = data.torrent_tracker.clone();
    let Some(ip) = http_service_retrieve_remote_ip(&request, &data.http_trackers_config.real_ip) else {
        debug!("[HTTP] Request without a usable origin address");
        return http_service_response(StatusCode::OK, tracker.failure_response(String::from("Unknown origin ip")).encode());
    };
    let headers = http_service_collect_headers(&request);

    let announce = tracker.handle_announce(passkey.as_deref(), request.query_string(), &headers, ip);
    match AssertUnwindSafe(announce).catch_unwind().await {
        Ok(response) => http_service_response(StatusCode::OK, response.encode()),
        Err(_) => {
            error!("[HTTP] Announce from {ip} panicked");
            tracker.update_stats(StatsEvent::InternalErrors, 1);
            http_service_response(StatusCode::OK, tracker.internal_failure_response().encode())
        }
    }
}

pub async fn http_service_not_found(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    data.torrent_tracker.update_stats(StatsEvent::NotFound, 1);
    debug!("[HTTP] Request for {}: 404 Not Found", request.path());
    http_service_response(StatusCode::NOT_FOUND, ben_map! {
        "failure reason" => ben_bytes!("unknown request")
    }.encode())
}

pub fn http_service_response(status: StatusCode, body: Vec<u8>) -> HttpResponse
{
    HttpResponse::build(status)
        .content_type(ContentType::plaintext())
        .insert_header((http::header::PRAGMA, "no-cache"))
        .force_close()
        .body(body)
}

/// Client address: the first entry of the `real_ip` header when it parses,
/// otherwise the socket peer.
pub fn http_service_retrieve_remote_ip(request: &HttpRequest, real_ip: &str) -> Option<IpAddr>
{
    if !real_ip.is_empty() {
        let forwarded = request.headers().get(real_ip)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(',').next())
            .and_then(|value| IpAddr::from_str(value.trim()).ok());
        if forwarded.is_some() {
            return forwarded;
        }
    }
    request.peer_addr().map(|addr| addr.ip())
}

/// Request headers keyed by lowercase name. Repeated headers keep the first value.
pub fn http_service_collect_headers(request: &HttpRequest) -> AnnounceHeaders
{
    let mut headers = AnnounceHeaders::new();
    for (name, value) in request.headers().iter() {
        headers.entry(name.as_str().to_lowercase())
            .or_insert_with(|| String::from_utf8_lossy(value.as_bytes()).into_owned());
    }
    headers
}
