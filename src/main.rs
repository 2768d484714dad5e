use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use futures_util::future::try_join_all;
use log::{error, info, warn};
use parking_lot::deadlock;
use sentry::ClientInitGuard;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use torrust_announce::common::common::setup_logging;
use torrust_announce::config::structs::configuration::Configuration;
use torrust_announce::database::enums::database_drivers::DatabaseDrivers;
use torrust_announce::database::structs::database_connector::DatabaseConnector;
use torrust_announce::database::structs::memory_swarm_store::MemorySwarmStore;
use torrust_announce::database::traits::swarm_store::SwarmStore;
use torrust_announce::dispatcher::structs::announce_dispatcher::AnnounceDispatcher;
use torrust_announce::dispatcher::structs::announce_worker::AnnounceWorker;
use torrust_announce::http::http::http_service;
use torrust_announce::http::structs::http_service_data::HttpServiceData;
use torrust_announce::stats::structs::stats_atomics::StatsAtomics;
use torrust_announce::structs::Cli;
use torrust_announce::tracker::structs::torrent_tracker::TorrentTracker;

const CONFIG_FILE: &str = "config.toml";
const DRAIN_TIMEOUT: Duration = Duration::from_secs(10);

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(CONFIG_FILE, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(error) = setup_logging(&config) {
        eprintln!("Failed to initialize logging: {error}");
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    #[warn(unused_variables)]
    let _sentry_guard: ClientInitGuard;
    if config.sentry_config.enabled {
        _sentry_guard = sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            max_breadcrumbs: config.sentry_config.max_breadcrumbs,
            attach_stacktrace: config.sentry_config.attach_stacktrace,
            send_default_pii: config.sentry_config.send_default_pii,
            traces_sample_rate: config.sentry_config.traces_sample_rate,
            session_mode: sentry::SessionMode::Request,
            auto_session_tracking: true,
            ..Default::default()
        }));
    }

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let store: Arc<dyn SwarmStore> = match config.database.engine {
                DatabaseDrivers::memory => {
                    warn!("[BOOT] Using the in-memory swarm store, nothing survives a restart");
                    Arc::new(MemorySwarmStore::new())
                }
                _ => match DatabaseConnector::new(&config.database, args.create_database).await {
                    Ok(connector) => Arc::new(connector),
                    Err(error) => {
                        error!("[BOOT] Unable to open the swarm store: {error}");
                        sentry::capture_error(&error);
                        exit(1);
                    }
                }
            };

            let stats = Arc::new(StatsAtomics::new());
            let (dispatcher, receiver) = AnnounceDispatcher::new(config.dispatcher.queue_capacity, stats.clone());
            let worker = AnnounceWorker::new(receiver, store.clone(), config.clone(), stats.clone());
            let worker_handle = tokio::spawn(worker.run());

            let tracker = Arc::new(TorrentTracker::new(config.clone(), store, dispatcher, stats));

            let tokio_shutdown = match Shutdown::new() {
                Ok(shutdown) => shutdown,
                Err(_) => {
                    error!("[BOOT] Unable to register the shutdown signal handlers");
                    exit(1);
                }
            };

            let deadlocks_handler = tokio_shutdown.clone();
            tokio::spawn(async move {
                info!("[BOOT] Starting thread for deadlocks...");
                let mut interval = tokio::time::interval(Duration::from_secs(30));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let deadlocks = deadlock::check_deadlock();
                            if !deadlocks.is_empty() {
                                info!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                                for (i, threads) in deadlocks.iter().enumerate() {
                                    info!("[DEADLOCK] #{i}");
                                    for t in threads {
                                        info!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                        info!("[DEADLOCK] {:#?}", t.backtrace());
                                        sentry::capture_message(&format!("{:#?}", t.backtrace()), sentry::Level::Error);
                                    }
                                }
                            }
                        }
                        _ = deadlocks_handler.handle() => {
                            info!("[BOOT] Shutting down thread for deadlocks...");
                            return;
                        }
                    }
                }
            });

            let mut http_handles = Vec::new();
            let mut http_futures = Vec::new();
            for http_server_object in &config.http_server {
                if !http_server_object.enabled {
                    continue;
                }
                let address: SocketAddr = match http_server_object.bind_address.parse() {
                    Ok(address) => address,
                    Err(_) => {
                        error!("[HTTP] Invalid bind address {}", http_server_object.bind_address);
                        exit(1);
                    }
                };
                let data = Arc::new(HttpServiceData {
                    torrent_tracker: tracker.clone(),
                    http_trackers_config: Arc::new(http_server_object.clone()),
                });
                match http_service(address, data) {
                    Ok((handle, future)) => {
                        http_handles.push(handle);
                        http_futures.push(future);
                    }
                    Err(error) => {
                        error!("[HTTP] Unable to start the listener on {address}: {error}");
                        exit(1);
                    }
                }
            }

            if http_futures.is_empty() {
                warn!("[BOOT] No HTTP listener enabled");
            } else {
                tokio::spawn(async move {
                    if let Err(error) = try_join_all(http_futures).await {
                        error!("[HTTP] Listener stopped with an error: {error}");
                    }
                });
            }

            let stats_handler = tokio_shutdown.clone();
            let tracker_spawn_stats = tracker.clone();
            let console_interval = tracker_spawn_stats.config.log_console_interval.max(1);
            info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");

            tokio::spawn(async move {
                let mut interval = tokio::time::interval(Duration::from_secs(console_interval));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let stats = tracker_spawn_stats.get_stats();
                            info!(
                                "[STATS] Announces: {} - Failed: {} - Internal: {} - 404: {} | Jobs: Enqueued {} - Dropped {} - Processed {} - Failed {} - Pending {}",
                                stats.announces_handled, stats.announces_failed, stats.internal_errors, stats.not_found,
                                stats.jobs_enqueued, stats.jobs_dropped, stats.jobs_processed, stats.jobs_failed,
                                tracker_spawn_stats.dispatcher.pending()
                            );
                        }
                        _ = stats_handler.handle() => {
                            info!("[BOOT] Shutting down thread for console updates...");
                            return;
                        }
                    }
                }
            });

            tokio_shutdown.handle().await;
            info!("Shutdown request received, shutting down...");

            for handle in http_handles {
                handle.stop(true).await;
            }

            let deadline = tokio::time::Instant::now() + DRAIN_TIMEOUT;
            while tracker.dispatcher.pending() > 0 && tokio::time::Instant::now() < deadline {
                tokio::time::sleep(Duration::from_millis(100)).await;
            }
            let pending = tracker.dispatcher.pending();
            if pending > 0 {
                warn!("[WORKER] {pending} announces were still queued at shutdown");
            }
            worker_handle.abort();

            info!("Server shutting down completed");
            Ok(())
        })
}
