use serde::{Deserialize, Serialize};
use crate::config::structs::database_config::DatabaseConfig;
use crate::config::structs::dispatcher_config::DispatcherConfig;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::tracker_config::TrackerConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub log_console_interval: u64,
    pub tracker_config: TrackerConfig,
    pub database: DatabaseConfig,
    pub dispatcher: DispatcherConfig,
    pub http_server: Vec<HttpTrackersConfig>,
    pub sentry_config: SentryConfig,
}
