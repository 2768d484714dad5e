use serde::{Deserialize, Serialize};
use crate::config::structs::min_interval_config::MinIntervalConfig;
use crate::config::structs::slots_system_config::SlotsSystemConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TrackerConfig {
    /// Lower bound of the randomised `interval` sent to clients, in seconds.
    pub request_interval_min: u64,
    /// Upper bound of the randomised `interval`, in seconds.
    pub request_interval_max: u64,
    /// The `min interval` value sent with every response.
    pub request_interval_minimum: u64,
    /// Cap on the number of peers in one response, whatever `numwant` says.
    pub peers_returned: u64,
    /// Maximum simultaneous peers of one account on one torrent.
    pub rate_limit: u64,
    /// Site-wide freeleech: downloads are never credited.
    pub freeleech: bool,
    /// Site-wide double upload credit.
    pub double_upload: bool,
    /// User-Agent values refused outright.
    pub blacklisted_clients: Vec<String>,
    pub min_interval: MinIntervalConfig,
    pub slots_system: SlotsSystemConfig,
}
