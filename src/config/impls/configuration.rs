use std::fs::File;
use std::io::Write;
use std::thread::available_parallelism;
use regex::Regex;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::database_config::DatabaseConfig;
use crate::config::structs::dispatcher_config::DispatcherConfig;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::config::structs::min_interval_config::MinIntervalConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::slots_system_config::SlotsSystemConfig;
use crate::config::structs::tracker_config::TrackerConfig;
use crate::database::enums::database_drivers::DatabaseDrivers;

const LOG_LEVEL_REGEX: &str = r"^(off|trace|debug|info|warn|error)$";
const BIND_ADDRESS_REGEX: &str = r"^(\[[0-9a-fA-F:.]+\]|[0-9]{1,3}(\.[0-9]{1,3}){3}|[a-zA-Z0-9.-]+):[0-9]{1,5}$";
const HEADER_NAME_REGEX: &str = r"^[A-Za-z0-9-]*$";

/// Upper bound of `tracker_config.peers_returned`.
pub const MAX_PEERS_RETURNED: u64 = 25;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            tracker_config: TrackerConfig {
                request_interval_min: 3600,
                request_interval_max: 5400,
                request_interval_minimum: 3600,
                peers_returned: 25,
                rate_limit: 3,
                freeleech: false,
                double_upload: false,
                blacklisted_clients: vec![],
                min_interval: MinIntervalConfig {
                    enabled: true,
                    interval: 900,
                },
                slots_system: SlotsSystemConfig {
                    enabled: false,
                },
            },
            database: DatabaseConfig {
                engine: DatabaseDrivers::sqlite3,
                path: String::from("sqlite://data.db?mode=rwc"),
            },
            dispatcher: DispatcherConfig {
                queue_capacity: 65536,
                max_attempts: 3,
                retry_delay_ms: 500,
            },
            http_server: vec!(
                HttpTrackersConfig {
                    enabled: true,
                    bind_address: String::from("0.0.0.0:6969"),
                    real_ip: String::from("X-Real-IP"),
                    keep_alive: 60,
                    request_timeout: 15,
                    disconnect_timeout: 15,
                    threads: available_parallelism().map(|threads| threads.get() as u64).unwrap_or(1),
                    ssl: false,
                    ssl_key: String::from(""),
                    ssl_cert: String::from(""),
                }
            ),
            sentry_config: SentryConfig {
                enabled: false,
                dsn: String::from(""),
                debug: false,
                sample_rate: 1.0,
                max_breadcrumbs: 100,
                attach_stacktrace: true,
                send_default_pii: false,
                traces_sample_rate: 1.0,
            },
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn save_from_config(path: &str, config: &Configuration) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    /// Loads and validates `path`.
    ///
    /// When the file is missing or corrupt and `create` is set, a default
    /// configuration is written to `path` instead and an error is still
    /// returned, so the operator edits it before the tracker starts.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, ConfigurationError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(error);
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(path, &Configuration::init()) {
                    Ok(_) => {
                        eprintln!("Please edit the {path} in the root folder, exiting now...");
                        Err(ConfigurationError::ValidationError(format!("{path} created with default values")))
                    }
                    Err(e) => {
                        eprintln!("{path} file could not be created, check permissions...");
                        Err(e)
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        if let Err(error) = config.validate() {
            eprintln!("[VALIDATE] {error}");
            return Err(error);
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let mut check_map = vec![
            (String::from("[LOG] Level"), self.log_level.clone(), LOG_LEVEL_REGEX),
        ];
        for (index, server) in self.http_server.iter().enumerate() {
            check_map.push((format!("[HTTP {index}] Bind address"), server.bind_address.clone(), BIND_ADDRESS_REGEX));
            check_map.push((format!("[HTTP {index}] Real IP header"), server.real_ip.clone(), HEADER_NAME_REGEX));
        }

        for (name, value, regex) in check_map {
            Self::validate_value(&name, &value, regex)?;
        }

        let tracker_config = &self.tracker_config;
        if tracker_config.request_interval_min > tracker_config.request_interval_max {
            return Err(ConfigurationError::ValidationError(format!(
                "[TRACKER] request_interval_min ({}) is above request_interval_max ({})",
                tracker_config.request_interval_min, tracker_config.request_interval_max
            )));
        }
        if tracker_config.peers_returned > MAX_PEERS_RETURNED {
            return Err(ConfigurationError::ValidationError(format!(
                "[TRACKER] peers_returned ({}) is above {MAX_PEERS_RETURNED}",
                tracker_config.peers_returned
            )));
        }
        if self.dispatcher.queue_capacity == 0 || self.dispatcher.max_attempts == 0 {
            return Err(ConfigurationError::ValidationError(String::from(
                "[DISPATCHER] queue_capacity and max_attempts must be at least 1"
            )));
        }
        if self.database.engine != DatabaseDrivers::memory && self.database.path.is_empty() {
            return Err(ConfigurationError::ValidationError(format!(
                "[DATABASE] a path is required for engine {:?}", self.database.engine
            )));
        }
        for (index, server) in self.http_server.iter().enumerate() {
            if server.enabled && server.ssl && (server.ssl_key.is_empty() || server.ssl_cert.is_empty()) {
                return Err(ConfigurationError::ValidationError(format!(
                    "[HTTP {index}] ssl is enabled but ssl_key or ssl_cert is empty"
                )));
            }
        }
        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), ConfigurationError>
    {
        let regex_check = Regex::new(regex).map_err(|e| ConfigurationError::ValidationError(e.to_string()))?;
        if !regex_check.is_match(value) {
            return Err(ConfigurationError::ValidationError(format!(
                "[VALIDATE CONFIG] Error checking {name} [:] Name: \"{value}\" [:] Regex: \"{regex_check}\""
            )));
        }
        Ok(())
    }
}
