#[cfg(test)]
mod config_tests {
    use crate::config::enums::configuration_error::ConfigurationError;
    use crate::config::impls::configuration::MAX_PEERS_RETURNED;
    use crate::config::structs::configuration::Configuration;
    use crate::database::enums::database_drivers::DatabaseDrivers;

    mod defaults_tests {
        use super::*;

        #[test]
        fn test_init_is_valid() {
            let config = Configuration::init();
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_init_announce_defaults() {
            let config = Configuration::init();
            assert_eq!(config.tracker_config.request_interval_min, 3600);
            assert_eq!(config.tracker_config.request_interval_max, 5400);
            assert_eq!(config.tracker_config.request_interval_minimum, 3600);
            assert_eq!(config.tracker_config.peers_returned, 25);
            assert!(config.tracker_config.blacklisted_clients.is_empty());
            assert_eq!(config.database.engine, DatabaseDrivers::sqlite3);
        }
    }

    mod validation_tests {
        use super::*;

        #[test]
        fn test_invalid_log_level() {
            let mut config = Configuration::init();
            config.log_level = String::from("verbose");
            assert!(matches!(config.validate(), Err(ConfigurationError::ValidationError(_))));
        }

        #[test]
        fn test_invalid_bind_address() {
            let mut config = Configuration::init();
            config.http_server[0].bind_address = String::from("0.0.0.0");
            assert!(config.validate().is_err());
            config.http_server[0].bind_address = String::from("[::]:6969");
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_interval_bounds() {
            let mut config = Configuration::init();
            config.tracker_config.request_interval_min = 6000;
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_peers_returned_bound() {
            let mut config = Configuration::init();
            config.tracker_config.peers_returned = MAX_PEERS_RETURNED;
            assert!(config.validate().is_ok());
            config.tracker_config.peers_returned = MAX_PEERS_RETURNED + 1;
            match config.validate() {
                Err(ConfigurationError::ValidationError(message)) => assert!(message.contains("peers_returned (26)")),
                other => panic!("unexpected result {other:?}"),
            }
        }

        #[test]
        fn test_dispatcher_limits() {
            let mut config = Configuration::init();
            config.dispatcher.queue_capacity = 0;
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_memory_engine_needs_no_path() {
            let mut config = Configuration::init();
            config.database.engine = DatabaseDrivers::memory;
            config.database.path = String::new();
            assert!(config.validate().is_ok());
            config.database.engine = DatabaseDrivers::mysql;
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_ssl_requires_files() {
            let mut config = Configuration::init();
            config.http_server[0].ssl = true;
            assert!(config.validate().is_err());
        }
    }

    mod file_tests {
        use super::*;

        #[test]
        fn test_save_and_load_roundtrip() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("config.toml");
            let path = path.to_str().unwrap();
            let mut config = Configuration::init();
            config.tracker_config.blacklisted_clients = vec![String::from("BitComet/1.0")];
            Configuration::save_from_config(path, &config).unwrap();

            let loaded = Configuration::load_from_file(path, false).unwrap();
            assert_eq!(loaded.tracker_config.blacklisted_clients, vec![String::from("BitComet/1.0")]);
            assert_eq!(loaded.http_server.len(), 1);
        }

        #[test]
        fn test_missing_file_without_create() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("missing.toml");
            let result = Configuration::load_from_file(path.to_str().unwrap(), false);
            assert!(matches!(result, Err(ConfigurationError::IOError(_))));
            assert!(!path.exists());
        }

        #[test]
        fn test_missing_file_with_create() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("config.toml");
            let result = Configuration::load_from_file(path.to_str().unwrap(), true);
            assert!(result.is_err());
            assert!(Configuration::load_file(path.to_str().unwrap()).is_ok());
        }

        #[test]
        fn test_invalid_file_reports_validation_error() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("config.toml");
            let mut config = Configuration::init();
            config.http_server[0].bind_address = String::from("not an address");
            Configuration::save_from_config(path.to_str().unwrap(), &config).unwrap();

            let error = Configuration::load_from_file(path.to_str().unwrap(), false).unwrap_err();
            assert!(matches!(error, ConfigurationError::ValidationError(_)));
            assert!(error.to_string().contains("[HTTP 0] Bind address"));
        }

        #[test]
        fn test_corrupt_file() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("config.toml");
            std::fs::write(&path, "log_level = [").unwrap();
            assert!(matches!(Configuration::load_file(path.to_str().unwrap()), Err(ConfigurationError::ParseError(_))));
        }
    }
}
