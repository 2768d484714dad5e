//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Announce behaviour: intervals, peer limits and optional checks.
pub mod tracker_config;

/// `[tracker_config.min_interval]` section.
pub mod min_interval_config;

/// `[tracker_config.slots_system]` section.
pub mod slots_system_config;

/// Swarm store engine selection.
pub mod database_config;

/// Side-effect queue and worker settings.
pub mod dispatcher_config;

/// HTTP/HTTPS server configuration.
pub mod http_trackers_config;

/// Sentry error reporting.
pub mod sentry_config;
