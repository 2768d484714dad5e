//! Configuration management module.
//!
//! Loads, creates and validates `config.toml`. Every section of the file maps
//! to one struct in [`structs`]:
//! - **tracker_config**: announce intervals, peer limits and the optional checks
//!   (minimum interval, download slots, connection limit, client denylist)
//! - **database**: swarm store engine and connection path
//! - **dispatcher**: side-effect queue size and worker retry policy
//! - **http_server**: HTTP/HTTPS server instances
//! - **sentry_config**: error reporting
//!
//! # Example
//!
//! ```rust,ignore
//! use torrust_announce::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file(false)?;
//! ```

/// Configuration error type.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

#[cfg(test)]
mod tests;
