//! # Torrust Announce
//!
//! The announce endpoint of a private BitTorrent tracker, built on Actix-web.
//!
//! ## Overview
//!
//! A client announces with its passkey in the path. The request is decoded,
//! run through a fixed sequence of checks against the swarm store and answered
//! with a bencoded dictionary holding compact peer lists. Every announce that
//! passes is handed to an asynchronous worker which records the peer, credits
//! the account and refreshes the torrent counters.
//!
//! ```text
//! query → codec::decode → checks (SwarmStore reads) → response builder → codec::encode
//!                                                   ↘ AnnounceDispatcher → AnnounceWorker (SwarmStore writes)
//! ```
//!
//! ## BEP Compliance
//!
//! - BEP 3: The BitTorrent Protocol Specification
//! - BEP 7: IPv6 Tracker Extension (`peers6`)
//! - BEP 23: Tracker Returns Compact Peer Lists
//!
//! ## Modules
//!
//! - [`codec`] - Announce query decoding and response encoding
//! - [`common`] - Logging setup and small helpers
//! - [`config`] - Configuration management and TOML parsing
//! - [`database`] - Swarm store gateway (SQLite, MySQL, PostgreSQL or in-memory)
//! - [`dispatcher`] - Queue and worker applying announce side effects
//! - [`http`] - HTTP/HTTPS listener
//! - [`stats`] - Runtime counters
//! - [`structs`] - CLI arguments
//! - [`tracker`] - Validation pipeline, response builder and orchestration

/// Announce query decoding and bencoded response encoding.
pub mod codec;

/// Shared helpers.
pub mod common;

/// Configuration management module.
///
/// Loads, validates and writes the `config.toml` file.
pub mod config;

/// Swarm store gateway.
///
/// Defines the `SwarmStore` trait with a SQL implementation (through sqlx)
/// and an in-memory one.
pub mod database;

/// Fire-and-forget hand-off of successful announces to a background worker.
pub mod dispatcher;

/// HTTP/HTTPS tracker listener.
pub mod http;

/// Runtime statistics.
pub mod stats;

/// CLI argument parsing.
pub mod structs;

/// Core announce handling.
pub mod tracker;
