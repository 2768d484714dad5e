//! Swarm store gateway.
//!
//! The announce path reads accounts, torrents and peer records through the
//! [`SwarmStore`](traits::swarm_store::SwarmStore) trait; the announce worker
//! is the only writer. Two implementations ship:
//! - [`MemorySwarmStore`](structs::memory_swarm_store::MemorySwarmStore), maps
//!   behind `parking_lot` locks, for development and tests
//! - [`DatabaseConnector`](structs::database_connector::DatabaseConnector), a
//!   sqlx pool on SQLite, MySQL or PostgreSQL
//!
//! The special groups (validating, banned, disabled) are resolved once and
//! kept in a [`GroupCache`](structs::group_cache::GroupCache).

pub mod enums;
pub mod impls;
pub mod structs;
pub mod traits;
