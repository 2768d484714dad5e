//! Swarm store implementations.

/// `SwarmStore` for `MemorySwarmStore`, plus seeding helpers.
pub mod memory_swarm_store;

/// Pool setup, schema creation and `SwarmStore` for `DatabaseConnector`.
pub mod database_connector;

/// SQL fragments per engine.
pub mod query_builder;

/// Loading and invalidating the group cache.
pub mod group_cache;

/// Special group detection.
pub mod group_index;
