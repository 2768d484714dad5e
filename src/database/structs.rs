//! Swarm store structures.

/// In-memory swarm store.
pub mod memory_swarm_store;

/// sqlx backed swarm store.
pub mod database_connector;

/// Per-engine SQL fragments.
pub mod query_builder;

/// Lazily loaded group lookup.
pub mod group_cache;

/// Groups by id plus the ids of the special groups.
pub mod group_index;
