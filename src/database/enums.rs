//! Database enumeration types.

/// Supported swarm store engines (memory, sqlite3, mysql, pgsql).
pub mod database_drivers;

/// Infrastructure failures of a swarm store.
pub mod store_error;
