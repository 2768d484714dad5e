use sqlx::AnyPool;
use crate::database::structs::query_builder::QueryBuilder;

/// Swarm store backed by a sqlx connection pool.
#[derive(Debug, Clone)]
pub struct DatabaseConnector {
    pub(crate) pool: AnyPool,
    pub(crate) query_builder: QueryBuilder,
}
