use std::sync::Arc;
use parking_lot::RwLock;
use crate::database::structs::group_index::GroupIndex;

/// Group index loaded on first use and kept until `invalidate()`.
#[derive(Debug, Default)]
pub struct GroupCache {
    pub(crate) index: RwLock<Option<Arc<GroupIndex>>>,
}
