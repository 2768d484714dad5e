use std::sync::Arc;
use log::debug;
use crate::database::enums::store_error::StoreError;
use crate::database::structs::group_cache::GroupCache;
use crate::database::structs::group_index::GroupIndex;
use crate::database::traits::swarm_store::SwarmStore;

impl GroupCache {
    pub fn new() -> GroupCache
    {
        GroupCache::default()
    }

    /// Returns the cached index, loading it from `store` on first use.
    ///
    /// Concurrent first calls may both load; the last one wins.
    pub async fn get(&self, store: &dyn SwarmStore) -> Result<Arc<GroupIndex>, StoreError>
    {
        let cached = self.index.read().clone();
        if let Some(index) = cached {
            return Ok(index);
        }
        let index = Arc::new(GroupIndex::from_groups(store.list_groups().await?));
        debug!("[GROUPS] Loaded {} groups", index.groups.len());
        *self.index.write() = Some(index.clone());
        Ok(index)
    }

    pub fn invalidate(&self)
    {
        *self.index.write() = None;
    }

    pub fn is_loaded(&self) -> bool
    {
        self.index.read().is_some()
    }
}
