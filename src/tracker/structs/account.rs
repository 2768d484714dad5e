use serde::{Deserialize, Serialize};

/// An account resolved from a passkey.
///
/// Owned by the surrounding site; the announce path only reads it. Lifetime
/// totals are changed by the announce worker through the swarm store.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Account {
    pub id: u64,
    pub passkey: String,
    pub group_id: u64,
    pub active: bool,
    pub can_download: bool,
    pub uploaded: u64,
    pub downloaded: u64,
}
