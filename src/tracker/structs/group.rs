use serde::{Deserialize, Serialize};

/// A permission group an account belongs to.
///
/// `download_slots` limits the number of torrents an account may leech at the
/// same time. `None` or a negative value means unlimited.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Group {
    pub id: u64,
    pub slug: String,
    pub download_slots: Option<i64>,
}
