use serde::{Deserialize, Serialize};

/// Moderation state of a torrent, stored as its numeric value.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug)]
#[serde(rename_all = "lowercase")]
pub enum ModerationStatus {
    Pending = 0,
    Approved = 1,
    Rejected = 2,
    Postponed = 3
}
