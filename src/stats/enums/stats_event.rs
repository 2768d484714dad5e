use serde::{Deserialize, Serialize};

/// Every counter that can be changed through `update_stats`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    AnnouncesHandled,
    AnnouncesFailed,
    InternalErrors,
    NotFound,
    JobsEnqueued,
    JobsDropped,
    JobsProcessed,
    JobsFailed,
}
