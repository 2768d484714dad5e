use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub started: i64,
    pub announces_handled: i64,
    pub announces_failed: i64,
    pub internal_errors: i64,
    pub not_found: i64,
    pub jobs_enqueued: i64,
    pub jobs_dropped: i64,
    pub jobs_processed: i64,
    pub jobs_failed: i64,
}
