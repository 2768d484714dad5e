use std::sync::atomic::AtomicI64;

/// Shared counters, one per `StatsEvent` plus the start timestamp.
#[derive(Debug, Default)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub announces_handled: AtomicI64,
    pub announces_failed: AtomicI64,
    pub internal_errors: AtomicI64,
    pub not_found: AtomicI64,
    pub jobs_enqueued: AtomicI64,
    pub jobs_dropped: AtomicI64,
    pub jobs_processed: AtomicI64,
    pub jobs_failed: AtomicI64,
}
