use std::sync::atomic::{AtomicI64, Ordering};
use chrono::Utc;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl StatsAtomics {
    pub fn new() -> StatsAtomics
    {
        StatsAtomics {
            started: AtomicI64::new(Utc::now().timestamp()),
            ..Default::default()
        }
    }

    fn counter(&self, event: StatsEvent) -> &AtomicI64
    {
        match event {
            StatsEvent::AnnouncesHandled => &self.announces_handled,
            StatsEvent::AnnouncesFailed => &self.announces_failed,
            StatsEvent::InternalErrors => &self.internal_errors,
            StatsEvent::NotFound => &self.not_found,
            StatsEvent::JobsEnqueued => &self.jobs_enqueued,
            StatsEvent::JobsDropped => &self.jobs_dropped,
            StatsEvent::JobsProcessed => &self.jobs_processed,
            StatsEvent::JobsFailed => &self.jobs_failed,
        }
    }

    pub fn get_stats(&self) -> Stats
    {
        Stats {
            started: self.started.load(Ordering::SeqCst),
            announces_handled: self.announces_handled.load(Ordering::SeqCst),
            announces_failed: self.announces_failed.load(Ordering::SeqCst),
            internal_errors: self.internal_errors.load(Ordering::SeqCst),
            not_found: self.not_found.load(Ordering::SeqCst),
            jobs_enqueued: self.jobs_enqueued.load(Ordering::SeqCst),
            jobs_dropped: self.jobs_dropped.load(Ordering::SeqCst),
            jobs_processed: self.jobs_processed.load(Ordering::SeqCst),
            jobs_failed: self.jobs_failed.load(Ordering::SeqCst),
        }
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64) -> Stats
    {
        let counter = self.counter(event);
        if value > 0 { counter.fetch_add(value, Ordering::SeqCst); }
        if value < 0 { counter.fetch_sub(-value, Ordering::SeqCst); }
        self.get_stats()
    }

    pub fn set_stats(&self, event: StatsEvent, value: i64) -> Stats
    {
        self.counter(event).store(value, Ordering::SeqCst);
        self.get_stats()
    }
}
