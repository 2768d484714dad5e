/// Counter selector for `StatsAtomics::update_stats`.
pub mod stats_event;
