/// Sending half of the announce queue.
pub mod announce_dispatcher;

/// Queue consumer applying announce effects.
pub mod announce_worker;

/// Steps of one job already applied, kept across retries.
pub mod job_progress;
