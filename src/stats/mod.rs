//! Announce statistics.
//!
//! Atomic counters updated by the HTTP handlers, the dispatcher and the
//! announce worker. `main` logs a snapshot every `log_console_interval`
//! seconds.
//!
//! # Example
//!
//! ```rust,ignore
//! use torrust_announce::stats::enums::stats_event::StatsEvent;
//!
//! tracker.update_stats(StatsEvent::AnnouncesHandled, 1);
//! let stats = tracker.get_stats();
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Counter updates and snapshots.
pub mod impls;

/// Statistics data structures (atomic counters and snapshots).
pub mod structs;
