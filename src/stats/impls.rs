/// Counter updates and snapshots on `StatsAtomics`.
pub mod stats_atomics;

/// `TorrentTracker` shortcuts to its statistics.
pub mod torrent_tracker;
