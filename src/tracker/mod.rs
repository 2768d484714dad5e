//! Announce processing.
//!
//! [`TorrentTracker::handle_announce`](structs::torrent_tracker::TorrentTracker)
//! runs one announce from raw query to response:
//!
//! 1. client checks on the request headers
//! 2. passkey format
//! 3. field decoding (see [`crate::codec`])
//! 4. account, torrent and swarm checks against the [`SwarmStore`](crate::database::traits::swarm_store::SwarmStore)
//! 5. success response with a compact peer list
//! 6. handoff of the side effects to the [`dispatcher`](crate::dispatcher)
//!
//! Every refusal is a numbered [`TrackerError`](enums::tracker_error::TrackerError)
//! and ends the pipeline with a failure dictionary.
//!
//! # Example
//!
//! ```rust,ignore
//! use torrust_announce::tracker::structs::torrent_tracker::TorrentTracker;
//!
//! let tracker = TorrentTracker::new(config, store, dispatcher, stats);
//! let response = tracker.handle_announce(Some(passkey), query, &headers, remote_ip).await;
//! let body = response.encode();
//! ```

/// Enumerations for tracker operations.
pub mod enums;

/// Implementation blocks for tracker structs.
pub mod impls;

/// Data structures for tracker operations.
pub mod structs;

/// Type aliases.
pub mod types;
