//! Implementation blocks for tracker data structures.

/// InfoHash implementation: Display, FromStr, Serialize, Deserialize.
pub mod info_hash;

/// PeerId implementation: Display, FromStr, Serialize, client detection.
pub mod peer_id;

/// AnnounceEvent implementation: parsing and display.
pub mod announce_event;

/// ModerationStatus implementation: numeric conversion and display.
pub mod moderation_status;

/// TrackerError implementation: failure codes.
pub mod tracker_error;

/// AnnounceRequest getters.
pub mod announce_request;

/// AnnounceResponse encoding.
pub mod announce_response;

/// TorrentTracker construction and failure responses.
pub mod torrent_tracker;

/// The validation pipeline.
pub mod torrent_tracker_validation;

/// Success response building.
pub mod torrent_tracker_response;

/// The announce orchestrator.
pub mod torrent_tracker_handlers;
