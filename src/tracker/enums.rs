//! Enumerations for tracker operations.

/// The `event` parameter of an announce (none, started, completed, stopped, paused).
pub mod announce_event;

/// Moderation state of a torrent.
pub mod moderation_status;

/// Numbered refusal reasons sent back to clients.
pub mod tracker_error;

/// `TrackerError` or `StoreError`, propagated through the pipeline.
pub mod announce_error;

/// Success or failure dictionary of one announce.
pub mod announce_response;
