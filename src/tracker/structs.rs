//! Data structures for the announce path.

/// The tracker instance shared by all HTTP workers.
pub mod torrent_tracker;

/// Decoded and field-validated announce.
pub mod announce_request;

/// 20-byte torrent info hash identifier.
pub mod info_hash;

/// 20-byte peer identifier.
pub mod peer_id;

/// Account resolved from a passkey.
pub mod account;

/// Permission group of an account.
pub mod group;

/// Torrent resolved from an info hash.
pub mod torrent;

/// One swarm membership of an account.
pub mod peer_record;

/// Work handed to the side-effect dispatcher.
pub mod announce_job;
