//! Type aliases used by the announce path.

/// Request headers as seen by the client checks.
pub mod announce_headers;
