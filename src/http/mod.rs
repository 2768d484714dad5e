//! HTTP/HTTPS front of the announce endpoint.
//!
//! # Endpoints
//!
//! - `/announce/{passkey}` - Announce of a private tracker member
//! - `/announce` - Always refused, the passkey is missing
//!
//! Every other path answers 404 with a bencoded `failure reason`. Replies are
//! sent with `Connection: close` and `Pragma: no-cache`, status 200 for both
//! success and failure dictionaries.
//!
//! The client address is the socket peer address, or the value of the
//! configured `real_ip` header when running behind a proxy.

/// Data structures shared with the request handlers.
pub mod structs;

#[allow(clippy::module_inception)]
pub mod http;

#[cfg(test)]
mod tests;
