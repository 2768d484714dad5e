//! Shared helpers: logging setup and small string checks.
//!
//! # Example
//!
//! ```rust
//! use torrust_announce::common::common::is_lower_hex;
//!
//! assert!(is_lower_hex("0123abcd"));
//! assert!(!is_lower_hex("0123ABCD"));
//! ```

#[allow(clippy::module_inception)]
pub mod common;

#[cfg(test)]
mod tests;
