//! Side-effect dispatcher.
//!
//! A successful announce is answered before its effects are stored. The
//! handler hands an [`AnnounceJob`](crate::tracker::structs::announce_job::AnnounceJob)
//! to the [`AnnounceDispatcher`](structs::announce_dispatcher::AnnounceDispatcher),
//! a non-blocking handoff onto a bounded tokio channel. The
//! [`AnnounceWorker`](structs::announce_worker::AnnounceWorker) consumes the
//! channel in FIFO order and writes peer records, account credit and torrent
//! counters to the swarm store, retrying failed jobs with a linear backoff.

pub mod enums;
pub mod impls;
pub mod structs;
