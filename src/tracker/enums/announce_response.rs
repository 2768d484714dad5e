/// The dictionary sent back for one announce.
///
/// `peers` holds 6 bytes per IPv4 peer and `peers6` 18 bytes per IPv6 peer,
/// both in compact format (BEP 23, BEP 7).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnounceResponse {
    Success {
        interval: u64,
        min_interval: u64,
        complete: u64,
        incomplete: u64,
        peers: Vec<u8>,
        peers6: Vec<u8>,
    },
    Failure {
        reason: String,
        min_interval: u64,
    },
}
