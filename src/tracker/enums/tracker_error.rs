use thiserror::Error;
use crate::tracker::enums::moderation_status::ModerationStatus;

/// Every reason an announce can be refused.
///
/// Each variant maps to a fixed numeric code (see [`TrackerError::code`]) and
/// carries the values interpolated into its reason text. The `Display` output
/// is sent to the client as `failure reason`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    #[error("Invalid user-agent!")]
    UaMissing,

    #[error("The User-Agent of this client is too long!")]
    UaTooLong { length: usize },

    #[error("Abnormal access blocked!")]
    SuspiciousHeaders { header: &'static str },

    #[error("Browser, crawler or cheater is not allowed.")]
    UaLooksLikeBrowser,

    #[error("The User-Agent of this client is banned!")]
    UaBlacklisted { agent: String },

    #[error("Missing required parameter: passkey")]
    PasskeyMissing,

    #[error("Invalid passkey! The format is not correct")]
    PasskeyFormatInvalid,

    #[error("Invalid passkey length! passkey must be {expected} characters")]
    PasskeyLengthInvalid { expected: usize, actual: usize },

    #[error("Invalid {attribute} length! {attribute} must be {expected} bytes")]
    FieldLengthInvalid { attribute: &'static str, expected: usize, actual: usize },

    #[error("Missing required parameter: {attribute}")]
    FieldMissing { attribute: &'static str },

    #[error("Invalid {attribute}! {attribute} must be a non-negative integer")]
    FieldNumericInvalid { attribute: &'static str },

    #[error("Unsupported event type {event}")]
    EventInvalid { event: String },

    #[error("Illegal port {port}. Port {port} is not allowed")]
    PortInvalid { port: String },

    #[error("Passkey does not exist! Please re-download the .torrent")]
    UserUnknown,

    #[error("Your account is not enabled! (Current: {status})")]
    UserRestricted { status: &'static str },

    #[error("Your download privileges have been revoked!")]
    DownloadDenied,

    #[error("Torrent not registered with this tracker.")]
    TorrentUnknown,

    #[error("Torrent is not approved yet. (Current: {status})")]
    TorrentNotApproved { status: ModerationStatus },

    #[error("Torrent completion was reported without a prior start!")]
    CompletedWithoutPeer,

    #[error("You are already connected from {limit} locations on this torrent")]
    TooManyConnections { limit: u64 },

    #[error("There is a minimum announce time of {interval} seconds")]
    AnnounceTooSoon { interval: u64 },

    #[error("Your download slots are full! ({slots} slots)")]
    SlotsExhausted { slots: i64 },
}
