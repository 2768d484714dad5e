use thiserror::Error;
use crate::database::enums::store_error::StoreError;
use crate::tracker::enums::tracker_error::TrackerError;

/// Outcome of a failed announce pipeline.
///
/// `Tracker` is a regular refusal sent back to the client. `Store` is an
/// internal fault; the client still receives a failure dictionary.
#[derive(Error, Debug)]
pub enum AnnounceError {
    #[error(transparent)]
    Tracker(#[from] TrackerError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
