use serde::{Deserialize, Serialize};

/// The `event` parameter of an announce.
///
/// An absent or empty event is `None`, a regular interval update. `Paused` is
/// sent by partial seeds (BEP 21) and is treated like a regular update.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug)]
#[serde(rename_all = "lowercase")]
pub enum AnnounceEvent {
    None,
    Started,
    Completed,
    Stopped,
    Paused
}
