use std::fmt;
use std::fmt::Formatter;
use crate::tracker::enums::moderation_status::ModerationStatus;

impl ModerationStatus {
    pub fn from_i64(value: i64) -> Option<ModerationStatus> {
        match value {
            0 => Some(ModerationStatus::Pending),
            1 => Some(ModerationStatus::Approved),
            2 => Some(ModerationStatus::Rejected),
            3 => Some(ModerationStatus::Postponed),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> i64 {
        *self as i64
    }

    pub fn is_approved(&self) -> bool {
        *self == ModerationStatus::Approved
    }
}

impl fmt::Display for ModerationStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ModerationStatus::Pending => write!(f, "pending"),
            ModerationStatus::Approved => write!(f, "approved"),
            ModerationStatus::Rejected => write!(f, "rejected"),
            ModerationStatus::Postponed => write!(f, "postponed"),
        }
    }
}
