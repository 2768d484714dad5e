use crate::tracker::enums::tracker_error::TrackerError;

impl TrackerError {
    pub fn code(&self) -> u16 {
        match self {
            TrackerError::UaMissing => 120,
            TrackerError::UaTooLong { .. } => 121,
            TrackerError::SuspiciousHeaders { .. } => 122,
            TrackerError::UaLooksLikeBrowser => 123,
            TrackerError::UaBlacklisted { .. } => 124,
            TrackerError::PasskeyMissing => 130,
            TrackerError::PasskeyFormatInvalid => 131,
            TrackerError::PasskeyLengthInvalid { .. } => 132,
            TrackerError::FieldLengthInvalid { .. } => 133,
            TrackerError::FieldMissing { .. } => 134,
            TrackerError::FieldNumericInvalid { .. } => 135,
            TrackerError::EventInvalid { .. } => 136,
            TrackerError::PortInvalid { .. } => 137,
            TrackerError::UserUnknown => 140,
            TrackerError::UserRestricted { .. } => 141,
            TrackerError::DownloadDenied => 142,
            TrackerError::TorrentUnknown => 150,
            TrackerError::TorrentNotApproved { .. } => 151,
            TrackerError::CompletedWithoutPeer => 152,
            TrackerError::TooManyConnections { .. } => 160,
            TrackerError::AnnounceTooSoon { .. } => 162,
            TrackerError::SlotsExhausted { .. } => 164,
        }
    }
}
