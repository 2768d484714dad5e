use crate::codec::codec::encode_response;
use crate::tracker::enums::announce_response::AnnounceResponse;

impl AnnounceResponse {
    pub fn encode(&self) -> Vec<u8> {
        encode_response(self)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, AnnounceResponse::Success { .. })
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            AnnounceResponse::Success { .. } => None,
            AnnounceResponse::Failure { reason, .. } => Some(reason.as_str()),
        }
    }
}
