use std::fmt;
use std::fmt::Formatter;
use crate::tracker::structs::peer_id::PeerId;

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl PeerId {
    /// Azureus-style client prefix (`-qB4650-` gives `qB`), when present.
    pub fn get_client_prefix(&self) -> Option<&str> {
        if self.0[0] == b'-' && self.0[7] == b'-' {
            return std::str::from_utf8(&self.0[1..3]).ok();
        }
        None
    }
}

impl std::str::FromStr for PeerId {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut result = PeerId([0u8; 20]);
        hex::decode_to_slice(s, &mut result.0)?;
        Ok(result)
    }
}

impl TryFrom<&[u8]> for PeerId {
    type Error = std::array::TryFromSliceError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        Ok(PeerId(<[u8; 20]>::try_from(data)?))
    }
}

impl From<[u8; 20]> for PeerId {
    fn from(data: [u8; 20]) -> Self {
        PeerId(data)
    }
}

impl serde::ser::Serialize for PeerId {
    fn serialize<S: serde::ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::de::Deserialize<'de> for PeerId {
    fn deserialize<D: serde::de::Deserializer<'de>>(des: D) -> Result<Self, D::Error> {
        struct PeerIdVisitor;

        impl serde::de::Visitor<'_> for PeerIdVisitor {
            type Value = PeerId;

            fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
                formatter.write_str("a 40 character hex string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                v.parse::<PeerId>().map_err(|_| E::custom("expected 40 character hex string"))
            }
        }
        des.deserialize_str(PeerIdVisitor)
    }
}
