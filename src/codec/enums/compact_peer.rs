/// One packed peer: address bytes followed by the big-endian port.
///
/// `V4` entries belong in the `peers` string, `V6` entries in `peers6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompactPeer {
    V4([u8; 6]),
    V6([u8; 18]),
}
