use crate::types::ClusterID;

/// Smallest 12-bit value marking the end of a cluster chain
pub(crate) const END_OF_CHAIN: u16 = 0xFF8;

/// Data clusters a 12-bit link can address, longer chains revisit a cluster
pub(crate) const MAX_CHAIN_LENGTH: u32 = (END_OF_CHAIN - 2) as u32;

/// Decoded FAT12 link.
///
/// 0xFF0..=0xFF6 (reserved) and 0xFF7 (bad cluster) are not distinguished
/// from data links and decode as [`Entry::Next`], only 0xFF8..=0xFFF ends a chain.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    Next(ClusterID),
    Last,
}

impl From<u16> for Entry {
    fn from(value: u16) -> Self {
        match value & 0x0FFF {
            END_OF_CHAIN..=0xFFF => Self::Last,
            value => Self::Next(value.into()),
        }
    }
}
