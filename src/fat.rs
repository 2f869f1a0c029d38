use alloc::vec::Vec;
use core::fmt::Debug;

use crate::error::{DataError, Error};
use crate::io::SectorReader;
use crate::region::boot::BootParameters;
pub use crate::region::fat::Entry;
use crate::region::fat::MAX_CHAIN_LENGTH;
use crate::types::ClusterID;

/// First FAT copy, loaded once and read-only afterwards
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FatTable {
    bytes: Vec<u8>,
}

impl FatTable {
    pub(crate) fn load<E: Debug, IO>(
        reader: &mut SectorReader<IO>,
        boot: &BootParameters,
    ) -> Result<Self, Error<E>>
    where
        IO: crate::io::IO<Error = E>,
    {
        let (sector, count) = (boot.fat_sector(), boot.sectors_per_fat as u32);
        debug!("FAT at sector {} length {}", sector, count);
        let bytes = reader.read(sector, count)?;
        Ok(Self { bytes })
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Number of 12-bit entries fully held by the table
    pub fn capacity(&self) -> u32 {
        u32::try_from(self.bytes.len() / 3 * 2 + self.bytes.len() % 3 / 2).unwrap_or(u32::MAX)
    }

    /// Raw 12-bit value of `cluster`, two entries share three bytes
    pub fn entry(&self, cluster: ClusterID) -> Option<u16> {
        let cluster = u32::from(cluster) as usize;
        let index = cluster * 3 / 2;
        let bytes = self.bytes.get(index..index + 2)?;
        let value = u16::from_le_bytes([bytes[0], bytes[1]]);
        Some(if cluster % 2 == 0 { value & 0x0FFF } else { value >> 4 })
    }

    pub fn next(&self, cluster: ClusterID) -> Result<Entry, DataError> {
        match self.entry(cluster) {
            Some(value) => Ok(Entry::from(value)),
            None => Err(DataError::ClusterOutOfRange(cluster)),
        }
    }

    pub fn chain(&self, first: ClusterID) -> Chain<'_> {
        let limit = self.capacity().min(MAX_CHAIN_LENGTH);
        Chain { fat: self, next: Some(first), steps: 0, limit }
    }
}

/// Lazily followed cluster chain, yields `first` then every linked cluster
/// until an end-of-chain marker
pub struct Chain<'a> {
    fat: &'a FatTable,
    next: Option<ClusterID>,
    steps: u32,
    limit: u32,
}

impl<'a> Iterator for Chain<'a> {
    type Item = Result<ClusterID, DataError>;

    fn next(&mut self) -> Option<Self::Item> {
        let cluster = self.next.take()?;
        if !cluster.valid() {
            return Some(Err(DataError::InvalidCluster(cluster)));
        }
        self.steps += 1;
        if self.steps > self.limit {
            return Some(Err(DataError::ChainLoop));
        }
        match self.fat.next(cluster) {
            Ok(Entry::Next(next)) => self.next = Some(next),
            Ok(Entry::Last) => trace!("Cluster chain ends at {}", cluster),
            Err(e) => return Some(Err(e)),
        }
        Some(Ok(cluster))
    }
}
