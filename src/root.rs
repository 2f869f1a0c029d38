use alloc::vec::Vec;
use core::fmt::Debug;

use crate::endian::array_at;
use crate::error::{Error, OperationError};
use crate::io::SectorReader;
use crate::name::ShortName;
use crate::region::boot::BootParameters;
use crate::region::directory::{DirectoryEntry, ENTRY_SIZE};
use crate::types::SectorID;

/// Root directory entries plus the sector where cluster 2 begins
#[derive(Clone, Debug)]
pub struct RootDirectory {
    entries: Vec<DirectoryEntry>,
    data_region: SectorID,
}

impl RootDirectory {
    pub(crate) fn load<E: Debug, IO>(
        reader: &mut SectorReader<IO>,
        boot: &BootParameters,
    ) -> Result<Self, Error<E>>
    where
        IO: crate::io::IO<Error = E>,
    {
        let sector = boot.root_directory_sector();
        let count = boot.root_directory_sectors();
        debug!("Root directory at sector {} length {}", sector, count);
        let bytes = reader.read(sector, count)?;
        let entries = bytes
            .chunks_exact(ENTRY_SIZE)
            .take(boot.root_entry_count as usize)
            .map(|chunk| DirectoryEntry::parse(&array_at(chunk, 0)))
            .collect();
        let data_region = boot.data_region_sector();
        debug!("Data region on sector {}", data_region);
        Ok(Self { entries, data_region })
    }

    pub fn new(entries: Vec<DirectoryEntry>, data_region: SectorID) -> Self {
        Self { entries, data_region }
    }

    /// Sector of cluster 2
    pub fn data_region(&self) -> SectorID {
        self.data_region
    }

    /// Every slot in on-disk order, including free and deleted ones
    pub fn iter(&self) -> core::slice::Iter<'_, DirectoryEntry> {
        self.entries.iter()
    }

    /// In-use entries other than the volume label
    pub fn files(&self) -> impl Iterator<Item = &DirectoryEntry> {
        self.iter().filter(|entry| entry.in_use() && !entry.is_volume_label())
    }

    pub fn volume_label(&self) -> Option<&ShortName> {
        let mut iter = self.iter().filter(|entry| entry.in_use());
        iter.find(|entry| entry.is_volume_label()).map(|entry| &entry.name)
    }

    /// Exact 11 byte comparison, first match wins. Attributes are not considered
    /// and `name` is not normalized.
    pub fn find(&self, name: &ShortName) -> Result<&DirectoryEntry, OperationError> {
        let index = self.position(name).ok_or(OperationError::NotFound)?;
        Ok(&self.entries[index])
    }

    pub fn position(&self, name: &ShortName) -> Option<usize> {
        self.iter().position(|entry| entry.name == *name)
    }
}
