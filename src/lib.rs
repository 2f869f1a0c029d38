#![doc = include_str!("../README.md")]
#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

#[macro_use]
extern crate hex_literal;
#[macro_use]
extern crate log;

mod endian;
pub mod error;
pub mod fat;
mod file;
pub mod io;
pub mod name;
mod region;
mod root;
#[cfg(test)]
mod testing;
pub mod types;

use alloc::vec::Vec;
use core::fmt::Debug;

use error::Error;
use fat::FatTable;
use io::SectorReader;
pub use name::ShortName;
pub use region::boot::{BootParameters, BOOT_SECTOR_SIZE};
pub use region::directory::{Attributes, Date, DirectoryEntry, Time, ENTRY_SIZE};
pub use root::RootDirectory;
use types::SectorID;

/// Read-only FAT12 image
pub struct FAT12<IO> {
    reader: SectorReader<IO>,
    boot: BootParameters,
}

impl<E: Debug, IO: io::IO<Error = E>> FAT12<IO> {
    pub fn new(mut io: IO) -> Result<Self, Error<E>> {
        let mut bytes = [0u8; BOOT_SECTOR_SIZE];
        let size = io.read(u32::from(SectorID::BOOT) as u64, &mut bytes).map_err(|e| Error::IO(e))?;
        let boot = BootParameters::parse(&bytes[..size]).map_err(|e| {
            warn!("Invalid boot sector: {}", e);
            Error::Data(e)
        })?;
        debug!("Sector size {} cluster size {}", boot.bytes_per_sector, boot.cluster_size());
        debug!("Boot parameters: {:?}", boot);
        let reader = SectorReader::new(io, boot.bytes_per_sector);
        Ok(Self { reader, boot })
    }

    pub fn boot_parameters(&self) -> &BootParameters {
        &self.boot
    }

    pub fn load_fat(&mut self) -> Result<FatTable, Error<E>> {
        FatTable::load(&mut self.reader, &self.boot)
    }

    pub fn load_root_directory(&mut self) -> Result<RootDirectory, Error<E>> {
        RootDirectory::load(&mut self.reader, &self.boot)
    }

    /// Exactly `entry.size` bytes following cluster chain of `entry`
    pub fn read_file(
        &mut self,
        fat: &FatTable,
        root: &RootDirectory,
        entry: &DirectoryEntry,
    ) -> Result<Vec<u8>, Error<E>> {
        file::read_contents(&mut self.reader, &self.boot, fat, root.data_region(), entry)
    }

    /// Loads FAT and root directory then reads file named `name`
    pub fn extract(&mut self, name: &ShortName) -> Result<Vec<u8>, Error<E>> {
        let fat = self.load_fat()?;
        let root = self.load_root_directory()?;
        let entry = root.find(name)?;
        debug!("Found {} at cluster {} size {}", entry.name, entry.first_cluster(), entry.size);
        self.read_file(&fat, &root, entry)
    }

    pub fn into_inner(self) -> IO {
        self.reader.into_inner()
    }
}

impl<IO> Debug for FAT12<IO> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FAT12").field("boot", &self.boot).finish()
    }
}
