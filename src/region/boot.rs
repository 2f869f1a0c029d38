// Boot sector, BIOS parameter block followed by extended boot record

use crate::endian::{array_at, u16_at, u32_at};
use crate::error::DataError;
use crate::region::directory::ENTRY_SIZE;
use crate::types::SectorID;

/// Packed length of BIOS parameter block plus extended boot record
pub const BOOT_SECTOR_SIZE: usize = 62;

const EXTENDED_BOOT_SIGNATURES: [u8; 2] = hex!("28 29");

/// Volume geometry, immutable once parsed
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BootParameters {
    pub jump_boot: [u8; 3],
    pub oem_id: [u8; 8],
    pub bytes_per_sector: u16,
    pub sectors_per_cluster: u8,
    pub reserved_sectors: u16,
    pub number_of_fats: u8,
    pub root_entry_count: u16,
    pub total_sectors: u16,
    pub media_descriptor: u8,
    pub sectors_per_fat: u16,
    pub sectors_per_track: u16,
    pub heads: u16,
    pub hidden_sectors: u32,
    pub large_sector_count: u32,
    // Extended boot record
    pub drive_number: u8,
    pub extended_boot_signature: u8,
    volume_id: u32,
    volume_label: [u8; 11],
    system_id: [u8; 8],
}

impl BootParameters {
    pub fn parse(bytes: &[u8]) -> Result<Self, DataError> {
        if bytes.len() < BOOT_SECTOR_SIZE {
            return Err(DataError::BootSector(bytes.len()));
        }
        let boot = Self {
            jump_boot: array_at(bytes, 0),
            oem_id: array_at(bytes, 3),
            bytes_per_sector: u16_at(bytes, 11),
            sectors_per_cluster: bytes[13],
            reserved_sectors: u16_at(bytes, 14),
            number_of_fats: bytes[16],
            root_entry_count: u16_at(bytes, 17),
            total_sectors: u16_at(bytes, 19),
            media_descriptor: bytes[21],
            sectors_per_fat: u16_at(bytes, 22),
            sectors_per_track: u16_at(bytes, 24),
            heads: u16_at(bytes, 26),
            hidden_sectors: u32_at(bytes, 28),
            large_sector_count: u32_at(bytes, 32),
            drive_number: bytes[36],
            // byte 37 reserved
            extended_boot_signature: bytes[38],
            volume_id: u32_at(bytes, 39),
            volume_label: array_at(bytes, 43),
            system_id: array_at(bytes, 54),
        };
        if boot.bytes_per_sector == 0 {
            return Err(DataError::SectorSize);
        }
        if boot.sectors_per_cluster == 0 {
            return Err(DataError::ClusterSize);
        }
        Ok(boot)
    }

    pub fn has_extended_boot_record(&self) -> bool {
        EXTENDED_BOOT_SIGNATURES.contains(&self.extended_boot_signature)
    }

    pub fn volume_id(&self) -> Option<u32> {
        self.has_extended_boot_record().then_some(self.volume_id)
    }

    /// Volume label with trailing padding removed
    pub fn volume_label(&self) -> Option<heapless::String<11>> {
        if !self.has_extended_boot_record() {
            return None;
        }
        Some(padded_string(&self.volume_label))
    }

    pub fn system_id(&self) -> Option<heapless::String<8>> {
        if !self.has_extended_boot_record() {
            return None;
        }
        Some(padded_string(&self.system_id))
    }

    pub fn fat_sector(&self) -> SectorID {
        SectorID::from(self.reserved_sectors as u32)
    }

    /// Size in bytes of a single FAT copy
    pub fn fat_size(&self) -> usize {
        self.sectors_per_fat as usize * self.bytes_per_sector as usize
    }

    pub fn root_directory_sector(&self) -> SectorID {
        let fats = self.sectors_per_fat as u32 * self.number_of_fats as u32;
        self.fat_sector() + fats
    }

    /// Root directory span in sectors, rounded up
    pub fn root_directory_sectors(&self) -> u32 {
        let bytes = self.root_entry_count as u32 * ENTRY_SIZE as u32;
        let sector_size = self.bytes_per_sector as u32;
        (bytes + sector_size - 1) / sector_size
    }

    /// First sector of cluster 2
    pub fn data_region_sector(&self) -> SectorID {
        self.root_directory_sector() + self.root_directory_sectors()
    }

    pub fn cluster_size(&self) -> u32 {
        self.bytes_per_sector as u32 * self.sectors_per_cluster as u32
    }
}

fn padded_string<const N: usize>(bytes: &[u8; N]) -> heapless::String<N> {
    let mut string = heapless::String::new();
    for &byte in bytes.iter() {
        let ch = if byte.is_ascii() { byte as char } else { char::REPLACEMENT_CHARACTER };
        if string.push(ch).is_err() {
            break;
        }
    }
    let length = string.trim_end_matches(' ').len();
    string.truncate(length);
    string
}
