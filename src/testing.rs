// Synthetic FAT12 images for unit tests

use alloc::vec;
use alloc::vec::Vec;
use core::convert::Infallible;

use crate::io::{Memory, IO};
use crate::region::boot::BootParameters;
use crate::region::directory::{DirectoryEntry, ENTRY_SIZE};

const RESERVED_SECTORS: u16 = 1;
const NUMBER_OF_FATS: u8 = 2;
const MEDIA_DESCRIPTOR: u8 = 0xF0;

/// Packs 12-bit values the way FAT12 stores them
pub(crate) fn encode_fat(entries: &[u16]) -> Vec<u8> {
    let mut bytes = vec![0u8; (entries.len() * 3 + 1) / 2 + 1];
    for (cluster, &value) in entries.iter().enumerate() {
        let index = cluster * 3 / 2;
        let word = u16::from_le_bytes([bytes[index], bytes[index + 1]]);
        let word = match cluster % 2 {
            0 => (word & 0xF000) | (value & 0x0FFF),
            _ => (word & 0x000F) | (value << 4),
        };
        bytes[index..index + 2].copy_from_slice(&word.to_le_bytes());
    }
    bytes
}

fn entry_bytes(name: &[u8; 11], attributes: u8, cluster: u16, size: u32) -> [u8; ENTRY_SIZE] {
    let mut bytes = [0u8; ENTRY_SIZE];
    bytes[..11].copy_from_slice(name);
    bytes[11] = attributes;
    bytes[26..28].copy_from_slice(&cluster.to_le_bytes());
    bytes[28..32].copy_from_slice(&size.to_le_bytes());
    bytes
}

pub(crate) fn entry(name: &[u8; 11], attributes: u8, cluster: u16, size: u32) -> DirectoryEntry {
    DirectoryEntry::parse(&entry_bytes(name, attributes, cluster, size))
}

struct Placement {
    name: [u8; 11],
    attributes: u8,
    data: Vec<u8>,
    clusters: Vec<u16>,
}

pub(crate) struct ImageBuilder {
    bytes_per_sector: u16,
    sectors_per_cluster: u8,
    root_entries: u16,
    files: Vec<Placement>,
    next_cluster: u16,
}

impl ImageBuilder {
    pub fn new(bytes_per_sector: u16, sectors_per_cluster: u8, root_entries: u16) -> Self {
        Self { bytes_per_sector, sectors_per_cluster, root_entries, files: vec![], next_cluster: 2 }
    }

    fn cluster_size(&self) -> usize {
        self.bytes_per_sector as usize * self.sectors_per_cluster as usize
    }

    /// Places `data` on consecutive free clusters
    pub fn file(mut self, name: &[u8; 11], data: &[u8]) -> Self {
        let count = (data.len() + self.cluster_size() - 1) / self.cluster_size();
        let clusters: Vec<u16> = (0..count as u16).map(|i| self.next_cluster + i).collect();
        self.next_cluster += count as u16;
        self.files.push(Placement { name: *name, attributes: 0x20, data: data.to_vec(), clusters });
        self
    }

    /// Places `data` on given clusters in chain order
    pub fn fragmented(mut self, name: &[u8; 11], data: &[u8], clusters: &[u16]) -> Self {
        let next = clusters.iter().max().map(|&c| c + 1).unwrap_or(2);
        self.next_cluster = self.next_cluster.max(next);
        let clusters = clusters.to_vec();
        self.files.push(Placement { name: *name, attributes: 0x20, data: data.to_vec(), clusters });
        self
    }

    pub fn directory(mut self, name: &[u8; 11], cluster: u16) -> Self {
        let clusters = vec![cluster];
        self.next_cluster = self.next_cluster.max(cluster + 1);
        self.files.push(Placement { name: *name, attributes: 0x10, data: vec![], clusters });
        self
    }

    pub fn build(self) -> Image {
        let sector_size = self.bytes_per_sector as usize;
        let cluster_size = self.cluster_size();
        let num_clusters = self.next_cluster as usize;

        let mut fat = vec![0u16; num_clusters];
        fat[0] = 0xF00 | MEDIA_DESCRIPTOR as u16;
        fat[1] = 0xFFF;
        for file in self.files.iter() {
            for pair in file.clusters.windows(2) {
                fat[pair[0] as usize] = pair[1];
            }
            if let Some(&last) = file.clusters.last() {
                fat[last as usize] = 0xFFF;
            }
        }
        let mut fat = encode_fat(&fat);
        let sectors_per_fat = (fat.len() + sector_size - 1) / sector_size;
        fat.resize(sectors_per_fat * sector_size, 0);

        let root_sectors = (self.root_entries as usize * ENTRY_SIZE + sector_size - 1) / sector_size;
        let fat_start = RESERVED_SECTORS as usize;
        let root_start = fat_start + sectors_per_fat * NUMBER_OF_FATS as usize;
        let data_start = root_start + root_sectors;
        let data_sectors = (num_clusters - 2) * self.sectors_per_cluster as usize;
        let total_sectors = data_start + data_sectors;
        let mut bytes = vec![0u8; total_sectors * sector_size];

        let boot = &mut bytes[..sector_size];
        boot[..11].copy_from_slice(b"\xEB\x3C\x90mkfs.fat");
        boot[11..13].copy_from_slice(&self.bytes_per_sector.to_le_bytes());
        boot[13] = self.sectors_per_cluster;
        boot[14..16].copy_from_slice(&RESERVED_SECTORS.to_le_bytes());
        boot[16] = NUMBER_OF_FATS;
        boot[17..19].copy_from_slice(&self.root_entries.to_le_bytes());
        boot[19..21].copy_from_slice(&(total_sectors as u16).to_le_bytes());
        boot[21] = MEDIA_DESCRIPTOR;
        boot[22..24].copy_from_slice(&(sectors_per_fat as u16).to_le_bytes());
        boot[38] = 0x29;
        boot[39..43].copy_from_slice(&0xCAFEu32.to_le_bytes());
        boot[43..54].copy_from_slice(b"TESTDISK   ");
        boot[54..62].copy_from_slice(b"FAT12   ");
        if sector_size >= 512 {
            boot[510..512].copy_from_slice(&[0x55, 0xAA]);
        }

        for i in 0..NUMBER_OF_FATS as usize {
            let offset = (fat_start + i * sectors_per_fat) * sector_size;
            bytes[offset..offset + fat.len()].copy_from_slice(&fat);
        }

        for (index, file) in self.files.iter().enumerate() {
            assert!(index < self.root_entries as usize, "root directory full");
            let first = file.clusters.first().copied().unwrap_or(0);
            let size = file.data.len() as u32;
            let entry = entry_bytes(&file.name, file.attributes, first, size);
            let offset = root_start * sector_size + index * ENTRY_SIZE;
            bytes[offset..offset + ENTRY_SIZE].copy_from_slice(&entry);

            for (&cluster, chunk) in file.clusters.iter().zip(file.data.chunks(cluster_size)) {
                let sector = data_start + (cluster as usize - 2) * self.sectors_per_cluster as usize;
                let offset = sector * sector_size;
                bytes[offset..offset + chunk.len()].copy_from_slice(chunk);
            }
        }
        Image { bytes }
    }
}

pub(crate) struct Image {
    pub bytes: Vec<u8>,
}

impl Image {
    pub fn boot_parameters(&self) -> BootParameters {
        BootParameters::parse(&self.bytes).unwrap()
    }
}

/// Records offset and length of every read
pub(crate) struct RecordingIO {
    image: Memory<Vec<u8>>,
    pub reads: Vec<(u64, usize)>,
}

impl RecordingIO {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { image: Memory::new(bytes), reads: vec![] }
    }
}

impl IO for RecordingIO {
    type Error = Infallible;

    fn read(&mut self, offset: u64, buf: &mut [u8]) -> Result<usize, Infallible> {
        self.reads.push((offset, buf.len()));
        self.image.read(offset, buf)
    }
}

/// Always fails, for error propagation
pub(crate) struct BrokenIO;

impl IO for BrokenIO {
    type Error = &'static str;

    fn read(&mut self, _: u64, _: &mut [u8]) -> Result<usize, Self::Error> {
        Err("device unplugged")
    }
}
