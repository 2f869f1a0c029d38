use alloc::vec::Vec;
use core::fmt::Debug;

use crate::error::{DataError, Error};
use crate::fat::FatTable;
use crate::io::SectorReader;
use crate::region::boot::BootParameters;
use crate::region::directory::DirectoryEntry;
use crate::types::SectorID;

/// Reads the whole cluster chain of `entry` and returns exactly `entry.size` bytes.
///
/// Clusters are read whole, so the buffer holds cluster padding until truncated.
/// Nothing is returned on failure.
pub(crate) fn read_contents<E: Debug, IO>(
    reader: &mut SectorReader<IO>,
    boot: &BootParameters,
    fat: &FatTable,
    data_region: SectorID,
    entry: &DirectoryEntry,
) -> Result<Vec<u8>, Error<E>>
where
    IO: crate::io::IO<Error = E>,
{
    let size = entry.size as usize;
    if size == 0 {
        return Ok(Vec::new());
    }
    let cluster_size = boot.cluster_size() as usize;
    let sectors_per_cluster = boot.sectors_per_cluster as u32;
    let mut bytes = Vec::with_capacity(size + cluster_size);
    debug!("Read {} bytes from cluster {}", size, entry.first_cluster());
    for cluster in fat.chain(entry.first_cluster()) {
        let cluster = cluster?;
        let sector = data_region + cluster.offset() * sectors_per_cluster;
        let cursor = bytes.len();
        bytes.resize(cursor + cluster_size, 0);
        reader.read_into(sector, &mut bytes[cursor..])?;
    }
    if bytes.len() < size {
        return Err(DataError::ChainTooShort { expected: entry.size, actual: bytes.len() }.into());
    }
    bytes.truncate(size);
    Ok(bytes)
}
