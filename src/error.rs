use core::fmt::Debug;

use displaydoc::Display;

use crate::types::{ClusterID, SectorID};

/// Malformed image content
#[derive(Copy, Clone, Debug, Display, thiserror::Error, PartialEq, Eq)]
pub enum DataError {
    /// Boot sector too short, {0} bytes available
    BootSector(usize),
    /// Boot sector declares zero bytes per sector
    SectorSize,
    /// Boot sector declares zero sectors per cluster
    ClusterSize,
    /// Cluster {0} is out of FAT range
    ClusterOutOfRange(ClusterID),
    /// Cluster chain links to reserved cluster {0}
    InvalidCluster(ClusterID),
    /// Cluster chain longer than FAT capacity
    ChainLoop,
    /// Cluster chain ends after {actual} bytes, {expected} bytes declared
    ChainTooShort { expected: u32, actual: usize },
}

#[derive(Copy, Clone, Debug, Display, thiserror::Error, PartialEq, Eq)]
pub enum OperationError {
    /// No such file
    NotFound,
}

/// Coarse error classification for callers mapping failures to exit statuses
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Parse,
    NotFound,
}

#[derive(Debug, Display, thiserror::Error)]
pub enum Error<E: Debug> {
    /// IO error: {0:?}
    IO(E),
    /// Short read at sector {sector}, {expected} bytes wanted, {actual} bytes read
    ShortRead { sector: SectorID, expected: usize, actual: usize },
    /// {0}
    Data(#[from] DataError),
    /// {0}
    Operation(#[from] OperationError),
}

impl<E: Debug> Error<E> {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::IO(_) | Self::ShortRead { .. } => ErrorKind::Io,
            Self::Data(_) => ErrorKind::Parse,
            Self::Operation(OperationError::NotFound) => ErrorKind::NotFound,
        }
    }
}
