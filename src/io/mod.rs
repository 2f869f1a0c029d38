#[cfg(feature = "std")]
pub mod std;

use alloc::vec;
use alloc::vec::Vec;
use core::convert::Infallible;
use core::fmt::Debug;

use crate::error::Error;
use crate::types::SectorID;

/// Readable and seekable image source.
pub trait IO {
    type Error: Debug;

    /// Read bytes at absolute `offset` into `buf`, returns number of bytes read,
    /// which is less than `buf.len()` only when image ends.
    fn read(&mut self, offset: u64, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

/// In-memory image
#[derive(Clone, Debug)]
pub struct Memory<T>(T);

impl<T: AsRef<[u8]>> Memory<T> {
    pub fn new(image: T) -> Self {
        Self(image)
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: AsRef<[u8]>> IO for Memory<T> {
    type Error = Infallible;

    fn read(&mut self, offset: u64, buf: &mut [u8]) -> Result<usize, Infallible> {
        let image = self.0.as_ref();
        let start = usize::try_from(offset).unwrap_or(usize::MAX).min(image.len());
        let length = buf.len().min(image.len() - start);
        buf[..length].copy_from_slice(&image[start..start + length]);
        Ok(length)
    }
}

/// Whole sector access on top of an [`IO`], sector size as declared by boot sector
pub struct SectorReader<IO> {
    io: IO,
    sector_size: u16,
}

impl<E: Debug, IO: crate::io::IO<Error = E>> SectorReader<IO> {
    pub fn new(io: IO, sector_size: u16) -> Self {
        Self { io, sector_size }
    }

    /// Read exactly `count` sectors starting at `id`, short read is an error
    pub fn read(&mut self, id: SectorID, count: u32) -> Result<Vec<u8>, Error<E>> {
        let mut buf = vec![0u8; count as usize * self.sector_size as usize];
        self.read_into(id, &mut buf)?;
        Ok(buf)
    }

    /// Fill `buf` with whole sectors starting at `id`, caller guarantees
    /// `buf.len()` is a multiple of sector size
    pub fn read_into(&mut self, id: SectorID, buf: &mut [u8]) -> Result<(), Error<E>> {
        let offset = u32::from(id) as u64 * self.sector_size as u64;
        trace!("Read {} bytes at sector {}", buf.len(), id);
        let actual = self.io.read(offset, buf).map_err(|e| Error::IO(e))?;
        if actual < buf.len() {
            warn!("Short read at sector {}, {} of {} bytes", id, actual, buf.len());
            return Err(Error::ShortRead { sector: id, expected: buf.len(), actual });
        }
        Ok(())
    }

    pub fn into_inner(self) -> IO {
        self.io
    }
}
