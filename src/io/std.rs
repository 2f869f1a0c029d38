use std::fs;
use std::io::prelude::*;
use std::io::{ErrorKind, SeekFrom};
use std::path::Path;

/// File backed image, opened read-only
#[derive(Debug)]
pub struct FileIO {
    file: fs::File,
}

impl FileIO {
    pub fn open<P: AsRef<Path>>(filepath: P) -> std::io::Result<Self> {
        let file = fs::File::options().read(true).open(filepath)?;
        Ok(Self { file })
    }
}

impl super::IO for FileIO {
    type Error = std::io::Error;

    fn read(&mut self, offset: u64, mut buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.file.seek(SeekFrom::Start(offset))?;
        let mut total = 0;
        while !buf.is_empty() {
            match self.file.read(buf) {
                Ok(0) => break,
                Ok(size) => {
                    total += size;
                    buf = &mut buf[size..];
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(total)
    }
}
