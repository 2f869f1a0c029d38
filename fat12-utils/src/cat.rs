use std::io;
use std::io::Write;

use fat12::io::std::FileIO;
use fat12::{ShortName, FAT12};
use pretty_hex::pretty_hex;

use crate::CliError;

#[derive(Copy, Clone, Debug)]
pub enum Format {
    /// Printable ASCII as is, other bytes as <xx>
    Printable,
    Hex,
    Raw,
}

fn printable(bytes: &[u8], output: &mut impl Write) -> io::Result<()> {
    for &byte in bytes {
        match byte {
            b' ' | 0x21..=0x7E => output.write_all(&[byte])?,
            _ => write!(output, "<{:02x}>", byte)?,
        }
    }
    writeln!(output)
}

pub fn cat(fat12: &mut FAT12<FileIO>, name: &str, format: Format) -> Result<(), CliError> {
    let name: ShortName = name.parse()?;
    let bytes = fat12.extract(&name)?;
    let mut stdout = io::stdout().lock();
    let result = match format {
        Format::Printable => printable(&bytes, &mut stdout),
        Format::Hex => writeln!(stdout, "{}", pretty_hex(&bytes)),
        Format::Raw => stdout.write_all(&bytes),
    };
    result.and_then(|_| stdout.flush()).map_err(CliError::Output)
}
