use core::fmt::{self, Debug, Display, Formatter, Write};
use core::str::FromStr;

pub const NAME_LENGTH: usize = 8;
pub const EXTENSION_LENGTH: usize = 3;

const INVALID_CHARS: &[u8] = b"\"*+,./:;<=>?[\\]|";

#[derive(Copy, Clone, Debug, displaydoc::Display, thiserror::Error, PartialEq, Eq)]
pub enum NameError {
    /// Empty file name
    Empty,
    /// File name longer than 8.3
    TooLong,
    /// Invalid character {0:?} in file name
    InvalidCharacter(char),
}

/// Space padded 8.3 name exactly as stored in a directory entry
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct ShortName([u8; NAME_LENGTH + EXTENSION_LENGTH]);

impl ShortName {
    pub const fn new(bytes: [u8; NAME_LENGTH + EXTENSION_LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; NAME_LENGTH + EXTENSION_LENGTH] {
        &self.0
    }

    pub fn name(&self) -> &[u8] {
        trim_padding(&self.0[..NAME_LENGTH])
    }

    pub fn extension(&self) -> &[u8] {
        trim_padding(&self.0[NAME_LENGTH..])
    }

    fn to_padded_str(&self) -> heapless::String<{ NAME_LENGTH + EXTENSION_LENGTH }> {
        self.0.iter().map(|&b| if b.is_ascii() { b as char } else { '?' }).collect()
    }
}

fn trim_padding(bytes: &[u8]) -> &[u8] {
    let length = bytes.iter().rposition(|&b| b != b' ').map(|i| i + 1).unwrap_or(0);
    &bytes[..length]
}

fn fill(field: &mut [u8], text: &str) -> Result<(), NameError> {
    if text.len() > field.len() {
        return Err(NameError::TooLong);
    }
    for (slot, ch) in field.iter_mut().zip(text.chars()) {
        if !ch.is_ascii() || ch.is_ascii_control() || INVALID_CHARS.contains(&(ch as u8)) {
            return Err(NameError::InvalidCharacter(ch));
        }
        *slot = ch.to_ascii_uppercase() as u8;
    }
    Ok(())
}

/// Converts `name.ext` into padded upper case form, as lookup expects
impl FromStr for ShortName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, NameError> {
        let (name, extension) = s.rsplit_once('.').unwrap_or((s, ""));
        if name.is_empty() {
            return Err(NameError::Empty);
        }
        let mut bytes = [b' '; NAME_LENGTH + EXTENSION_LENGTH];
        fill(&mut bytes[..NAME_LENGTH], name)?;
        fill(&mut bytes[NAME_LENGTH..], extension)?;
        Ok(Self(bytes))
    }
}

impl Display for ShortName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let printable = |&b: &u8| if b.is_ascii_graphic() || b == b' ' { b as char } else { '?' };
        for ch in self.name().iter().map(printable) {
            f.write_char(ch)?;
        }
        if !self.extension().is_empty() {
            f.write_char('.')?;
            for ch in self.extension().iter().map(printable) {
                f.write_char(ch)?;
            }
        }
        Ok(())
    }
}

impl Debug for ShortName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ShortName({:?})", &self.to_padded_str())
    }
}
