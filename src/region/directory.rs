use bitfield::bitfield;
#[cfg(feature = "chrono")]
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::endian::{array_at, u16_at, u32_at};
use crate::name::ShortName;
use crate::types::ClusterID;

pub const ENTRY_SIZE: usize = 32;

const FREE: u8 = 0x00;
const DELETED: u8 = 0xE5;

bitfield! {
    #[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
    pub struct Attributes(u8);
    pub read_only, _: 0;
    pub hidden, _: 1;
    pub system, _: 2;
    pub volume_id, _: 3;
    pub directory, _: 4;
    pub archive, _: 5;
}

bitfield! {
    #[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
    pub struct Date(u16);
    year_offset, _: 15, 9;
    pub month, _: 8, 5;
    pub day, _: 4, 0;
}

impl Date {
    pub fn year(&self) -> u16 {
        self.year_offset() + 1980
    }
}

bitfield! {
    #[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
    pub struct Time(u16);
    pub hour, _: 15, 11;
    pub minute, _: 10, 5;
    double_second, _: 4, 0;
}

impl Time {
    pub fn second(&self) -> u16 {
        self.double_second() * 2
    }
}

#[cfg(feature = "chrono")]
fn datetime(date: Date, time: Time) -> Option<NaiveDateTime> {
    let (month, day) = (date.month() as u32, date.day() as u32);
    let date = NaiveDate::from_ymd_opt(date.year() as i32, month, day)?;
    let (hour, minute, second) = (time.hour() as u32, time.minute() as u32, time.second() as u32);
    let time = NaiveTime::from_hms_opt(hour, minute, second)?;
    Some(NaiveDateTime::new(date, time))
}

/// Root directory record, 32 bytes on disk
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: ShortName,
    pub attributes: Attributes,
    pub creation_time_tenths: u8,
    pub creation_time: Time,
    pub creation_date: Date,
    pub access_date: Date,
    /// Always zero on FAT12
    pub first_cluster_high: u16,
    pub modified_time: Time,
    pub modified_date: Date,
    pub first_cluster_low: u16,
    pub size: u32,
}

impl DirectoryEntry {
    pub fn parse(bytes: &[u8; ENTRY_SIZE]) -> Self {
        Self {
            name: ShortName::new(array_at(bytes, 0)),
            attributes: Attributes(bytes[11]),
            // byte 12 reserved
            creation_time_tenths: bytes[13],
            creation_time: Time(u16_at(bytes, 14)),
            creation_date: Date(u16_at(bytes, 16)),
            access_date: Date(u16_at(bytes, 18)),
            first_cluster_high: u16_at(bytes, 20),
            modified_time: Time(u16_at(bytes, 22)),
            modified_date: Date(u16_at(bytes, 24)),
            first_cluster_low: u16_at(bytes, 26),
            size: u32_at(bytes, 28),
        }
    }

    /// Only low 16 bits are used, no FAT32 high word
    pub fn first_cluster(&self) -> ClusterID {
        self.first_cluster_low.into()
    }

    /// Slot never used
    pub fn is_free(&self) -> bool {
        self.name.as_bytes()[0] == FREE
    }

    pub fn is_deleted(&self) -> bool {
        self.name.as_bytes()[0] == DELETED
    }

    pub fn in_use(&self) -> bool {
        !self.is_free() && !self.is_deleted()
    }

    pub fn is_directory(&self) -> bool {
        self.attributes.directory()
    }

    pub fn is_volume_label(&self) -> bool {
        self.attributes.volume_id()
    }

    #[cfg(feature = "chrono")]
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        let datetime = datetime(self.creation_date, self.creation_time)?;
        let millis = self.creation_time_tenths as i64 * 10;
        Some(datetime + chrono::TimeDelta::try_milliseconds(millis)?)
    }

    #[cfg(feature = "chrono")]
    pub fn modified_at(&self) -> Option<NaiveDateTime> {
        datetime(self.modified_date, self.modified_time)
    }

    #[cfg(feature = "chrono")]
    pub fn accessed_on(&self) -> Option<NaiveDate> {
        let date = self.access_date;
        NaiveDate::from_ymd_opt(date.year() as i32, date.month() as u32, date.day() as u32)
    }
}
