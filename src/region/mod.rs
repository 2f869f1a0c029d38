/// Boot sector, volume geometry parameters, 1 sector
pub(crate) mod boot;

/// FAT region, 12-bit packed cluster links
/// ([`reserved-sectors`][link] .. + [`sectors-per-fat`][link] * [`number-of-fats`][link])
///
/// [link]: boot::BootParameters
pub(crate) mod fat;

/// Root directory region, [`root-entry-count`][link] entries of 32 bytes
///
/// [link]: boot::BootParameters
pub(crate) mod directory;
