use derive_more::{Display, From, Into};

/// Logical block address, a zero based sector index into the image
#[derive(Copy, Clone, Debug, Default, Display, From, Into, Eq, Ord, PartialOrd, PartialEq)]
pub struct SectorID(u32);

impl SectorID {
    pub(crate) const BOOT: Self = Self(0);
}

impl<I: Into<u32>> core::ops::Add<I> for SectorID {
    type Output = Self;

    fn add(self, rhs: I) -> Self {
        Self(self.0 + rhs.into())
    }
}

impl<I: Into<u32>> core::ops::AddAssign<I> for SectorID {
    fn add_assign(&mut self, rhs: I) {
        self.0 += rhs.into()
    }
}

#[derive(Copy, Clone, Debug, Default, Display, From, Into, Eq, Ord, PartialOrd, PartialEq)]
pub struct ClusterID(u32);

impl ClusterID {
    pub(crate) const FIRST: Self = Self(2);

    /// Clusters 0 and 1 are reserved, data clusters start from 2
    pub fn valid(&self) -> bool {
        self.0 >= Self::FIRST.0
    }

    /// Distance from the first data cluster, caller guarantees `valid()`
    pub(crate) fn offset(self) -> u32 {
        self.0 - Self::FIRST.0
    }
}

impl From<u16> for ClusterID {
    fn from(value: u16) -> Self {
        Self(value as u32)
    }
}
