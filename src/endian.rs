// Little endian field access for fixed layout on-disk records,
// caller guarantees `offset + size_of::<T>() <= bytes.len()`

macro_rules! define {
    ($name:ident, $type:ty) => {
        #[inline]
        pub(crate) fn $name(bytes: &[u8], offset: usize) -> $type {
            const SIZE: usize = core::mem::size_of::<$type>();
            let mut array = [0u8; SIZE];
            array.copy_from_slice(&bytes[offset..offset + SIZE]);
            <$type>::from_le_bytes(array)
        }
    };
}

define!(u16_at, u16);
define!(u32_at, u32);

#[inline]
pub(crate) fn array_at<const N: usize>(bytes: &[u8], offset: usize) -> [u8; N] {
    let mut array = [0u8; N];
    array.copy_from_slice(&bytes[offset..offset + N]);
    array
}
