//! Byte order selection and composition of small integers from loose bytes.

/// Specifies the byte ordering of multi-byte values.
///
/// Every operation in this crate that accepts an [Endian] also has a form without one, which
/// behaves as [Endian::Little].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Endian {
    /// Least significant byte first.
    #[default]
    Little,
    /// Most significant byte first.
    Big,
}

impl Endian {
    /// The byte order of the target platform.
    #[cfg(target_endian = "little")]
    pub const NATIVE: Endian = Endian::Little;

    /// The byte order of the target platform.
    #[cfg(target_endian = "big")]
    pub const NATIVE: Endian = Endian::Big;

    /// Composes a `u16` from two bytes, given in the order they appear in memory.
    #[inline]
    pub const fn compose_u16(self, byte0: u8, byte1: u8) -> u16 {
        match self {
            Endian::Little => byte0 as u16 | (byte1 as u16) << 8,
            Endian::Big => byte1 as u16 | (byte0 as u16) << 8,
        }
    }

    /// Composes an unsigned 24-bit value from three bytes, given in the order they appear in
    /// memory.
    ///
    /// The upper 8 bits of the result are always zero.
    #[inline]
    pub const fn compose_u24(self, byte0: u8, byte1: u8, byte2: u8) -> u32 {
        match self {
            Endian::Little => byte0 as u32 | (byte1 as u32) << 8 | (byte2 as u32) << 16,
            Endian::Big => byte2 as u32 | (byte1 as u32) << 8 | (byte0 as u32) << 16,
        }
    }

    /// Splits the low 24 bits of `value` into three bytes, in the order they should appear in
    /// memory. The upper 8 bits of `value` are ignored.
    #[inline]
    pub const fn decompose_u24(self, value: u32) -> [u8; 3] {
        let [b0, b1, b2, _] = value.to_le_bytes();
        match self {
            Endian::Little => [b0, b1, b2],
            Endian::Big => [b2, b1, b0],
        }
    }
}
