//! Big-endian byte lanes within a doubleword.
//!
//! A doubleword container holds the eight bytes at an 8-byte-aligned address, with the byte at
//! the lowest address in bits 56-63. These helpers take the full access address and use only
//! its low three bits to pick the lane; halfword and word accesses ignore the bits below their
//! natural alignment.

/// Bit shift of the byte lane addressed by `addr`.
#[inline]
const fn byte_shift(addr: u64) -> u64 {
    (7 - (addr & 7)) * 8
}

/// Bit shift of the halfword lane addressed by `addr`.
#[inline]
const fn half_shift(addr: u64) -> u64 {
    (6 - (addr & 6)) * 8
}

/// Bit shift of the word lane addressed by `addr`.
#[inline]
const fn word_shift(addr: u64) -> u64 {
    (4 - (addr & 4)) * 8
}

/// Extracts the byte at `addr` from its doubleword.
pub const fn get_byte(addr: u64, dword: u64) -> u8 {
    (dword >> byte_shift(addr)) as u8
}

/// Extracts the halfword at `addr` from its doubleword.
pub const fn get_half(addr: u64, dword: u64) -> u16 {
    (dword >> half_shift(addr)) as u16
}

/// Extracts the word at `addr` from its doubleword.
pub const fn get_word(addr: u64, dword: u64) -> u32 {
    (dword >> word_shift(addr)) as u32
}

/// Returns `dword` with the byte at `addr` replaced by `val`.
pub const fn set_byte(addr: u64, dword: u64, val: u8) -> u64 {
    let shift = byte_shift(addr);
    (dword & !(0xff << shift)) | ((val as u64) << shift)
}

/// Returns `dword` with the halfword at `addr` replaced by `val`.
pub const fn set_half(addr: u64, dword: u64, val: u16) -> u64 {
    let shift = half_shift(addr);
    (dword & !(0xffff << shift)) | ((val as u64) << shift)
}

/// Returns `dword` with the word at `addr` replaced by `val`.
pub const fn set_word(addr: u64, dword: u64, val: u32) -> u64 {
    let shift = word_shift(addr);
    (dword & !(0xffff_ffff << shift)) | ((val as u64) << shift)
}
