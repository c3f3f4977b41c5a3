//! Unaligned word access merging.
//!
//! `lwl`/`lwr` and `swl`/`swr` each touch the part of an unaligned word that lies in one
//! aligned word. With big-endian byte order, `lwl addr` supplies the high-order bytes of the
//! unaligned word starting at `addr` and `lwr addr + 3` supplies the low-order bytes; the
//! bytes not covered keep the destination register's previous value.
//!
//! The merge shift is `(addr & 3) * 8` for the left variants and `(!addr & 3) * 8` for the
//! right variants.

/// Returns a mask of the low `bits` bits.
#[inline]
const fn low_mask(bits: u32) -> u32 {
    if bits == 0 { 0 } else { u32::MAX >> (32 - bits) }
}

#[inline]
const fn left_shift_of(addr: u32) -> u32 {
    (addr & 3) * 8
}

#[inline]
const fn right_shift_of(addr: u32) -> u32 {
    (!addr & 3) * 8
}

/// Merges a `lwl` access.
///
/// # Arguments
///
/// * `word` - Aligned memory word containing `addr`.
/// * `addr` - Effective address.
/// * `reg` - Previous value of the destination register.
pub const fn merge_lwl(word: u32, addr: u32, reg: u32) -> u32 {
    let s = left_shift_of(addr);
    (word << s) | (reg & low_mask(s))
}

/// Merges a `lwr` access.
///
/// # Arguments
///
/// * `word` - Aligned memory word containing `addr`.
/// * `addr` - Effective address.
/// * `reg` - Previous value of the destination register.
pub const fn merge_lwr(word: u32, addr: u32, reg: u32) -> u32 {
    let s = right_shift_of(addr);
    (word >> s) | (reg & !(u32::MAX >> s))
}

/// Merges a `swl` access, returning the new aligned memory word.
///
/// # Arguments
///
/// * `word` - Aligned memory word containing `addr`.
/// * `addr` - Effective address.
/// * `data` - Register value being stored.
pub const fn merge_swl(word: u32, addr: u32, data: u32) -> u32 {
    let s = left_shift_of(addr);
    (data >> s) | (word & !(u32::MAX >> s))
}

/// Merges a `swr` access, returning the new aligned memory word.
///
/// # Arguments
///
/// * `word` - Aligned memory word containing `addr`.
/// * `addr` - Effective address.
/// * `data` - Register value being stored.
pub const fn merge_swr(word: u32, addr: u32, data: u32) -> u32 {
    let s = right_shift_of(addr);
    (data << s) | (word & low_mask(s))
}
