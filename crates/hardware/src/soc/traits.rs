//! Memory trait for the simulated backing store.
//!
//! This module defines the `Memory` trait the pipeline and the syscall layer access memory through.
//! It provides:
//! 1. **Container Access:** Aligned 64-bit doubleword read/write, the only required methods.
//! 2. **Sub-word Access:** Big-endian byte, halfword and word read/write, implemented as
//!    read-modify-write of the containing doubleword.
//! 3. **Boot:** Loading an image into memory before simulation starts.
//!
//! The simulated machine is big-endian: the byte at the lowest address of a word is its most
//! significant byte.

use crate::common::constants::DWORD_ALIGN_MASK;
use crate::common::error::SimError;
use crate::soc::memory::lanes;

/// Size of the simulated address space in bytes.
const ADDRESS_SPACE: u64 = 1 << 32;

/// Trait for the byte-addressable memory attached to the pipeline.
pub trait Memory {
    /// Reads the doubleword containing `addr`, interpreting its bytes as big-endian.
    fn read_dword(&self, addr: u64) -> u64;

    /// Writes the doubleword containing `addr`, storing its bytes big-endian.
    fn write_dword(&mut self, addr: u64, val: u64);

    /// Reads one byte.
    fn read_byte(&self, addr: u64) -> u8 {
        lanes::get_byte(addr, self.read_dword(addr & DWORD_ALIGN_MASK))
    }

    /// Reads the halfword containing `addr`; bit 0 of the address is ignored.
    fn read_half(&self, addr: u64) -> u16 {
        lanes::get_half(addr, self.read_dword(addr & DWORD_ALIGN_MASK))
    }

    /// Reads the word containing `addr`; bits 0-1 of the address are ignored.
    fn read_word(&self, addr: u64) -> u32 {
        lanes::get_word(addr, self.read_dword(addr & DWORD_ALIGN_MASK))
    }

    /// Writes one byte.
    fn write_byte(&mut self, addr: u64, val: u8) {
        let base = addr & DWORD_ALIGN_MASK;
        let dword = self.read_dword(base);
        self.write_dword(base, lanes::set_byte(addr, dword, val));
    }

    /// Writes the halfword containing `addr`; bit 0 of the address is ignored.
    fn write_half(&mut self, addr: u64, val: u16) {
        let base = addr & DWORD_ALIGN_MASK;
        let dword = self.read_dword(base);
        self.write_dword(base, lanes::set_half(addr, dword, val));
    }

    /// Writes the word containing `addr`; bits 0-1 of the address are ignored.
    fn write_word(&mut self, addr: u64, val: u32) {
        let base = addr & DWORD_ALIGN_MASK;
        let dword = self.read_dword(base);
        self.write_dword(base, lanes::set_word(addr, dword, val));
    }

    /// Copies `image` into memory starting at `base`.
    ///
    /// # Errors
    ///
    /// Returns `SimError::ImageOutOfRange` if the image does not fit below 4 GiB.
    fn load_image(&mut self, base: u64, image: &[u8]) -> Result<(), SimError> {
        let end = base.checked_add(image.len() as u64);
        if end.is_none_or(|end| end > ADDRESS_SPACE) {
            return Err(SimError::ImageOutOfRange {
                base,
                len: image.len(),
            });
        }
        for (addr, byte) in (base..).zip(image) {
            self.write_byte(addr, *byte);
        }
        Ok(())
    }
}
