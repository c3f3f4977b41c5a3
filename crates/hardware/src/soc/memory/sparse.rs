//! Paged sparse memory.
//!
//! Pages are allocated on first write; reads of untouched memory return zero. This lets a
//! program use its text, data and stack regions anywhere in the 32-bit address space without
//! reserving 4 GiB of host memory.

use std::collections::HashMap;

use crate::common::constants::{DWORD_ALIGN_MASK, DWORD_SIZE, PAGE_OFFSET_MASK, PAGE_SHIFT, PAGE_SIZE};
use crate::soc::traits::Memory;

/// A zero-filled page of simulated memory.
type Page = Box<[u8; PAGE_SIZE as usize]>;

/// Sparse, paged implementation of [`Memory`].
#[derive(Debug, Default)]
pub struct SparseMemory {
    pages: HashMap<u64, Page>,
}

impl SparseMemory {
    /// Creates an empty memory; every byte reads as zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of pages that have been written.
    pub fn resident_pages(&self) -> usize {
        self.pages.len()
    }

    fn split(addr: u64) -> (u64, usize) {
        let base = addr & DWORD_ALIGN_MASK;
        (base >> PAGE_SHIFT, (base & PAGE_OFFSET_MASK) as usize)
    }
}

impl Memory for SparseMemory {
    fn read_dword(&self, addr: u64) -> u64 {
        let (page, offset) = Self::split(addr);
        self.pages.get(&page).map_or(0, |p| {
            let mut bytes = [0u8; DWORD_SIZE as usize];
            bytes.copy_from_slice(&p[offset..offset + DWORD_SIZE as usize]);
            u64::from_be_bytes(bytes)
        })
    }

    fn write_dword(&mut self, addr: u64, val: u64) {
        let (page, offset) = Self::split(addr);
        let p = self
            .pages
            .entry(page)
            .or_insert_with(|| Box::new([0; PAGE_SIZE as usize]));
        p[offset..offset + DWORD_SIZE as usize].copy_from_slice(&val.to_be_bytes());
    }
}
