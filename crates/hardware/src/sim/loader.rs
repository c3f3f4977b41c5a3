//! Binary Loader.
//!
//! This module places a program image in simulated memory before the first cycle. It performs:
//! 1. **ELF loading:** Big-endian 32-bit MIPS executables have each segment copied to its
//!    virtual address; the entry point becomes the boot PC.
//! 2. **Raw loading:** Anything without an ELF header is copied verbatim to
//!    `memory.load_base` and booted at `general.boot_pc`.

use std::fs;
use std::path::Path;

use object::{Architecture, Endianness, Object, ObjectSegment};

use crate::common::error::SimError;
use crate::config::Config;
use crate::soc::Memory;

/// ELF identification bytes.
const ELF_MAGIC: &[u8; 4] = b"\x7fELF";

/// Where an image was placed and where it starts executing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BootInfo {
    /// Address of the first instruction.
    pub entry: u32,
    /// Number of image bytes copied into memory.
    pub loaded_bytes: usize,
}

/// Reads a file from disk.
///
/// # Errors
///
/// Returns `SimError::Io` if the file cannot be read.
pub fn read_image(path: &Path) -> Result<Vec<u8>, SimError> {
    fs::read(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads an image into memory, as ELF if it carries an ELF header and raw otherwise.
///
/// # Arguments
///
/// * `mem` - Destination memory.
/// * `image` - Image bytes.
/// * `config` - Supplies the raw load base and boot PC.
///
/// # Errors
///
/// Returns `SimError::Elf` for malformed ELF files, `SimError::UnsupportedImage` for ELF
/// files built for another machine, and `SimError::ImageOutOfRange` if a segment does not
/// fit in the 32-bit address space.
pub fn load_image(
    mem: &mut dyn Memory,
    image: &[u8],
    config: &Config,
) -> Result<BootInfo, SimError> {
    if image.starts_with(ELF_MAGIC) {
        load_elf(mem, image)
    } else {
        mem.load_image(u64::from(config.memory.load_base), image)?;
        tracing::info!(
            base = format_args!("{:#010x}", config.memory.load_base),
            len = image.len(),
            "loaded raw image"
        );
        Ok(BootInfo {
            entry: config.general.boot_pc,
            loaded_bytes: image.len(),
        })
    }
}

/// Loads the segments of a big-endian MIPS32 ELF executable.
///
/// # Errors
///
/// See [`load_image`].
pub fn load_elf(mem: &mut dyn Memory, image: &[u8]) -> Result<BootInfo, SimError> {
    let file = object::File::parse(image)?;

    if file.architecture() != Architecture::Mips || file.is_64() {
        return Err(SimError::UnsupportedImage(format!(
            "expected a 32-bit MIPS executable, found {:?}{}",
            file.architecture(),
            if file.is_64() { " (64-bit)" } else { "" }
        )));
    }
    if file.endianness() != Endianness::Big {
        return Err(SimError::UnsupportedImage(
            "little-endian MIPS executables are not supported".to_string(),
        ));
    }

    let mut loaded_bytes = 0;
    for segment in file.segments() {
        let data = segment.data()?;
        if data.is_empty() {
            continue;
        }
        mem.load_image(segment.address(), data)?;
        tracing::debug!(
            addr = format_args!("{:#010x}", segment.address()),
            len = data.len(),
            "loaded segment"
        );
        loaded_bytes += data.len();
    }

    let entry = u32::try_from(file.entry()).map_err(|_| {
        SimError::UnsupportedImage(format!("entry point {:#x} out of range", file.entry()))
    })?;
    tracing::info!(
        entry = format_args!("{entry:#010x}"),
        bytes = loaded_bytes,
        "loaded ELF image"
    );

    Ok(BootInfo {
        entry,
        loaded_bytes,
    })
}
