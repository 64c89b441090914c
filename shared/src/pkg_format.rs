//! Package format constants for `pce.pkg` containers.
//!
//! This module defines the `PkgFormat` struct which serves as the single source of truth
//! for every fixed number in the container layout (field widths, the config file name,
//! slot sizes, the output file name).
//!
//! # Example
//!
//! ```
//! use pce_shared::PCE_PKG_FORMAT;
//!
//! assert_eq!(PCE_PKG_FORMAT.output_filename, "pce.pkg");
//! assert_eq!(PCE_PKG_FORMAT.config_payload_size, 160);
//!
//! // 4 (total) + 178 (config) + 2 × (4 + 8 + 1 + 4)
//! assert_eq!(PCE_PKG_FORMAT.package_size(8, 4), 216);
//! ```

/// Layout constants for a package container.
#[derive(Debug, Clone, Copy)]
pub struct PkgFormat {
    /// Width of every length field (little-endian u32)
    pub length_field_size: usize,

    /// File name of the config section, stored without its NUL terminator
    pub config_filename: &'static [u8],

    /// Fixed payload length of the config section
    pub config_payload_size: usize,

    /// Zero bytes at the start of the config payload
    pub config_padding: usize,

    /// Width of each name slot in the config payload; also the name length limit
    pub name_slot_size: usize,

    /// Number of identical ROM sections following the config section
    pub rom_copies: usize,

    /// Default output path, relative to the working directory
    pub output_filename: &'static str,
}

impl PkgFormat {
    /// Size of the config section including its length field, name and terminator.
    pub const fn config_section_size(&self) -> usize {
        self.length_field_size + self.config_filename.len() + 1 + self.config_payload_size
    }

    /// Size of one ROM section for a name of `name_len` bytes and a ROM of `rom_len` bytes.
    pub const fn rom_section_size(&self, name_len: usize, rom_len: usize) -> usize {
        self.length_field_size + name_len + 1 + rom_len
    }

    /// Value stored in the leading total-length field.
    pub const fn body_size(&self, name_len: usize, rom_len: usize) -> usize {
        self.config_section_size() + self.rom_copies * self.rom_section_size(name_len, rom_len)
    }

    /// Largest ROM whose package still fits the 32-bit total-length field.
    pub const fn max_rom_size(&self, name_len: usize) -> u64 {
        (u32::MAX as u64 - self.config_section_size() as u64) / self.rom_copies as u64
            - self.rom_section_size(name_len, 0) as u64
    }

    /// Size of the complete package, total-length field included.
    pub const fn package_size(&self, name_len: usize, rom_len: usize) -> usize {
        self.length_field_size + self.body_size(name_len, rom_len)
    }
}

/// The `pce.pkg` container format.
///
/// Config payload: 32 zero bytes, then the name in two 64-byte slots.
pub const PCE_PKG_FORMAT: PkgFormat = PkgFormat {
    length_field_size: 4,
    config_filename: b"pceconfig.bin",
    config_payload_size: 160,
    config_padding: 32,
    name_slot_size: 64,
    rom_copies: 2,
    output_filename: "pce.pkg",
};
