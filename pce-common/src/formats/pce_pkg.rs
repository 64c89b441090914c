//! `pce.pkg` ROM container
//!
//! Packages a single ROM image for handheld firmware that expects a fixed,
//! nested, length-prefixed container. The ROM is treated as opaque bytes.
//!
//! # Layout
//!
//! All length fields are little-endian u32.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        pce.pkg                               │
//! ├──────────────────────────────────────────────────────────────┤
//! │ 0x00  total_length      bytes following this field           │
//! ├──────────────────────────────────────────────────────────────┤
//! │ 0x04  config_size       always 160                           │
//! │ 0x08  "pceconfig.bin\0" 14 bytes                             │
//! │ 0x16  zero padding      32 bytes                             │
//! │ 0x36  name slot         name, zero-filled to 64 bytes        │
//! │ 0x76  name slot         identical second copy                │
//! ├──────────────────────────────────────────────────────────────┤
//! │ 0xB6  rom_size          ROM section, copy 1                  │
//! │ 0xBA  name + "\0"                                            │
//! │  ...  rom payload       rom_size bytes                       │
//! ├──────────────────────────────────────────────────────────────┤
//! │  ...  rom_size          ROM section, copy 2 (byte-identical) │
//! │  ...  name + "\0"                                            │
//! │  ...  rom payload                                            │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The leading padding, the doubled name slot and the doubled ROM section are
//! all read by the target firmware and must be reproduced exactly.

mod name;
mod reader;
mod section;

#[cfg(test)]
mod tests;

pub use name::RomName;
pub use reader::{DecodeError, DecodedPackage};
pub use section::{write_length, ConfigSection, RomSection};

use pce_shared::PCE_PKG_FORMAT;

/// Error type for package encoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("ROM name is {len} bytes (max {max})", max = PCE_PKG_FORMAT.name_slot_size)]
    NameTooLong { len: usize },

    /// `value` is the length field content that would have been written.
    #[error("Length {value} does not fit in a 32-bit length field")]
    LengthOverflow { value: u64 },
}

/// A package ready to be encoded: one named ROM.
#[derive(Debug, Clone, Copy)]
pub struct PcePackage<'a> {
    name: &'a RomName,
    rom: &'a [u8],
}

impl<'a> PcePackage<'a> {
    pub fn new(name: &'a RomName, rom: &'a [u8]) -> Self {
        Self { name, rom }
    }

    pub fn name(&self) -> &RomName {
        self.name
    }

    pub fn rom(&self) -> &[u8] {
        self.rom
    }

    /// Value of the leading total-length field.
    ///
    /// Fails when the package would not fit the 32-bit field.
    pub fn body_len(&self) -> Result<u32, EncodeError> {
        let body = (self.rom.len() as u64)
            .saturating_add(PCE_PKG_FORMAT.rom_section_size(self.name.len(), 0) as u64)
            .saturating_mul(PCE_PKG_FORMAT.rom_copies as u64)
            .saturating_add(PCE_PKG_FORMAT.config_section_size() as u64);
        u32::try_from(body).map_err(|_| EncodeError::LengthOverflow { value: body })
    }

    /// Size of the encoded package in bytes.
    pub fn encoded_len(&self) -> Result<usize, EncodeError> {
        Ok(PCE_PKG_FORMAT.length_field_size + self.body_len()? as usize)
    }

    /// Encode the package into a single buffer.
    ///
    /// Sizes are checked before any byte is written.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EncodeError> {
        let body_len = self.body_len()?;
        let mut bytes = Vec::with_capacity(self.encoded_len()?);

        write_length(&mut bytes, body_len as usize)?;
        ConfigSection::new(self.name).write_to(&mut bytes)?;

        let start = bytes.len();
        RomSection::new(self.name, self.rom).write_to(&mut bytes)?;
        let end = bytes.len();
        for _ in 1..PCE_PKG_FORMAT.rom_copies {
            bytes.extend_from_within(start..end);
        }

        debug_assert_eq!(bytes.len(), PCE_PKG_FORMAT.length_field_size + body_len as usize);
        tracing::debug!(
            name = %self.name,
            rom_len = self.rom.len(),
            package_len = bytes.len(),
            "Encoded package"
        );

        Ok(bytes)
    }

    /// Decode a package produced by [`PcePackage::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<DecodedPackage, DecodeError> {
        reader::decode(bytes)
    }
}

/// Encode `rom` under `name` into a complete package.
///
/// Fails with [`EncodeError::NameTooLong`] for names over 64 bytes, before any output is produced.
pub fn encode(name: &[u8], rom: &[u8]) -> Result<Vec<u8>, EncodeError> {
    let name = RomName::new(name)?;
    PcePackage::new(&name, rom).to_bytes()
}
