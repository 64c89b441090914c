//! Inverse of the package encoder.
//!
//! Walks the length-prefixed layout and recovers the ROM name and payload,
//! checking every fixed field and the duplicated regions along the way.
//! Names containing NUL bytes cannot be recovered.

use pce_shared::PCE_PKG_FORMAT;

use super::RomName;

/// Name and payload recovered from a package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPackage {
    pub name: RomName,
    pub rom: Vec<u8>,
}

/// Error type for package decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("Package truncated: needed {needed} bytes at offset {offset}, {available} available")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("Total length field says {declared} bytes but {actual} follow it")]
    TotalLengthMismatch { declared: usize, actual: usize },

    #[error("Config section size is {0} (expected {expected})", expected = PCE_PKG_FORMAT.config_payload_size)]
    BadConfigSize(usize),

    #[error("First section is not pceconfig.bin")]
    BadConfigFilename,

    #[error("Config padding contains non-zero bytes")]
    NonZeroPadding,

    #[error("Config name slots differ")]
    NameSlotMismatch,

    #[error("Missing NUL terminator after section name at offset {0}")]
    MissingTerminator(usize),

    #[error("ROM section {index} name does not match the config section")]
    SectionNameMismatch { index: usize },

    #[error("ROM section {index} differs from the first copy")]
    RomCopiesDiffer { index: usize },

    #[error("{0} trailing bytes after the last ROM section")]
    TrailingBytes(usize),
}

struct PkgReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> PkgReader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        if len > self.remaining() {
            return Err(DecodeError::Truncated {
                offset: self.pos,
                needed: len,
                available: self.remaining(),
            });
        }
        let slice = &self.bytes[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    fn read_length(&mut self) -> Result<usize, DecodeError> {
        let field = self.take(PCE_PKG_FORMAT.length_field_size)?;
        Ok(u32::from_le_bytes([field[0], field[1], field[2], field[3]]) as usize)
    }

    /// Read a NUL-terminated name, consuming the terminator.
    fn read_name(&mut self) -> Result<&'a [u8], DecodeError> {
        let rest = &self.bytes[self.pos..];
        let len = rest
            .iter()
            .position(|&b| b == 0)
            .ok_or(DecodeError::MissingTerminator(self.pos))?;
        let name = self.take(len)?;
        self.pos += 1;
        Ok(name)
    }
}

/// True when `slot` holds exactly `name` followed by zero fill.
fn slot_holds(slot: &[u8], name: &[u8]) -> bool {
    name.len() <= slot.len()
        && &slot[..name.len()] == name
        && slot[name.len()..].iter().all(|&b| b == 0)
}

pub(super) fn decode(bytes: &[u8]) -> Result<DecodedPackage, DecodeError> {
    let mut reader = PkgReader::new(bytes);

    let declared = reader.read_length()?;
    if declared != reader.remaining() {
        return Err(DecodeError::TotalLengthMismatch {
            declared,
            actual: reader.remaining(),
        });
    }

    let config_size = reader.read_length()?;
    if config_size != PCE_PKG_FORMAT.config_payload_size {
        return Err(DecodeError::BadConfigSize(config_size));
    }
    if reader.read_name()? != PCE_PKG_FORMAT.config_filename {
        return Err(DecodeError::BadConfigFilename);
    }

    let padding = reader.take(PCE_PKG_FORMAT.config_padding)?;
    if padding.iter().any(|&b| b != 0) {
        return Err(DecodeError::NonZeroPadding);
    }
    let slot = reader.take(PCE_PKG_FORMAT.name_slot_size)?;
    if reader.take(PCE_PKG_FORMAT.name_slot_size)? != slot {
        return Err(DecodeError::NameSlotMismatch);
    }

    let mut first: Option<(&[u8], &[u8], &[u8])> = None;
    for index in 0..PCE_PKG_FORMAT.rom_copies {
        let start = reader.pos;
        let rom_len = reader.read_length()?;
        let name = reader.read_name()?;
        if !slot_holds(slot, name) {
            return Err(DecodeError::SectionNameMismatch { index });
        }
        let rom = reader.take(rom_len)?;
        let section = &bytes[start..reader.pos];

        match first {
            None => first = Some((section, name, rom)),
            Some((first_section, ..)) if first_section != section => {
                return Err(DecodeError::RomCopiesDiffer { index });
            }
            Some(_) => {}
        }
    }

    if reader.remaining() != 0 {
        return Err(DecodeError::TrailingBytes(reader.remaining()));
    }

    let Some((_, name, rom)) = first else {
        return Err(DecodeError::Truncated {
            offset: reader.pos,
            needed: PCE_PKG_FORMAT.length_field_size,
            available: 0,
        });
    };
    let name = RomName::new(name).map_err(|_| DecodeError::SectionNameMismatch { index: 0 })?;

    Ok(DecodedPackage {
        name,
        rom: rom.to_vec(),
    })
}
