//! Length fields and the two section kinds of a package.

use pce_shared::PCE_PKG_FORMAT;

use super::{EncodeError, RomName};

/// Append `len` as a 4-byte little-endian length field.
pub fn write_length(out: &mut Vec<u8>, len: usize) -> Result<(), EncodeError> {
    let len = u32::try_from(len).map_err(|_| EncodeError::LengthOverflow { value: len as u64 })?;
    out.extend_from_slice(&len.to_le_bytes());
    Ok(())
}

/// The `pceconfig.bin` section.
///
/// Its payload is always 160 bytes: 32 zero bytes followed by two copies of
/// the ROM name, each left-aligned in a zero-filled 64-byte slot.
#[derive(Debug, Clone, Copy)]
pub struct ConfigSection<'a> {
    name: &'a RomName,
}

impl<'a> ConfigSection<'a> {
    pub fn new(name: &'a RomName) -> Self {
        Self { name }
    }

    pub fn write_to(&self, out: &mut Vec<u8>) -> Result<(), EncodeError> {
        write_length(out, PCE_PKG_FORMAT.config_payload_size)?;
        out.extend_from_slice(PCE_PKG_FORMAT.config_filename);
        out.push(0);

        out.resize(out.len() + PCE_PKG_FORMAT.config_padding, 0);
        for _ in 0..2 {
            self.write_name_slot(out);
        }
        Ok(())
    }

    fn write_name_slot(&self, out: &mut Vec<u8>) {
        let name = self.name.as_bytes();
        out.extend_from_slice(name);
        out.resize(out.len() + PCE_PKG_FORMAT.name_slot_size - name.len(), 0);
    }
}

/// One ROM section: size, NUL-terminated name, then the payload verbatim.
#[derive(Debug, Clone, Copy)]
pub struct RomSection<'a> {
    name: &'a RomName,
    rom: &'a [u8],
}

impl<'a> RomSection<'a> {
    pub fn new(name: &'a RomName, rom: &'a [u8]) -> Self {
        Self { name, rom }
    }

    pub fn write_to(&self, out: &mut Vec<u8>) -> Result<(), EncodeError> {
        write_length(out, self.rom.len())?;
        out.extend_from_slice(self.name.as_bytes());
        out.push(0);
        out.extend_from_slice(self.rom);
        Ok(())
    }
}
