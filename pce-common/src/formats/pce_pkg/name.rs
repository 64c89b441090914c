use std::fmt;
use std::path::Path;

use pce_shared::PCE_PKG_FORMAT;

use super::EncodeError;

/// ROM name stored in the config slots and in each ROM section.
///
/// At most 64 bytes. Names taken from file paths are plain ASCII.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RomName(Vec<u8>);

impl RomName {
    pub fn new(bytes: impl AsRef<[u8]>) -> Result<Self, EncodeError> {
        let bytes = bytes.as_ref();
        if bytes.len() > PCE_PKG_FORMAT.name_slot_size {
            return Err(EncodeError::NameTooLong { len: bytes.len() });
        }
        Ok(Self(bytes.to_vec()))
    }

    /// Derive the name from the base name of `path`.
    ///
    /// Both `/` and `\` count as separators so Windows-style paths behave the
    /// same on every host. Characters outside ASCII become `?`.
    pub fn from_path(path: &Path) -> Result<Self, EncodeError> {
        let path = path.to_string_lossy();
        let base = path.rsplit(['/', '\\']).next().unwrap_or_default();
        Self::from_ascii_lossy(base)
    }

    /// One byte per character; non-ASCII characters are replaced with `?`.
    pub fn from_ascii_lossy(name: &str) -> Result<Self, EncodeError> {
        let bytes: Vec<u8> = name
            .chars()
            .map(|c| if c.is_ascii() { c as u8 } else { b'?' })
            .collect();
        Self::new(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

impl AsRef<[u8]> for RomName {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
