//! Filesystem helpers shared across pce.pkg tools.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

use crate::PCE_PKG_FORMAT;

/// Maximum allowed ROM size for reading into memory (largest ROM a package can hold, empty name).
///
/// Use [`crate::PkgFormat::max_rom_size`] for the exact limit of a given name.
pub const MAX_ROM_BYTES: u64 = PCE_PKG_FORMAT.max_rom_size(0);

/// Read a file into memory with a size cap.
pub fn read_file_with_limit(path: &Path, max_bytes: u64) -> Result<Vec<u8>> {
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;
    let len = metadata.len();
    if len > max_bytes {
        anyhow::bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            len,
            max_bytes
        );
    }
    std::fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Write `bytes` to `path`, replacing any existing file only once the data is on disk.
///
/// The data goes to a temporary file in the destination directory which is then
/// renamed over `path`, so a failed write leaves the previous file (or nothing) behind.
pub fn write_file_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    file.write_all(bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    file.as_file()
        .sync_all()
        .with_context(|| format!("Failed to flush {}", path.display()))?;
    file.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    tracing::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
