use anyhow::Result;
use std::path::Path;

use pce_common::{EncodeError, PcePackage, RomName};
use pce_shared::PCE_PKG_FORMAT;

pub fn check_rom_exists(path: &Path) -> Result<()> {
    if !path.is_file() {
        anyhow::bail!("Can't find the specified file: {}", path.display());
    }
    Ok(())
}

pub fn rom_name(path: &Path) -> Result<RomName> {
    match RomName::from_path(path) {
        Ok(name) => Ok(name),
        Err(EncodeError::NameTooLong { len }) => anyhow::bail!(
            "Shorten full ROM name to {} characters (currently {})",
            PCE_PKG_FORMAT.name_slot_size,
            len
        ),
        Err(e) => Err(e.into()),
    }
}

pub fn verify_package(bytes: &[u8], package: &PcePackage<'_>) -> Result<()> {
    let decoded = PcePackage::from_bytes(bytes)
        .map_err(|e| anyhow::anyhow!("Package verification failed: {}", e))?;

    if &decoded.name != package.name() {
        anyhow::bail!(
            "Package verification failed: name {} does not match {}",
            decoded.name,
            package.name()
        );
    }
    if decoded.rom != package.rom() {
        anyhow::bail!("Package verification failed: ROM payload differs");
    }
    tracing::debug!("Verified {} byte package", bytes.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_check_rom_exists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("game.pce");
        assert!(check_rom_exists(&path).is_err());

        std::fs::write(&path, [0u8; 4]).unwrap();
        assert!(check_rom_exists(&path).is_ok());
    }

    #[test]
    fn test_directory_is_not_a_rom() {
        let dir = tempdir().unwrap();
        let err = check_rom_exists(dir.path()).unwrap_err();
        assert!(err.to_string().contains("Can't find the specified file"));
    }

    #[test]
    fn test_rom_name_too_long() {
        let file = format!("{}.pce", "a".repeat(62));
        let err = rom_name(Path::new(&file)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Shorten full ROM name to 64 characters (currently 66)"
        );
    }

    #[test]
    fn test_verify_package() {
        let name = RomName::new(b"game.pce").unwrap();
        let rom = [1u8, 2, 3, 4];
        let package = PcePackage::new(&name, &rom);
        let bytes = package.to_bytes().unwrap();
        assert!(verify_package(&bytes, &package).is_ok());

        let other = [1u8, 2, 3, 5];
        let mismatched = PcePackage::new(&name, &other);
        assert!(verify_package(&bytes, &mismatched).is_err());
    }
}
