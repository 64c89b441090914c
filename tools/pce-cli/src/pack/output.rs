use anyhow::{Context, Result};
use std::path::Path;

use pce_common::PcePackage;
use pce_shared::write_file_atomic;

pub fn encode_package(package: &PcePackage<'_>) -> Result<Vec<u8>> {
    package.to_bytes().context("Failed to encode package")
}

pub fn write_package(output_path: &Path, bytes: &[u8]) -> Result<()> {
    write_file_atomic(output_path, bytes)
        .with_context(|| format!("Failed to write package: {}", output_path.display()))?;
    tracing::debug!("Package written to {}", output_path.display());
    Ok(())
}

pub fn print_summary(output_path: &Path, package_size: usize, package: &PcePackage<'_>) {
    println!();
    println!("Created: {} ({} bytes)", output_path.display(), package_size);
    println!("  ROM name: {}", package.name());
    println!("  ROM size: {} bytes (stored twice)", package.rom().len());
}
