use anyhow::{Context, Result};
use clap::Args;
use pce_common::PcePackage;
use pce_shared::{read_file_with_limit, PCE_PKG_FORMAT};
use std::path::PathBuf;
use xxhash_rust::xxh3::xxh3_64;

use super::{output, validation};

/// Arguments for the pack command
#[derive(Args)]
pub struct PackArgs {
    /// Path to the ROM file to package
    pub rom: PathBuf,

    /// Output package path
    #[arg(short, long, default_value = PCE_PKG_FORMAT.output_filename)]
    pub output: PathBuf,

    /// Decode the package and compare it with the ROM before writing
    #[arg(long)]
    pub verify: bool,
}

/// Execute the pack command
pub fn execute(args: PackArgs) -> Result<()> {
    validation::check_rom_exists(&args.rom)?;
    let name = validation::rom_name(&args.rom)?;

    println!("Packing ROM: {}", name);

    let rom = read_file_with_limit(&args.rom, PCE_PKG_FORMAT.max_rom_size(name.len()))
        .with_context(|| format!("Failed to read ROM file: {}", args.rom.display()))?;
    println!("  ROM: {} ({} bytes)", args.rom.display(), rom.len());

    let rom_hash = xxh3_64(&rom);
    println!("  ROM hash: {:016x}", rom_hash);

    let package = PcePackage::new(&name, &rom);
    let bytes = output::encode_package(&package)?;

    if args.verify {
        validation::verify_package(&bytes, &package)?;
        println!("  Verified: name and both ROM copies match");
    }

    output::write_package(&args.output, &bytes)?;
    output::print_summary(&args.output, bytes.len(), &package);

    Ok(())
}
