//! pcepkg - package a PC Engine ROM into a `pce.pkg` container
//!
//! # Usage
//!
//! ```bash
//! # Writes ./pce.pkg
//! pcepkg "Bonk's Adventure.pce"
//!
//! # Write elsewhere and check the result before writing
//! pcepkg game.pce --output out/pce.pkg --verify
//! ```
//!
//! The ROM name stored in the package is the file's base name, which must be
//! at most 64 characters. Set `RUST_LOG=debug` for detailed logging.

mod pack;

use anyhow::Result;
use clap::Parser;

/// pcepkg - package a ROM into a pce.pkg container
#[derive(Parser)]
#[command(name = "pcepkg")]
#[command(about = "Package a PC Engine ROM into a pce.pkg container")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    pack: pack::PackArgs,
}

fn main() -> Result<()> {
    // Initialize logging (stderr, so stdout only carries the summary)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    pack::execute(cli.pack)
}
