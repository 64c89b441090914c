//! Shared types and utilities for building `pce.pkg` containers
//!
//! This crate provides the container encoder shared between:
//! - `pce-cli` (the `pcepkg` packaging tool)
//! - anything else that needs to produce or inspect packages in memory
//!
//! # Modules
//!
//! - [`formats`] - the `pce.pkg` binary layout, its encoder and inverse reader

pub mod formats;

// Re-export commonly used format items
pub use formats::{
    // Encoding
    encode,
    write_length,
    ConfigSection,
    DecodeError,
    DecodedPackage,
    EncodeError,
    PcePackage,
    RomName,
    RomSection,
    // Constants
    PkgFormat,
    PCE_PKG_FORMAT,
};
