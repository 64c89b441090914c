//! Shared constants and helpers for pce.pkg tooling.
//!
//! - [`pkg_format`] - layout constants for the `pce.pkg` container
//! - [`fs`] - size-capped reads and atomic writes

pub mod fs;
pub mod pkg_format;

pub use fs::{read_file_with_limit, write_file_atomic, MAX_ROM_BYTES};
pub use pkg_format::{PkgFormat, PCE_PKG_FORMAT};
