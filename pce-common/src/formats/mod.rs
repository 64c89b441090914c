//! Binary container formats
//!
//! Layout constants (field widths, slot sizes, file names) are defined in
//! `pce_shared::PkgFormat`. Use `PCE_PKG_FORMAT` for all `pce.pkg` constants.

pub mod pce_pkg;

pub use pce_pkg::*;

// Re-export package format from shared for convenience
pub use pce_shared::{PkgFormat, PCE_PKG_FORMAT};
