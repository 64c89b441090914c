//! Pack command - read a ROM, encode it and write the package

mod command;
mod output;
mod validation;

pub use command::{execute, PackArgs};
