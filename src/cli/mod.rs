//! The command-line front end for the `pbwt-match` binary.

pub mod args;
pub mod constants;

pub use args::{Cli, Mode};
