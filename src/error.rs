//! Fatal error kinds for the PBWT matching engine.
//!
//! Every error this crate can raise is, by design, fatal: there is no partial
//! recovery path for a mis-sized panel or a broken invariant (see §7 of the
//! design spec — this is a batch tool, not a service). `PbwtError` is a small,
//! hand-written enum with manual `Display`/`Error` impls, in the style of the
//! teacher's own `Lz4Error` / `DecompressError` / `Lz4FError` types, rather
//! than a `thiserror`-derived one.

use std::fmt;

/// A fatal error raised anywhere in the matching engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PbwtError {
    /// Bad input configuration: negative length threshold, missing panel,
    /// query site count that does not match the reference, malformed panel
    /// text.
    Configuration(String),
    /// A structural invariant of the cursor or precomputed indexes was
    /// violated: advancing past site `N`, an out-of-bounds index into `a`,
    /// `d`, or `u`.
    Structural(String),
    /// `check` mode found a reported match that was not actually a match, or
    /// was extensible on one side.
    InvariantViolation(String),
    /// I/O failure opening or writing an output file.
    Io(String),
}

impl fmt::Display for PbwtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PbwtError::Configuration(msg) => write!(f, "configuration error: {msg}"),
            PbwtError::Structural(msg) => write!(f, "structural error: {msg}"),
            PbwtError::InvariantViolation(msg) => write!(f, "invariant violation: {msg}"),
            PbwtError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for PbwtError {}

impl From<std::io::Error> for PbwtError {
    fn from(e: std::io::Error) -> Self {
        PbwtError::Io(e.to_string())
    }
}
