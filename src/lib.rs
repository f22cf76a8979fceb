//! PBWT haplotype matching engine — Rust port of `pbwtMatch.c` (Durbin, 2013–).
//!
//! The crate is organized leaves-first, mirroring the three layers of the
//! algorithm:
//!
//! - [`panel`] — the haplotype panel and the forward PBWT cursor (L1).
//! - [`within`] — within-panel long/maximal match enumeration (L2).
//! - [`query`] — panel-vs-query matching: naive, indexed, sweep, sparse-sweep (L3).
//!
//! Supporting modules: [`error`] (fatal error kinds), [`config`] (matcher
//! configuration), [`report`] (the reporting callback and its check/stats
//! decorators), and [`cli`] (the command-line front end used by the
//! `pbwt-match` binary).

pub mod cli;
pub mod config;
pub mod error;
pub mod panel;
pub mod query;
pub mod report;
pub mod within;

pub use error::PbwtError;
pub use panel::cursor::PbwtCursor;
pub use panel::types::Panel;
pub use report::MatchRecord;

/// Crate version, re-exported for `--version` output.
pub const VERSION_STRING: &str = env!("CARGO_PKG_VERSION");
