//! The haplotype panel and the forward PBWT cursor.
//!
//! `types` owns the bit-packed panel and its text/in-memory ingestion;
//! `cursor` owns the per-site `a`/`d`/`y`/`u` state and the `map` operation
//! that every higher layer (`within`, `query`) is built on.

pub mod cursor;
pub mod types;
