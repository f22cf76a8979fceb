//! Within-panel long and maximal match enumeration (layer L2).
//!
//! Both algorithms sweep a single [`crate::PbwtCursor`] forwards across the
//! panel and report matches between haplotypes already in the panel, as
//! opposed to [`crate::query`], which matches external query haplotypes
//! against the panel.

pub mod maximal;
pub mod threshold;

pub use maximal::match_maximal_within;
pub use threshold::match_long_within;
