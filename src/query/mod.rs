//! Panel-vs-query matching (layer L3): match haplotypes that are not part
//! of the panel against it, in four variants trading memory for time
//! exactly as the C source's four `matchSequences*` functions do.
//!
//! - [`naive::match_naive`] — O(NMQ) time, O(NM) memory, no PBWT index;
//!   one representative (lowest-index) match per query segment.
//! - [`indexed::match_indexed`] via a precomputed [`index::PanelIndex`] —
//!   O(NQ) time after an O(NM) index build, O(NM) memory.
//! - [`sweep::match_sweep`] — O(N(M+Q)) time, O(N+M) memory, no
//!   precomputed index; every query haplotype's current best match is
//!   tracked and updated cursor-step by cursor-step.
//! - [`sparse::match_sweep_sparse`] — the sweep matcher run over `nSparse`
//!   interleaved sub-panels in addition to the dense one.

pub mod index;
pub mod indexed;
pub mod naive;
pub mod sparse;
pub mod sweep;

pub use index::PanelIndex;
pub use indexed::match_indexed;
pub use naive::match_naive;
pub use sparse::match_sweep_sparse;
pub use sweep::match_sweep;
