//! Matcher configuration constants and the runtime `MatchConfig` value.
//!
//! Corresponds to the recognized options of §6 of the design spec: `L`,
//! `nSparse`, `check`, `stats`. Compile-time defaults live here as plain
//! constants, mirroring the teacher's `config.rs` (`CLEVEL_DEFAULT`,
//! `NB_WORKERS_DEFAULT`, …); the mutable, per-run values are carried in
//! [`MatchConfig`] rather than module-level globals (the C source threads
//! them through file-scope statics such as `LengthThreshold` and `Ncheck` —
//! see §9 of the design spec on replacing that with an explicit context).

/// Default within-panel length threshold: 0 means "maximal matches only".
pub const LENGTH_THRESHOLD_DEFAULT: u32 = 0;

/// Default sparse-sweep stride: 1 disables sparse sub-panels.
pub const N_SPARSE_DEFAULT: usize = 1;

/// Runtime configuration shared by every matcher entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    /// Within-panel length threshold. `0` selects the maximal-match algorithm
    /// (Algorithm 4) instead of the threshold algorithm (Algorithm 3′).
    pub length_threshold: u32,
    /// Sparse-sweep stride. `1` disables sparse sub-panels.
    pub n_sparse: usize,
    /// When `true`, every reported match is verified against the haplotype
    /// matrix (real match, maximal at both ends) before being forwarded;
    /// violations abort the run with [`crate::PbwtError::InvariantViolation`].
    pub check: bool,
    /// When `true`, matches are accumulated into a length histogram instead
    /// of (or in addition to) being reported individually.
    pub stats: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            length_threshold: LENGTH_THRESHOLD_DEFAULT,
            n_sparse: N_SPARSE_DEFAULT,
            check: false,
            stats: false,
        }
    }
}

impl MatchConfig {
    /// Validates the configuration, returning a [`crate::PbwtError::Configuration`]
    /// for `n_sparse == 0` (the C source treats `nSparse < 1` as meaningless —
    /// a stride of zero sub-panel never advances).
    pub fn validate(&self) -> Result<(), crate::PbwtError> {
        if self.n_sparse == 0 {
            return Err(crate::PbwtError::Configuration(
                "nSparse must be >= 1".to_owned(),
            ));
        }
        Ok(())
    }
}
