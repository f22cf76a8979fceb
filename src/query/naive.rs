//! The naive panel-vs-query matcher (`matchSequencesNaive` in the C
//! source): no PBWT index at all, a direct O(N·M·Q) scan that, for every
//! query haplotype, tracks the best (longest, lowest-index) matching
//! reference row ending at each site by running each reference comparison
//! backwards from the panel's last site.
//!
//! Gives one representative match per contiguous best-match segment per
//! query, not the full set of tied-longest matches — the same
//! representative-only trade-off the C source documents for this version.

use crate::error::PbwtError;
use crate::panel::types::Panel;
use crate::report::{MatchRecord, Reporter};

/// Matches every haplotype in `query` against `reference`, reporting one
/// representative maximal match per contiguous best segment.
pub fn match_naive(
    reference: &Panel,
    query: &Panel,
    reporter: &mut dyn Reporter,
) -> Result<(), PbwtError> {
    let n = reference.n();
    if query.n() != n {
        return Err(PbwtError::Configuration(format!(
            "query length {} does not match reference length {n}",
            query.n()
        )));
    }
    let m = reference.m();

    for j in 0..query.m() {
        let mut best_end = vec![0usize; n + 1];
        let mut best_seq = vec![0usize; n + 1];
        best_end[n] = n + 1;

        for i in 0..m {
            let mut k_last_mismatch = n;
            for k in (0..n).rev() {
                if query.symbol(j, k) != reference.symbol(i, k) {
                    if k_last_mismatch > best_end[k + 1] {
                        let mut kk = k + 1;
                        while kk <= n && best_end[kk] <= k_last_mismatch {
                            best_end[kk] = k_last_mismatch;
                            best_seq[kk] = i;
                            kk += 1;
                        }
                    }
                    k_last_mismatch = k;
                }
            }
            if k_last_mismatch > best_end[0] {
                let mut kk = 0;
                while kk <= n && best_end[kk] <= k_last_mismatch {
                    best_end[kk] = k_last_mismatch;
                    best_seq[kk] = i;
                    kk += 1;
                }
            }
        }

        let mut i_best = m;
        for k in 0..n {
            if best_seq[k] != i_best {
                i_best = best_seq[k];
                reporter.report(MatchRecord {
                    a: j,
                    b: i_best,
                    start: k,
                    end: best_end[k],
                })?;
            }
        }
    }
    Ok(())
}
