//! The precomputed-index panel-vs-query matcher (Algorithm 5 in the paper,
//! `matchSequencesIndexed` in the C source): an FM-index backward search
//! over the per-site `a`/`d`/`u`/`c` snapshots in a [`PanelIndex`]. Each
//! query haplotype maintains a single current best-match interval `[f, g)`
//! with start `e`; when a site narrows the interval to empty, the current
//! interval is reported and a fresh one is derived from the divergence
//! array before the sweep continues.

use crate::error::PbwtError;
use crate::panel::types::Panel;
use crate::query::index::PanelIndex;
use crate::report::{MatchRecord, Reporter};

/// Matches every haplotype in `query` against `reference` using a
/// precomputed [`PanelIndex`] built from `reference`.
pub fn match_indexed(
    reference: &Panel,
    index: &PanelIndex,
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
        let mut e: usize = 0;
        let mut f: usize = 0;
        let mut g: usize = m;

        for k in 0..n {
            let xk = query.symbol(j, k);
            let uk = &index.u[k];
            let ck = index.c[k];
            let f1 = if xk != 0 { ck + (f - uk[f]) } else { uk[f] };
            let g1 = if xk != 0 { ck + (g - uk[g]) } else { uk[g] };

            if g1 > f1 {
                f = f1;
                g = g1;
                continue;
            }

            let dk1 = &index.d[k + 1];
            let ak1 = &index.a[k + 1];
            for i in f..g {
                reporter.report(MatchRecord {
                    a: j,
                    b: index.a[k][i],
                    start: e,
                    end: k,
                })?;
            }

            let mut e1: isize = dk1[f1] as isize - 1;
            let mut new_f = f1;
            let mut new_g = g1;

            let extend_left = (e1 >= 0 && query.symbol(j, e1 as usize) == 0 && new_f > 0) || new_f == m;
            if extend_left {
                new_f = new_g - 1;
                let y_row = ak1[new_f];
                while e1 > 0
                    && query.symbol(j, (e1 - 1) as usize) == reference.symbol(y_row, (e1 - 1) as usize)
                {
                    e1 -= 1;
                }
                while new_f > 0 && dk1[new_f] as isize <= e1 {
                    new_f -= 1;
                }
            } else if new_f < m {
                new_g = new_f + 1;
                let y_row = ak1[new_f];
                while e1 > 0
                    && query.symbol(j, (e1 - 1) as usize) == reference.symbol(y_row, (e1 - 1) as usize)
                {
                    e1 -= 1;
                }
                while new_g < m && (dk1[new_g] as isize) <= e1 {
                    new_g += 1;
                }
            }

            e = e1.max(0) as usize;
            f = new_f;
            g = new_g;
        }

        for i in f..g {
            reporter.report(MatchRecord {
                a: j,
                b: index.a[n][i],
                start: e,
                end: n,
            })?;
        }
    }
    Ok(())
}
