//! The sparse dynamic sweep (`matchSequencesSweepSparse` in the C source):
//! runs the dense sweep matcher from [`super::sweep`] alongside `nSparse`
//! additional sub-panel sweeps, each built from every `nSparse`-th site of
//! the same panel, interleaved by phase `k % nSparse`. Sub-panel matches
//! extend further per real comparison (since they skip sites) at the cost
//! of reporting match boundaries rounded to the sub-panel's stride.

use crate::error::PbwtError;
use crate::panel::cursor::PbwtCursor;
use crate::panel::types::Panel;
use crate::report::{MatchRecord, Reporter};

struct SubPanel {
    cursor: PbwtCursor,
    f: Vec<usize>,
    d: Vec<usize>,
}

impl SubPanel {
    fn new(m: usize, q: usize) -> Self {
        let a: Vec<usize> = (0..m).collect();
        let mut d = vec![0usize; m + 1];
        if let Some(first) = d.first_mut() {
            *first = 1;
        }
        if let Some(last) = d.last_mut() {
            *last = 1;
        }
        let cursor = PbwtCursor {
            m,
            k: 0,
            a,
            d,
            y: vec![0u8; m],
            c: m,
            u: Vec::new(),
        };
        SubPanel {
            cursor,
            f: vec![0usize; q],
            d: vec![0usize; q],
        }
    }
}

/// Matches every haplotype in `query` against `reference`, reporting both
/// the dense matches (see [`super::sweep::match_sweep`]) and, when
/// `n_sparse > 1`, the coarser matches found on `n_sparse` interleaved
/// sub-panels via [`crate::report::Reporter::report_sparse`].
pub fn match_sweep_sparse(
    reference: &Panel,
    query: &Panel,
    n_sparse: usize,
    reporter: &mut dyn Reporter,
) -> Result<(), PbwtError> {
    if n_sparse == 0 {
        return Err(PbwtError::Configuration("nSparse must be >= 1".to_owned()));
    }
    let n = reference.n();
    if query.n() != n {
        return Err(PbwtError::Configuration(format!(
            "query length {} does not match reference length {n}",
            query.n()
        )));
    }
    let m = reference.m();
    let q = query.m();
    let mut cursor = PbwtCursor::new(reference);
    let mut f = vec![0usize; q];
    let mut d = vec![0usize; q];
    let mut subs: Vec<SubPanel> = (0..n_sparse).map(|_| SubPanel::new(m, q)).collect();

    for k in 0..n {
        for j in 0..q {
            let x = query.symbol(j, k);
            if cursor.y.get(f[j]).copied() != Some(x) {
                step(&mut cursor, &mut f, &mut d, j, x, k, k, 1, m, false, reporter)?;
            }
        }

        if n_sparse > 1 {
            let kk = k % n_sparse;
            let k_sub = k / n_sparse;
            let sub = &mut subs[kk];
            for j in 0..q {
                let x = query.symbol(j, k);
                if sub.cursor.y.get(sub.f[j]).copied() != Some(x) {
                    step(
                        &mut sub.cursor,
                        &mut sub.f,
                        &mut sub.d,
                        j,
                        x,
                        k_sub,
                        k,
                        n_sparse,
                        m,
                        true,
                        reporter,
                    )?;
                }
            }
        }

        cursor.calculate_u();
        for j in 0..q {
            let x = query.symbol(j, k);
            f[j] = cursor.map(x, f[j]);
            if f[j] == m {
                f[j] = 0;
            }
        }

        if n_sparse > 1 {
            let kk = k % n_sparse;
            let mut snapshot = vec![0u8; m];
            for i in 0..m {
                snapshot[cursor.a[i]] = cursor.y[i];
            }
            let sub = &mut subs[kk];
            sub.cursor.calculate_u();
            for j in 0..q {
                let x = query.symbol(j, k);
                sub.f[j] = sub.cursor.map(x, sub.f[j]);
                if sub.f[j] == m {
                    sub.f[j] = 0;
                }
            }
            sub.cursor.advance_with_y(|row| snapshot[row]);
        }

        cursor.advance_reading_ad(reference)?;
    }

    for j in 0..q {
        let mut i = f[j];
        reporter.report_sparse(
            MatchRecord {
                a: j,
                b: cursor.a[i],
                start: d[j],
                end: n,
            },
            false,
        )?;
        i += 1;
        while i < m && cursor.d[i] <= d[j] {
            reporter.report_sparse(
                MatchRecord {
                    a: j,
                    b: cursor.a[i],
                    start: d[j],
                    end: n,
                },
                false,
            )?;
            i += 1;
        }
    }

    if n_sparse > 1 {
        for (kk, sub) in subs.iter().enumerate() {
            for j in 0..q {
                let mut i = sub.f[j];
                let start = n_sparse * sub.d[j] + kk;
                reporter.report_sparse(
                    MatchRecord {
                        a: j,
                        b: sub.cursor.a[i],
                        start,
                        end: n,
                    },
                    true,
                )?;
                i += 1;
                while i < m && sub.cursor.d[i] <= sub.d[j] {
                    reporter.report_sparse(
                        MatchRecord {
                            a: j,
                            b: sub.cursor.a[i],
                            start,
                            end: n,
                        },
                        true,
                    )?;
                    i += 1;
                }
            }
        }
    }
    Ok(())
}

/// Shared extend-or-report step for both the dense cursor and each sparse
/// sub-cursor. `k_equiv` is the site index in whatever units the cursor's
/// own `d` array advances in (real sites for the dense cursor, sub-panel
/// steps for a sparse one) and is only used for the internal divergence
/// bound; `real_k` is always the true site index and `n_sparse` the active
/// stride, used together to rescale a sparse match's `start` back to real
/// sites (`n_sparse * d[j] + real_k % n_sparse`, matching `reportAndUpdate`'s
/// `dj` computation in the C source) and to report its `end` at the real
/// site the break was observed at rather than the sub-panel step count.
#[allow(clippy::too_many_arguments)]
fn step(
    cursor: &mut PbwtCursor,
    f: &mut [usize],
    d: &mut [usize],
    j: usize,
    x: u8,
    k_equiv: usize,
    real_k: usize,
    n_sparse: usize,
    m: usize,
    is_sparse: bool,
    reporter: &mut dyn Reporter,
) -> Result<(), PbwtError> {
    let mut i_plus = f[j];
    loop {
        i_plus += 1;
        if i_plus >= m || cursor.d[i_plus] > d[j] {
            break;
        }
        if cursor.y[i_plus] == x {
            f[j] = i_plus;
            return Ok(());
        }
    }

    let start = if is_sparse {
        n_sparse * d[j] + real_k % n_sparse
    } else {
        d[j]
    };
    for i in f[j]..i_plus {
        reporter.report_sparse(
            MatchRecord {
                a: j,
                b: cursor.a[i],
                start,
                end: real_k,
            },
            is_sparse,
        )?;
    }

    let mut i_minus: isize = f[j] as isize;
    let mut d_plus: usize = if i_plus < m { cursor.d[i_plus] } else { k_equiv };
    let mut d_minus: usize = cursor.d[i_minus as usize];

    loop {
        if d_minus <= d_plus {
            let mut found: isize = -1;
            while cursor.d[i_minus as usize] <= d_minus {
                i_minus -= 1;
                if cursor.y[i_minus as usize] == x {
                    found = i_minus;
                }
            }
            if found >= 0 {
                f[j] = found as usize;
                d[j] = d_minus;
                return Ok(());
            }
            d_minus = cursor.d[i_minus as usize];
        } else {
            while i_plus < m && cursor.d[i_plus] <= d_plus {
                if cursor.y[i_plus] == x {
                    f[j] = i_plus;
                    d[j] = d_plus;
                    return Ok(());
                }
                i_plus += 1;
            }
            d_plus = if i_plus == m { k_equiv } else { cursor.d[i_plus] };
            if i_minus == 0 && i_plus == m {
                d[j] = k_equiv + 1;
                return Ok(());
            }
        }
    }
}
