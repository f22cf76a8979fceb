//! The dynamic sweep panel-vs-query matcher (`matchSequencesSweep` in the
//! C source): O(N(M+Q)) time, O(N+M) memory, no precomputed per-site index.
//! A single reference cursor sweeps forward; every query haplotype carries
//! a `(start, first_reference_rank)` pair tracking its current best match,
//! updated in place as the cursor advances instead of being looked up in a
//! stored `a`/`d` table.
//!
//! The C source also runs a PBWT cursor over the query panel purely to
//! iterate its rows; since that cursor is only ever advanced with the
//! non-reordering `ForwardsRead` step, its row order never changes from
//! the identity permutation, so this port iterates query rows directly by
//! index instead of carrying the unused second cursor.

use crate::error::PbwtError;
use crate::panel::cursor::PbwtCursor;
use crate::panel::types::Panel;
use crate::report::{MatchRecord, Reporter};

/// Matches every haplotype in `query` against `reference`, reporting the
/// longest currently-extendable match for each query haplotype as it ends.
pub fn match_sweep(
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
    let q = query.m();
    let mut cursor = PbwtCursor::new(reference);
    let mut f = vec![0usize; q];
    let mut d = vec![0usize; q];

    for k in 0..n {
        for j in 0..q {
            let x = query.symbol(j, k);
            if cursor.y.get(f[j]).copied() != Some(x) {
                extend_or_report(&mut cursor, &mut f, &mut d, j, x, k, m, reporter)?;
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
        cursor.advance_reading_ad(reference)?;
    }

    for j in 0..q {
        let mut i = f[j];
        reporter.report(MatchRecord {
            a: j,
            b: cursor.a[i],
            start: d[j],
            end: n,
        })?;
        i += 1;
        while i < m && cursor.d[i] <= d[j] {
            reporter.report(MatchRecord {
                a: j,
                b: cursor.a[i],
                start: d[j],
                end: n,
            })?;
            i += 1;
        }
    }
    Ok(())
}

/// The "this match ends here" branch of the inner loop: first see whether
/// another reference row at the same rank distance still extends the
/// match, otherwise report the current interval and search outward for the
/// next-best interval using the divergence array.
#[allow(clippy::too_many_arguments)]
fn extend_or_report(
    cursor: &mut PbwtCursor,
    f: &mut [usize],
    d: &mut [usize],
    j: usize,
    x: u8,
    k: usize,
    m: usize,
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

    for i in f[j]..i_plus {
        reporter.report(MatchRecord {
            a: j,
            b: cursor.a[i],
            start: d[j],
            end: k,
        })?;
    }

    let mut i_minus: isize = f[j] as isize;
    let mut d_plus: usize = if i_plus < m { cursor.d[i_plus] } else { k };
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
            d_plus = if i_plus == m { k } else { cursor.d[i_plus] };
            if i_minus == 0 && i_plus == m {
                d[j] = k + 1;
                return Ok(());
            }
        }
    }
}
