//! The maximal within-panel matcher (Algorithm 4 in the paper,
//! `matchMaximalWithin` in the C source). Unlike [`crate::within::threshold`],
//! this has no length parameter: for every haplotype at every site it finds
//! the true maximal match on each side (left and right in sort order) by
//! walking outwards through the divergence array until a site-matching
//! neighbor would extend the block, or the divergence bound is exceeded.

use crate::error::PbwtError;
use crate::panel::cursor::PbwtCursor;
use crate::panel::types::Panel;
use crate::report::{MatchRecord, Reporter};

/// Reports every maximal within-panel match: pairs of haplotypes that agree
/// on `[start, end)` and disagree (or run off the panel) immediately outside
/// it on both sides.
pub fn match_maximal_within(panel: &Panel, reporter: &mut dyn Reporter) -> Result<(), PbwtError> {
    let mut cursor = PbwtCursor::new(panel);
    let n = panel.n();

    for k in 0..=n {
        let m = cursor.m;
        for i in 0..m {
            let mut lo: isize = i as isize - 1;
            let mut hi: isize = i as isize + 1;
            let mut extends = false;

            if cursor.d[i] <= cursor.d[i + 1] {
                loop {
                    let boundary = (lo + 1) as usize;
                    if cursor.d[boundary] > cursor.d[i] {
                        break;
                    }
                    let y_lo = cursor.y[lo as usize];
                    lo -= 1;
                    if y_lo == cursor.y[i] && k < n {
                        extends = true;
                        break;
                    }
                }
            }
            if !extends && cursor.d[i] >= cursor.d[i + 1] {
                loop {
                    let boundary = hi as usize;
                    if cursor.d[boundary] > cursor.d[i + 1] {
                        break;
                    }
                    let y_hi = cursor.y[boundary];
                    hi += 1;
                    if y_hi == cursor.y[i] && k < n {
                        extends = true;
                        break;
                    }
                }
            }

            if !extends {
                for j in (lo + 1)..(i as isize) {
                    reporter.report(MatchRecord {
                        a: cursor.a[i],
                        b: cursor.a[j as usize],
                        start: cursor.d[i],
                        end: k,
                    })?;
                }
                for j in (i as isize + 1)..hi {
                    reporter.report(MatchRecord {
                        a: cursor.a[i],
                        b: cursor.a[j as usize],
                        start: cursor.d[i + 1],
                        end: k,
                    })?;
                }
            }
        }
        if k < n {
            cursor.advance_reading_ad(panel)?;
        }
    }
    Ok(())
}
