//! The forward PBWT cursor: the `a`/`d`/`y`/`u` quadruple and the single
//! `advance_reading_ad` step that rebuilds them one site at a time.
//!
//! This is the direct counterpart of `PBWT_cursor` and
//! `pbwtCursorForwardsReadAD` in the original C matcher: same running-maxima
//! divergence propagation, same `k+2` boundary sentinels, rewritten over
//! owned `Vec<usize>` state instead of a mutated-in-place struct of raw
//! pointers.

use crate::error::PbwtError;
use crate::panel::types::Panel;

/// Forward PBWT state at a single site `k`.
///
/// | Field | C equivalent |
/// |-------|--------------|
/// | `a`   | `u->a`, the row permutation sorted by reverse-prefix |
/// | `d`   | `u->d`, divergence array, length `m+1` with sentinels at both ends |
/// | `y`   | `u->y`, the symbol column at site `k` in `a`-order |
/// | `c`   | `u->c`, count of zero-symbols in `y` |
/// | `u`   | rank prefix sum over `y`, populated on demand by [`PbwtCursor::calculate_u`] |
#[derive(Debug, Clone)]
pub struct PbwtCursor {
    pub m: usize,
    pub k: usize,
    pub a: Vec<usize>,
    pub d: Vec<usize>,
    pub y: Vec<u8>,
    pub c: usize,
    pub u: Vec<usize>,
}

impl PbwtCursor {
    /// Builds the cursor at site 0: `a[i] = i`, `d` all zero except the two
    /// sentinel slots, `y` read straight from the panel's first column.
    pub fn new(panel: &Panel) -> Self {
        let m = panel.m();
        let a: Vec<usize> = (0..m).collect();
        let mut d = vec![0usize; m + 1];
        if let Some(first) = d.first_mut() {
            *first = 1;
        }
        if let Some(last) = d.last_mut() {
            *last = 1;
        }
        let y = if panel.n() > 0 {
            a.iter().map(|&row| panel.symbol(row, 0)).collect()
        } else {
            Vec::new()
        };
        let c = y.iter().filter(|&&s| s == 0).count();
        PbwtCursor {
            m,
            k: 0,
            a,
            d,
            y,
            c,
            u: Vec::new(),
        }
    }

    /// Populates `self.u`, the rank prefix sum over the current `y`:
    /// `u[i]` is the number of zero-symbols among `y[0..i]`, so `u[0] == 0`
    /// and `u[m] == c`.
    pub fn calculate_u(&mut self) {
        let mut u = Vec::with_capacity(self.m + 1);
        let mut count = 0usize;
        u.push(0);
        for &s in &self.y {
            if s == 0 {
                count += 1;
            }
            u.push(count);
        }
        self.u = u;
    }

    /// Maps row-rank `i` at the current site to its rank at the next site,
    /// given the symbol `s` that row carries here. Requires `calculate_u`
    /// to have been called since the last advance.
    pub fn map(&self, s: u8, i: usize) -> usize {
        if s == 0 {
            self.u[i]
        } else {
            self.c + (i - self.u[i])
        }
    }

    /// Advances the cursor from site `k` to site `k + 1`: stable-partitions
    /// `a` by the current `y`, propagates divergence as a running maximum
    /// within each partition, then reads the new `y` column from the panel.
    ///
    /// Returns [`PbwtError::Structural`] if the cursor is already at the
    /// panel's last site.
    pub fn advance_reading_ad(&mut self, panel: &Panel) -> Result<(), PbwtError> {
        let n = panel.n();
        if self.k >= n {
            return Err(PbwtError::Structural(format!(
                "cursor advance past N (k={}, N={n})",
                self.k
            )));
        }
        let next_k = self.k + 1;
        self.advance_with_y(|row| {
            if next_k < n {
                panel.symbol(row, next_k)
            } else {
                0
            }
        });
        Ok(())
    }

    /// The divergence-propagating stable partition shared by every advance
    /// variant, parameterized over where the next site's symbol column
    /// comes from. Panel-backed cursors read it from the panel (see
    /// [`PbwtCursor::advance_reading_ad`]); sparse sub-panel cursors (see
    /// [`crate::query::sparse`]) read it from a snapshot of another
    /// cursor's current column instead of a real next site.
    pub fn advance_with_y<F: Fn(usize) -> u8>(&mut self, next_symbol: F) {
        let k = self.k;
        let m = self.m;

        let mut a0 = Vec::with_capacity(m);
        let mut d0 = Vec::with_capacity(m);
        let mut a1 = Vec::with_capacity(m);
        let mut d1 = Vec::with_capacity(m);
        let mut p = k + 1;
        let mut q = k + 1;
        for i in 0..m {
            if self.d[i] > p {
                p = self.d[i];
            }
            if self.d[i] > q {
                q = self.d[i];
            }
            if self.y[i] == 0 {
                a0.push(self.a[i]);
                d0.push(p);
                p = 0;
            } else {
                a1.push(self.a[i]);
                d1.push(q);
                q = 0;
            }
        }

        let mut a = a0;
        a.extend(a1);
        let mut d = d0;
        d.extend(d1);
        if let Some(first) = d.first_mut() {
            *first = k + 2;
        }
        d.push(k + 2);

        let y: Vec<u8> = a.iter().map(|&row| next_symbol(row)).collect();
        let c = y.iter().filter(|&&s| s == 0).count();

        self.a = a;
        self.d = d;
        self.y = y;
        self.c = c;
        self.k += 1;
        self.u.clear();
    }
}
