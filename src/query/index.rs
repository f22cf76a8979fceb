//! Precomputed per-site PBWT indexes (`a`, `d`, `u`, `c` at every site),
//! the O(NM)-memory structure [`indexed`](super::indexed) sweeps over to
//! match many queries in O(NQ) after the one-time O(NM) build.

use crate::error::PbwtError;
use crate::panel::cursor::PbwtCursor;
use crate::panel::types::Panel;

/// `a[k]`/`d[k]` for `k` in `0..=N`, `u[k]`/`c[k]` for `k` in `0..N`.
pub struct PanelIndex {
    pub(crate) a: Vec<Vec<usize>>,
    pub(crate) d: Vec<Vec<usize>>,
    pub(crate) u: Vec<Vec<usize>>,
    pub(crate) c: Vec<usize>,
}

impl PanelIndex {
    /// Sweeps a cursor once across the whole panel, snapshotting its state
    /// at every site.
    pub fn build(panel: &Panel) -> Result<Self, PbwtError> {
        let n = panel.n();
        let mut cursor = PbwtCursor::new(panel);
        let mut a = Vec::with_capacity(n + 1);
        let mut d = Vec::with_capacity(n + 1);
        let mut u = Vec::with_capacity(n);
        let mut c = Vec::with_capacity(n);

        for k in 0..n {
            a.push(cursor.a.clone());
            d.push(cursor.d.clone());
            c.push(cursor.c);
            cursor.calculate_u();
            u.push(cursor.u.clone());
            cursor.advance_reading_ad(panel)?;
            let _ = k;
        }
        a.push(cursor.a.clone());
        d.push(cursor.d.clone());

        Ok(PanelIndex { a, d, u, c })
    }

    pub fn n(&self) -> usize {
        self.u.len()
    }

    pub fn m(&self) -> usize {
        self.a.first().map_or(0, |row| row.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshots_one_a_per_site_plus_terminal() {
        let panel = Panel::from_rows(&[b"0101".to_vec(), b"1100".to_vec(), b"0011".to_vec()]).unwrap();
        let index = PanelIndex::build(&panel).unwrap();
        assert_eq!(index.a.len(), panel.n() + 1);
        assert_eq!(index.d.len(), panel.n() + 1);
        assert_eq!(index.u.len(), panel.n());
        assert_eq!(index.c.len(), panel.n());
        for a in &index.a {
            let mut sorted = a.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, (0..panel.m()).collect::<Vec<_>>());
        }
    }
}
