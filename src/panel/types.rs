//! `Panel`: an M-haplotype by N-site binary matrix, bit-packed one word per
//! 64 sites per row. Mirrors the teacher's block-buffer layout in
//! `block/compress.rs` (fixed-width backing storage with an explicit row
//! stride) rather than a naive `Vec<Vec<u8>>`, since a real panel's M*N can
//! run into the billions of bits.

use std::fs;
use std::path::Path;

use crate::error::PbwtError;

const WORD_BITS: usize = 64;

/// A binary haplotype panel: `m` rows (haplotypes) by `n` columns (sites).
///
/// Symbols are restricted to `0`/`1`; the panel never carries missing data
/// or multi-allelic sites (out of scope, see the design spec's Non-goals).
#[derive(Debug, Clone)]
pub struct Panel {
    m: usize,
    n: usize,
    words_per_row: usize,
    bits: Vec<u64>,
}

impl Panel {
    /// Number of haplotypes (rows).
    pub fn m(&self) -> usize {
        self.m
    }

    /// Number of sites (columns).
    pub fn n(&self) -> usize {
        self.n
    }

    /// The symbol of haplotype `row` at `site`, as `0` or `1`.
    ///
    /// # Panics
    /// If `row >= self.m()` or `site >= self.n()`.
    pub fn symbol(&self, row: usize, site: usize) -> u8 {
        assert!(row < self.m, "row {row} out of bounds (M={})", self.m);
        assert!(site < self.n, "site {site} out of bounds (N={})", self.n);
        let word_idx = row * self.words_per_row + site / WORD_BITS;
        let bit_idx = site % WORD_BITS;
        ((self.bits[word_idx] >> bit_idx) & 1) as u8
    }

    /// Builds a panel from in-memory rows of `0`/`1` bytes.
    ///
    /// Every row must have the same length and every byte must be `b'0'` or
    /// `b'1'`; anything else is a [`PbwtError::Configuration`].
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, PbwtError> {
        let m = rows.len();
        let n = rows.first().map_or(0, |r| r.len());
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(PbwtError::Configuration(format!(
                    "row {i} has length {} but row 0 has length {n}",
                    row.len()
                )));
            }
        }
        let words_per_row = n.div_ceil(WORD_BITS).max(1);
        let mut bits = vec![0u64; words_per_row * m.max(1)];
        for (i, row) in rows.iter().enumerate() {
            for (site, &byte) in row.iter().enumerate() {
                let bit = match byte {
                    b'0' => 0u64,
                    b'1' => 1u64,
                    other => {
                        return Err(PbwtError::Configuration(format!(
                            "row {i}, site {site}: expected '0' or '1', found byte {other}"
                        )))
                    }
                };
                let word_idx = i * words_per_row + site / WORD_BITS;
                bits[word_idx] |= bit << (site % WORD_BITS);
            }
        }
        Ok(Panel {
            m,
            n,
            words_per_row,
            bits,
        })
    }

    /// Builds a panel from a plain-text file, one haplotype row of `0`/`1`
    /// characters per line. Blank trailing lines are ignored; anything else
    /// malformed is a [`PbwtError::Configuration`].
    pub fn from_text<P: AsRef<Path>>(path: P) -> Result<Self, PbwtError> {
        let text = fs::read_to_string(path)?;
        let rows: Vec<Vec<u8>> = text
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| line.as_bytes().to_vec())
            .collect();
        Self::from_rows(&rows)
    }

    /// Materializes every haplotype as an owned `Vec<u8>` of `0`/`1` bytes.
    /// Intended for tests and small fixtures, not the hot matching path.
    pub fn haplotypes(&self) -> Vec<Vec<u8>> {
        (0..self.m)
            .map(|row| (0..self.n).map(|site| b'0' + self.symbol(row, site)).collect())
            .collect()
    }
}
