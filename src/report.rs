//! Match reporting: the single trait every matcher writes into, plus the
//! check and stats decorators the C source toggled with file-scope
//! `isCheck`/`isStats` flags and a bare function pointer
//! (`void (*report)(int ai, int bi, int start, int end)`).
//!
//! Here the callback becomes a trait object so the decorators can wrap one
//! another (`CheckingReporter` around a `TextReporter`, etc.) instead of
//! threading extra globals through every matcher.

use std::io::Write;

use crate::error::PbwtError;
use crate::panel::types::Panel;

/// One reported match: haplotype `a` against haplotype `b`, half-open site
/// range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRecord {
    pub a: usize,
    pub b: usize,
    pub start: usize,
    pub end: usize,
}

impl MatchRecord {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

/// Sink for matches as a matcher finds them.
///
/// `report_sparse` carries the extra `is_sparse` flag the sparse sweep uses
/// to mark matches discovered on an interleaved sub-panel rather than the
/// dense panel; the default just forwards to `report` and drops the flag.
/// Both methods return `Result` so a checking decorator can surface an
/// invariant violation as an ordinary [`PbwtError`] instead of aborting the
/// process.
pub trait Reporter {
    fn report(&mut self, record: MatchRecord) -> Result<(), PbwtError>;

    fn report_sparse(&mut self, record: MatchRecord, _is_sparse: bool) -> Result<(), PbwtError> {
        self.report(record)
    }
}

/// Collects every match into memory, dropping matches of length zero (the
/// C source's `if (start == end) return;` guard in `reportMatch`).
#[derive(Debug, Default)]
pub struct CollectingReporter {
    pub records: Vec<MatchRecord>,
}

impl Reporter for CollectingReporter {
    fn report(&mut self, record: MatchRecord) -> Result<(), PbwtError> {
        if record.is_empty() {
            return Ok(());
        }
        self.records.push(record);
        Ok(())
    }
}

/// Writes `a\tb\tstart\tend\tlength` lines to any `Write`, mirroring the
/// C source's `printf ("MATCH\t%d\t%d\t%d\t%d\t%d\n", ...)`.
pub struct TextReporter<W: Write> {
    out: W,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W) -> Self {
        TextReporter { out }
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn report(&mut self, record: MatchRecord) -> Result<(), PbwtError> {
        if record.is_empty() {
            return Ok(());
        }
        let _ = writeln!(
            self.out,
            "MATCH\t{}\t{}\t{}\t{}\t{}",
            record.a,
            record.b,
            record.start,
            record.end,
            record.len()
        );
        Ok(())
    }
}

/// Wraps another reporter and verifies every match is real and maximal
/// before forwarding it: `a` and `b` agree on `[start, end)`, and disagree
/// (or run off the panel edge) just outside it. Corresponds to the C
/// source's `checkMatchMaximal`.
pub struct CheckingReporter<'p, R: Reporter> {
    inner: R,
    haps_a: &'p Panel,
    haps_b: &'p Panel,
}

impl<'p, R: Reporter> CheckingReporter<'p, R> {
    pub fn new(inner: R, haps_a: &'p Panel, haps_b: &'p Panel) -> Self {
        CheckingReporter {
            inner,
            haps_a,
            haps_b,
        }
    }

    fn check(&self, record: &MatchRecord) -> Result<(), PbwtError> {
        let n = self.haps_a.n();
        if record.start > 0
            && self.haps_a.symbol(record.a, record.start - 1)
                == self.haps_b.symbol(record.b, record.start - 1)
        {
            return Err(PbwtError::InvariantViolation(format!(
                "match ({}, {}) not maximal: extends backwards past {}",
                record.a, record.b, record.start
            )));
        }
        if record.end < n
            && self.haps_a.symbol(record.a, record.end) == self.haps_b.symbol(record.b, record.end)
        {
            return Err(PbwtError::InvariantViolation(format!(
                "match ({}, {}) not maximal: extends forwards past {}",
                record.a, record.b, record.end
            )));
        }
        for site in record.start..record.end {
            if self.haps_a.symbol(record.a, site) != self.haps_b.symbol(record.b, site) {
                return Err(PbwtError::InvariantViolation(format!(
                    "match ({}, {}) not a match at site {site}",
                    record.a, record.b
                )));
            }
        }
        Ok(())
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<'p, R: Reporter> Reporter for CheckingReporter<'p, R> {
    fn report(&mut self, record: MatchRecord) -> Result<(), PbwtError> {
        if record.is_empty() {
            return Ok(());
        }
        self.check(&record)?;
        self.inner.report(record)
    }
}

/// Accumulates a length histogram instead of individual records, mirroring
/// the C source's `matchLengthHist` array and the `-stats` summary lines.
#[derive(Debug, Default)]
pub struct StatsReporter {
    histogram: Vec<u64>,
    total_matches: u64,
    total_length: u64,
}

impl StatsReporter {
    pub fn new() -> Self {
        StatsReporter::default()
    }

    pub fn record_length(&mut self, len: usize) {
        if self.histogram.len() <= len {
            self.histogram.resize(len + 1, 0);
        }
        self.histogram[len] += 1;
        self.total_matches += 1;
        self.total_length += len as u64;
    }

    pub fn histogram(&self) -> &[u64] {
        &self.histogram
    }

    pub fn average_length(&self) -> f64 {
        if self.total_matches == 0 {
            0.0
        } else {
            self.total_length as f64 / self.total_matches as f64
        }
    }

    pub fn total_matches(&self) -> u64 {
        self.total_matches
    }
}

impl Reporter for StatsReporter {
    fn report(&mut self, record: MatchRecord) -> Result<(), PbwtError> {
        if record.is_empty() {
            return Ok(());
        }
        self.record_length(record.len());
        Ok(())
    }
}
