use pbwt_match::report::{CollectingReporter, MatchRecord, Reporter};
use pbwt_match::{query, Panel, PbwtError};

fn panel(rows: &[&str]) -> Panel {
    Panel::from_rows(&rows.iter().map(|r| r.as_bytes().to_vec()).collect::<Vec<_>>()).unwrap()
}

#[test]
fn trivial_panel_matches_with_a_sparse_stride() {
    // scenario 1: within-panel trivial case re-used as a query-vs-panel check;
    // sparse stride 2 should still find the full-length identical match.
    let reference = panel(&["0000", "0000"]);
    let query = panel(&["0000"]);
    let mut reporter = CollectingReporter::default();
    query::match_sweep_sparse(&reference, &query, 2, &mut reporter).unwrap();
    assert!(reporter
        .records
        .iter()
        .any(|m| m.a == 0 && m.b == 0 && m.start == 0 && m.end == 4));
}

#[test]
fn sparse_sweep_recovers_a_match_split_by_a_single_discordance() {
    // reference and query agree everywhere except site 4 (an even site), so
    // the dense sweep splits into two matches of length at most 5, but the
    // odd-site sub-panel (phase 1 of a stride-2 sparse sweep) never sees the
    // discordance and reports one long match spanning the whole panel.
    let reference = panel(&["0101010101"]);
    let query = panel(&["0101110101"]);
    let mut reporter = CollectingReporter::default();
    query::match_sweep_sparse(&reference, &query, 2, &mut reporter).unwrap();
    assert!(reporter.records.iter().any(|m| m.len() > 5));
}

#[derive(Default)]
struct SparseOnly {
    records: Vec<MatchRecord>,
}

impl Reporter for SparseOnly {
    fn report(&mut self, _record: MatchRecord) -> Result<(), PbwtError> {
        Ok(())
    }

    fn report_sparse(&mut self, record: MatchRecord, is_sparse: bool) -> Result<(), PbwtError> {
        if is_sparse {
            self.records.push(record);
        }
        Ok(())
    }
}

#[test]
fn sparse_mid_sweep_break_rescales_to_real_site_units() {
    // same split as above, but targeting phase 0 (the even-site sub-panel),
    // which *does* see the discordance at site 4 and must close its block
    // there mid-sweep rather than at the final flush. Before the fix this
    // reported (start: 0, end: 2) -- the sub-step index -- silently
    // truncating a 4-site match to 2.
    let reference = panel(&["0101010101"]);
    let query = panel(&["0101110101"]);
    let mut reporter = SparseOnly::default();
    query::match_sweep_sparse(&reference, &query, 2, &mut reporter).unwrap();

    let interior = reporter
        .records
        .iter()
        .find(|m| m.start == 0 && m.end == 4)
        .expect("phase-0 sub-panel should close its first block at real site 4");

    // the forward-maximality check a `CheckingReporter` performs would have
    // failed on the pre-fix (start: 0, end: 2) record, since site 2 still
    // agrees; the correctly-scaled record must disagree right where it
    // claims to end.
    let refs = reference.haplotypes();
    let queries = query.haplotypes();
    assert_ne!(queries[interior.a][interior.end], refs[interior.b][interior.end]);
}

#[test]
fn every_reported_match_is_a_true_agreement_at_real_sites() {
    let reference = panel(&["01011010", "00110010", "11100101", "00001111"]);
    let query = panel(&["01111010", "10100101"]);
    let mut reporter = CollectingReporter::default();
    query::match_sweep_sparse(&reference, &query, 2, &mut reporter).unwrap();
    let refs = reference.haplotypes();
    let queries = query.haplotypes();
    for m in &reporter.records {
        for site in m.start..m.end {
            assert_eq!(queries[m.a][site], refs[m.b][site]);
        }
    }
}
