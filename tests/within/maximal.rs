use pbwt_match::report::CollectingReporter;
use pbwt_match::{within, Panel};

fn panel(rows: &[&str]) -> Panel {
    Panel::from_rows(&rows.iter().map(|r| r.as_bytes().to_vec()).collect::<Vec<_>>()).unwrap()
}

#[test]
fn trivial_panel_reports_one_full_length_match() {
    // scenario 1: M=2, N=4, H = {"0000", "0000"}
    let p = panel(&["0000", "0000"]);
    let mut reporter = CollectingReporter::default();
    within::match_maximal_within(&p, &mut reporter).unwrap();
    assert_eq!(reporter.records.len(), 1);
    let m = reporter.records[0];
    assert_eq!((m.start, m.end), (0, 4));
}

#[test]
fn single_discordance_splits_into_two_maximal_matches() {
    // scenario 2: L=0 -> (0,1,0,1) and (0,1,2,5)
    let p = panel(&["01010", "00010"]);
    let mut reporter = CollectingReporter::default();
    within::match_maximal_within(&p, &mut reporter).unwrap();
    let mut spans: Vec<(usize, usize)> = reporter.records.iter().map(|m| (m.start, m.end)).collect();
    spans.sort_unstable();
    assert_eq!(spans, vec![(0, 1), (2, 5)]);
}

#[test]
fn every_reported_match_is_set_maximal() {
    let p = panel(&["0101101011", "0011001010", "1110011001", "0000110111"]);
    let mut reporter = CollectingReporter::default();
    within::match_maximal_within(&p, &mut reporter).unwrap();
    let haps = p.haplotypes();
    for m in &reporter.records {
        for site in m.start..m.end {
            assert_eq!(haps[m.a][site], haps[m.b][site]);
        }
        if m.start > 0 {
            assert_ne!(haps[m.a][m.start - 1], haps[m.b][m.start - 1]);
        }
        if m.end < p.n() {
            assert_ne!(haps[m.a][m.end], haps[m.b][m.end]);
        }
    }
}
