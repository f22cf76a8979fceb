use pbwt_match::report::CollectingReporter;
use pbwt_match::{query, Panel};

fn panel(rows: &[&str]) -> Panel {
    Panel::from_rows(&rows.iter().map(|r| r.as_bytes().to_vec()).collect::<Vec<_>>()).unwrap()
}

#[test]
fn query_against_panel_finds_the_identical_row() {
    let reference = panel(&["000", "111", "010"]);
    let query = panel(&["010"]);
    let mut reporter = CollectingReporter::default();
    query::match_sweep(&reference, &query, &mut reporter).unwrap();
    assert!(reporter
        .records
        .iter()
        .any(|m| m.a == 0 && m.b == 2 && m.start == 0 && m.end == 3));
}

#[test]
fn every_reported_match_is_a_true_agreement() {
    let reference = panel(&["0101101011", "0011001010", "1110011001", "0000110111"]);
    let query = panel(&["0111101011", "1010010110"]);
    let mut reporter = CollectingReporter::default();
    query::match_sweep(&reference, &query, &mut reporter).unwrap();
    let refs = reference.haplotypes();
    let queries = query.haplotypes();
    for m in &reporter.records {
        for site in m.start..m.end {
            assert_eq!(queries[m.a][site], refs[m.b][site]);
        }
    }
}
