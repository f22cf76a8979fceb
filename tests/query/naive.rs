use pbwt_match::report::CollectingReporter;
use pbwt_match::{query, Panel};

fn panel(rows: &[&str]) -> Panel {
    Panel::from_rows(&rows.iter().map(|r| r.as_bytes().to_vec()).collect::<Vec<_>>()).unwrap()
}

#[test]
fn query_against_panel_finds_the_identical_row() {
    // scenario 3: reference {"000","111","010"}, query {"010"}
    let reference = panel(&["000", "111", "010"]);
    let query = panel(&["010"]);
    let mut reporter = CollectingReporter::default();
    query::match_naive(&reference, &query, &mut reporter).unwrap();
    assert!(reporter
        .records
        .iter()
        .any(|m| m.a == 0 && m.b == 2 && m.start == 0 && m.end == 3));
}

#[test]
fn rejects_site_count_mismatch() {
    let reference = panel(&["0000"]);
    let query = panel(&["00"]);
    let mut reporter = CollectingReporter::default();
    assert!(query::match_naive(&reference, &query, &mut reporter).is_err());
}
