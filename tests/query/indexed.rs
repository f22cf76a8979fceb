use pbwt_match::query::{self, PanelIndex};
use pbwt_match::report::CollectingReporter;
use pbwt_match::Panel;

fn panel(rows: &[&str]) -> Panel {
    Panel::from_rows(&rows.iter().map(|r| r.as_bytes().to_vec()).collect::<Vec<_>>()).unwrap()
}

#[test]
fn query_against_panel_finds_the_identical_row() {
    let reference = panel(&["000", "111", "010"]);
    let index = PanelIndex::build(&reference).unwrap();
    let query = panel(&["010"]);
    let mut reporter = CollectingReporter::default();
    query::match_indexed(&reference, &index, &query, &mut reporter).unwrap();
    assert!(reporter
        .records
        .iter()
        .any(|m| m.a == 0 && m.b == 2 && m.start == 0 && m.end == 3));
}

#[test]
fn index_snapshots_a_permutation_at_every_site() {
    let reference = panel(&["01011010", "00110010", "11100101"]);
    let index = PanelIndex::build(&reference).unwrap();
    assert_eq!(index.n(), reference.n());
    assert_eq!(index.m(), reference.m());
}
