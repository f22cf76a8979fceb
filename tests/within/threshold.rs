use pbwt_match::report::CollectingReporter;
use pbwt_match::{within, Panel};

fn panel(rows: &[&str]) -> Panel {
    Panel::from_rows(&rows.iter().map(|r| r.as_bytes().to_vec()).collect::<Vec<_>>()).unwrap()
}

#[test]
fn single_discordance_at_l2_excludes_the_short_prefix_match() {
    // scenario 2 from the design spec: H = {"01010", "00010"}
    let p = panel(&["01010", "00010"]);
    let mut reporter = CollectingReporter::default();
    within::match_long_within(&p, 2, &mut reporter).unwrap();
    let spans: Vec<(usize, usize)> = reporter.records.iter().map(|m| (m.start, m.end)).collect();
    assert!(spans.contains(&(2, 5)));
    assert!(!spans.contains(&(0, 1)));
}

#[test]
fn boundary_match_ends_exactly_at_the_divergence_site() {
    // scenario 4: panel {"11", "10"}, L=1 -> (0,1,0,1)
    let p = panel(&["11", "10"]);
    let mut reporter = CollectingReporter::default();
    within::match_long_within(&p, 1, &mut reporter).unwrap();
    assert!(reporter
        .records
        .iter()
        .any(|m| m.a == 0 && m.b == 1 && m.start == 0 && m.end == 1));
}

#[test]
fn every_reported_match_meets_the_length_threshold() {
    let p = panel(&["010110101", "001100101", "111001111", "000011000"]);
    let threshold = 3;
    let mut reporter = CollectingReporter::default();
    within::match_long_within(&p, threshold, &mut reporter).unwrap();
    for m in &reporter.records {
        assert!(m.len() as u32 >= threshold);
    }
}
