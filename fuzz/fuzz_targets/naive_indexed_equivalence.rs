#![no_main]
use libfuzzer_sys::fuzz_target;
use pbwt_match::panel::types::Panel;
use pbwt_match::query::{self, PanelIndex};
use pbwt_match::report::CollectingReporter;

/// Splits fuzz input into a reference panel and a one-row query over the
/// same site axis, both sized small enough to keep each run fast.
fn panels_from_bytes(data: &[u8]) -> Option<(Panel, Panel)> {
    if data.len() < 4 {
        return None;
    }
    let m = (data[0] as usize % 10) + 2;
    let n = (data[1] as usize % 24) + 1;
    let needed = m * n + n;
    let body = &data[2..];
    if body.len() < needed.min(body.len()).max(1) {
        return None;
    }

    let mut bit = |i: usize| -> u8 { b'0' + (body[i % body.len()] & 1) };
    let reference_rows: Vec<Vec<u8>> = (0..m)
        .map(|row| (0..n).map(|site| bit(row * n + site)).collect())
        .collect();
    let query_row: Vec<u8> = (0..n).map(|site| bit(m * n + site)).collect();

    let reference = Panel::from_rows(&reference_rows).ok()?;
    let query = Panel::from_rows(&[query_row]).ok()?;
    Some((reference, query))
}

fuzz_target!(|data: &[u8]| {
    let Some((reference, query)) = panels_from_bytes(data) else {
        return;
    };

    let refs = reference.haplotypes();
    let queries = query.haplotypes();

    let mut naive_reporter = CollectingReporter::default();
    if query::match_naive(&reference, &query, &mut naive_reporter).is_err() {
        return;
    }
    for m in &naive_reporter.records {
        for site in m.start..m.end {
            assert_eq!(queries[m.a][site], refs[m.b][site]);
        }
    }

    let index = PanelIndex::build(&reference).unwrap();
    let mut indexed_reporter = CollectingReporter::default();
    query::match_indexed(&reference, &index, &query, &mut indexed_reporter).unwrap();
    for m in &indexed_reporter.records {
        for site in m.start..m.end {
            assert_eq!(queries[m.a][site], refs[m.b][site]);
        }
    }
});
