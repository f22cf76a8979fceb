#![no_main]
use libfuzzer_sys::fuzz_target;
use pbwt_match::panel::types::Panel;
use pbwt_match::PbwtCursor;

/// Turns raw fuzz bytes into a small panel: the first byte picks a row
/// count `m` (clamped), the rest are folded into `m` rows of up to 32
/// sites each so shrinking finds minimal failing panels quickly.
fn panel_from_bytes(data: &[u8]) -> Option<Panel> {
    if data.is_empty() {
        return None;
    }
    let m = (data[0] as usize % 12) + 1;
    let body = &data[1..];
    if body.is_empty() {
        return None;
    }
    let n = (body.len() / m).min(32);
    if n == 0 {
        return None;
    }
    let rows: Vec<Vec<u8>> = (0..m)
        .map(|row| {
            (0..n)
                .map(|site| b'0' + (body[(row * n + site) % body.len()] & 1))
                .collect()
        })
        .collect();
    Panel::from_rows(&rows).ok()
}

fuzz_target!(|data: &[u8]| {
    let Some(panel) = panel_from_bytes(data) else {
        return;
    };

    let mut cursor = PbwtCursor::new(&panel);
    let mut columns: Vec<Vec<u8>> = Vec::with_capacity(panel.n());
    for _ in 0..panel.n() {
        let mut column = vec![0u8; panel.m()];
        for (rank, &row) in cursor.a.iter().enumerate() {
            column[row] = cursor.y[rank];
        }
        columns.push(column);
        cursor.advance_reading_ad(&panel).unwrap();
    }

    let haps = panel.haplotypes();
    for (k, column) in columns.iter().enumerate() {
        for (row, &symbol) in column.iter().enumerate() {
            assert_eq!(haps[row][k], b'0' + symbol, "round-trip mismatch at row {row}, site {k}");
        }
    }

    // a must stay a permutation of every row index at every site.
    let mut sorted = cursor.a.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..panel.m()).collect::<Vec<_>>());
});
