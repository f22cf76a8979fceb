use pbwt_match::panel::types::Panel;
use pbwt_match::PbwtCursor;

fn random_panel(m: usize, n: usize, seed: u64) -> Panel {
    let mut state = seed.wrapping_mul(2862933555777941757).wrapping_add(1);
    let mut next_bit = || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state & 1) as u8
    };
    let rows: Vec<Vec<u8>> = (0..m)
        .map(|_| (0..n).map(|_| b'0' + next_bit()).collect())
        .collect();
    Panel::from_rows(&rows).unwrap()
}

#[test]
fn cursor_a_stays_a_permutation_across_a_randomized_sweep() {
    let panel = random_panel(8, 16, 7);
    let mut cursor = PbwtCursor::new(&panel);
    for _ in 0..panel.n() {
        let mut sorted = cursor.a.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..panel.m()).collect::<Vec<_>>());
        cursor.advance_reading_ad(&panel).unwrap();
    }
}

#[test]
fn cursor_round_trip_reconstructs_the_panel() {
    let panel = random_panel(8, 16, 42);
    let mut cursor = PbwtCursor::new(&panel);
    let mut columns: Vec<Vec<u8>> = Vec::with_capacity(panel.n());

    for k in 0..panel.n() {
        let mut column = vec![0u8; panel.m()];
        for (rank, &row) in cursor.a.iter().enumerate() {
            column[row] = cursor.y[rank];
        }
        columns.push(column);
        let _ = k;
        cursor.advance_reading_ad(&panel).unwrap();
    }

    let haps = panel.haplotypes();
    for (k, column) in columns.iter().enumerate() {
        for (row, &symbol) in column.iter().enumerate() {
            assert_eq!(haps[row][k], b'0' + symbol);
        }
    }
}

#[test]
fn divergence_bounds_shared_suffix_between_adjacent_ranks() {
    let panel = random_panel(6, 12, 99);
    let mut cursor = PbwtCursor::new(&panel);
    let haps = panel.haplotypes();

    for k in 0..panel.n() {
        for i in 1..panel.m() {
            let d = cursor.d[i];
            let (row_prev, row_cur) = (cursor.a[i - 1], cursor.a[i]);
            for site in d..=k {
                assert_eq!(haps[row_prev][site], haps[row_cur][site]);
            }
            if d > 0 {
                assert_ne!(haps[row_prev][d - 1], haps[row_cur][d - 1]);
            }
        }
        cursor.advance_reading_ad(&panel).unwrap();
    }
}

#[test]
fn fm_update_rank_matches_the_permutation_after_advance() {
    let panel = random_panel(10, 6, 13);
    let mut cursor = PbwtCursor::new(&panel);
    cursor.calculate_u();
    let old_a = cursor.a.clone();
    let ranks: Vec<usize> = (0..panel.m())
        .map(|i| cursor.map(cursor.y[i], i))
        .collect();
    cursor.advance_reading_ad(&panel).unwrap();
    for (old_rank, &new_rank) in ranks.iter().enumerate() {
        assert_eq!(cursor.a[new_rank], old_a[old_rank]);
    }
}
