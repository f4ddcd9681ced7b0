use scatter_matmul::partition::{split_rows, RowRange};

#[test]
fn test_remainder_front_loaded() {
    // 4 rows over 3 workers: the single extra row lands on rank 1.
    let plan = split_rows(4, 3);
    assert_eq!(
        plan,
        vec![
            RowRange { offset: 0, rows: 2 },
            RowRange { offset: 2, rows: 1 },
            RowRange { offset: 3, rows: 1 },
        ]
    );
}

#[test]
fn test_exact_division() {
    let plan = split_rows(6, 3);
    assert_eq!(
        plan,
        vec![
            RowRange { offset: 0, rows: 2 },
            RowRange { offset: 2, rows: 2 },
            RowRange { offset: 4, rows: 2 },
        ]
    );
}

#[test]
fn test_fewer_rows_than_workers() {
    // Trailing workers get zero-row ranges but stay in the plan.
    let plan = split_rows(2, 5);
    assert_eq!(plan.len(), 5);
    assert_eq!(plan[0], RowRange { offset: 0, rows: 1 });
    assert_eq!(plan[1], RowRange { offset: 1, rows: 1 });
    for range in &plan[2..] {
        assert!(range.is_empty());
        assert_eq!(range.offset, 2);
    }
}

#[test]
fn test_zero_rows() {
    let plan = split_rows(0, 4);
    assert_eq!(plan.len(), 4);
    assert!(plan.iter().all(|range| range.is_empty()));
}

#[test]
fn test_coverage_and_balance() {
    for total_rows in 0..40 {
        for workers in 1..8 {
            let plan = split_rows(total_rows, workers);
            assert_eq!(plan.len(), workers);

            // Contiguous from zero, covering exactly [0, total_rows).
            let mut next = 0;
            for range in &plan {
                assert_eq!(range.offset, next);
                next += range.rows;
            }
            assert_eq!(next, total_rows);

            // No two counts differ by more than one.
            let min = plan.iter().map(|r| r.rows).min().unwrap();
            let max = plan.iter().map(|r| r.rows).max().unwrap();
            assert!(max - min <= 1, "unbalanced plan for {total_rows}/{workers}");
        }
    }
}

#[test]
fn test_deterministic() {
    for total_rows in [0, 1, 7, 20, 33] {
        for workers in [1, 2, 3, 6] {
            assert_eq!(split_rows(total_rows, workers), split_rows(total_rows, workers));
        }
    }
}

#[test]
#[should_panic]
fn test_zero_workers_panics() {
    split_rows(10, 0);
}
