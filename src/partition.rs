/// One worker's assignment: a contiguous range of result rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRange {
    pub offset: usize,
    pub rows: usize,
}

impl RowRange {
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }
}

/// Split `total_rows` result rows across `workers` as evenly as possible.
///
/// Workers are indexed 1..=workers to match process ranks. Each gets
/// `total_rows / workers` rows, with the remainder spread one extra row at a
/// time over the lowest-ranked workers. Offsets are a running sum in rank
/// order, so the ranges are contiguous and cover exactly `[0, total_rows)`.
///
/// When `total_rows < workers` the trailing workers receive zero-row ranges;
/// they still take part in the full scatter/gather exchange.
///
/// # Panics
///
/// Panics if `workers` is zero. A coordinator-only topology is rejected
/// before partitioning ever happens.
pub fn split_rows(total_rows: usize, workers: usize) -> Vec<RowRange> {
    assert!(workers > 0, "partition requires at least one worker");

    let base = total_rows / workers;
    let extra = total_rows % workers;

    let mut plan = Vec::with_capacity(workers);
    let mut offset = 0;
    for index in 1..=workers {
        let rows = if index <= extra { base + 1 } else { base };
        plan.push(RowRange { offset, rows });
        offset += rows;
    }
    plan
}
