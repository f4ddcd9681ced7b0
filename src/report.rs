//! Human-readable rendering of a round's inputs, result, and timing.
//!
//! Kept out of the protocol path: the coordinator hands finished matrices to
//! whatever `io::Write` sink the caller supplies.

use std::io::{self, Write};
use std::time::Duration;

use crate::matrix::Matrix;

/// Write a labeled matrix as tab-separated rows.
pub fn write_matrix<W: Write>(out: &mut W, label: &str, matrix: &Matrix) -> io::Result<()> {
    writeln!(out, "{label}:")?;
    for row in 0..matrix.rows {
        let cells = &matrix.data[row * matrix.cols..(row + 1) * matrix.cols];
        let line = cells
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join("\t");
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Write the full round report: both inputs, the assembled product, and the
/// elapsed wall-clock time for scatter + compute + gather.
pub fn write_round_report<W: Write>(
    out: &mut W,
    a: &Matrix,
    b: &Matrix,
    result: &Matrix,
    elapsed: Duration,
) -> io::Result<()> {
    write_matrix(out, "Matrix A", a)?;
    writeln!(out)?;
    write_matrix(out, "Matrix B", b)?;
    writeln!(out)?;
    write_matrix(out, "Result", result)?;
    writeln!(out)?;
    writeln!(out, "Elapsed: {:.6}s", elapsed.as_secs_f64())
}
