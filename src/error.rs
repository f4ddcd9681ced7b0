use thiserror::Error;

use crate::transport::Rank;

/// Failures that abort a multiplication round.
///
/// There is no recoverable class here: the protocol is all-or-nothing, so
/// every variant is fatal to the round that raised it.
#[derive(Debug, Error)]
pub enum Error {
    /// Fewer than two processes: there is nobody to scatter work to.
    #[error("need at least 2 processes (1 coordinator + 1 worker), got {size}")]
    Topology { size: usize },

    /// A send or receive failed at the messaging layer.
    #[error("transport failure with rank {rank}: {reason}")]
    Transport { rank: Rank, reason: String },

    /// Operand shapes do not admit a multiplication.
    #[error("matrix dimensions incompatible: {left_rows}x{left_cols} * {right_rows}x{right_cols}")]
    ShapeMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    /// Cell data whose length does not fill the declared shape.
    #[error("{len} cells do not fill a {rows}x{cols} matrix")]
    CellCount {
        len: usize,
        rows: usize,
        cols: usize,
    },

    /// Cell access outside the matrix.
    #[error("index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    CellOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// A row-block does not fit inside the matrix it targets.
    #[error("row block [{offset}, {end}) out of bounds for {rows} rows")]
    RowBlockOutOfBounds {
        offset: usize,
        end: usize,
        rows: usize,
    },

    /// The gathered blocks do not cover the result exactly.
    #[error("gathered blocks cover {got} rows, expected {expected}")]
    IncompleteRound { got: usize, expected: usize },
}
