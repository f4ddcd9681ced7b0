use crate::error::Error;
use crate::matrix::Matrix;
use crate::partition::{split_rows, RowRange};
use crate::protocol;
use crate::transport::{ChannelRole, Rank, Transport};

/// Rank-0 role: partitions A by rows, scatters work, gathers and assembles C.
pub struct Coordinator<T: Transport> {
    transport: T,
    workers: usize,
}

impl<T: Transport> Coordinator<T> {
    /// Create a coordinator for a topology of `world_size` processes.
    ///
    /// Fails before any message is sent if there are no workers to scatter
    /// to.
    pub fn new(transport: T, world_size: usize) -> Result<Self, Error> {
        if world_size < 2 {
            return Err(Error::Topology { size: world_size });
        }
        Ok(Coordinator {
            transport,
            workers: world_size - 1,
        })
    }

    pub fn worker_count(&self) -> usize {
        self.workers
    }

    /// Run one full round: partition, scatter, gather, assemble.
    ///
    /// Returns the fully assembled product or fails the round; a partial C
    /// is never exposed. The two phases are distinct synchronization points:
    /// every scatter completes before the first gather receive is posted.
    pub fn run_round(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, Error> {
        if a.cols != b.rows {
            return Err(Error::ShapeMismatch {
                left_rows: a.rows,
                left_cols: a.cols,
                right_rows: b.rows,
                right_cols: b.cols,
            });
        }

        let plan = split_rows(a.rows, self.workers);
        self.scatter(&plan, a, b)?;
        self.gather(a.rows, b.cols)
    }

    /// Send every worker its assignment header, its A row-block, and the
    /// full B matrix, in rank order.
    ///
    /// Zero-row workers get the same four messages with empty blocks; they
    /// stay in the exchange so the two-phase barrier shape never changes.
    fn scatter(&self, plan: &[RowRange], a: &Matrix, b: &Matrix) -> Result<(), Error> {
        for (range, rank) in plan.iter().zip(worker_ranks(self.workers)) {
            protocol::send_assignment(&self.transport, rank, ChannelRole::Scatter, *range)?;
            let block = a.row_block(range.offset, range.rows)?;
            self.transport.send(rank, ChannelRole::Scatter, block)?;
            self.transport.send(rank, ChannelRole::Scatter, &b.data)?;
        }
        Ok(())
    }

    /// Receive one reply per worker and place each block at its own offset.
    ///
    /// Replies are taken in rank order, but each one carries its offset and
    /// row count, so placement does not depend on that order. The round only
    /// completes once the received blocks cover the result exactly.
    fn gather(&self, result_rows: usize, result_cols: usize) -> Result<Matrix, Error> {
        let mut result = Matrix::new(result_rows, result_cols);
        let mut covered = 0;

        for rank in worker_ranks(self.workers) {
            let range = protocol::recv_assignment(&self.transport, rank, ChannelRole::Gather)?;
            let cells = protocol::recv_cells(
                &self.transport,
                rank,
                ChannelRole::Gather,
                range.rows * result_cols,
            )?;
            result.write_rows(range.offset, range.rows, &cells)?;
            covered += range.rows;
        }

        if covered != result_rows {
            return Err(Error::IncompleteRound {
                got: covered,
                expected: result_rows,
            });
        }
        Ok(result)
    }
}

fn worker_ranks(workers: usize) -> impl Iterator<Item = Rank> {
    1..=workers as Rank
}
