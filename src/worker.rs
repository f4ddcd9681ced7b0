use crate::error::Error;
use crate::matrix::Matrix;
use crate::protocol;
use crate::transport::{ChannelRole, Rank, Transport, COORDINATOR_RANK};

/// Non-zero-rank role: computes one contiguous row-block of the product.
///
/// Buffer sizes come from the shared configuration, not the wire: a worker
/// must already know the inner dimension and the result width to post its
/// receives.
pub struct Worker<T: Transport> {
    transport: T,
    rank: Rank,
    /// Columns of A == rows of B.
    inner: usize,
    /// Columns of B == columns of the result block.
    out_cols: usize,
}

impl<T: Transport> Worker<T> {
    pub fn new(transport: T, rank: Rank, inner: usize, out_cols: usize) -> Self {
        Worker {
            transport,
            rank,
            inner,
            out_cols,
        }
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Serve exactly one round, then return.
    ///
    /// Receives, in wire order, the assignment header, the A row-block, and
    /// the full B; multiplies; replies with the header and the result block.
    /// A zero-row assignment flows through unchanged: the block receives and
    /// the reply are all empty, and no arithmetic runs.
    pub fn serve_round(&self) -> Result<(), Error> {
        let range =
            protocol::recv_assignment(&self.transport, COORDINATOR_RANK, ChannelRole::Scatter)?;

        let a_cells = protocol::recv_cells(
            &self.transport,
            COORDINATOR_RANK,
            ChannelRole::Scatter,
            range.rows * self.inner,
        )?;
        let b_cells = protocol::recv_cells(
            &self.transport,
            COORDINATOR_RANK,
            ChannelRole::Scatter,
            self.inner * self.out_cols,
        )?;

        let a_block = Matrix::from_vec(a_cells, range.rows, self.inner)?;
        let b = Matrix::from_vec(b_cells, self.inner, self.out_cols)?;
        let block = a_block.multiply(&b)?;

        protocol::send_assignment(&self.transport, COORDINATOR_RANK, ChannelRole::Gather, range)?;
        self.transport
            .send(COORDINATOR_RANK, ChannelRole::Gather, &block.data)
    }
}
