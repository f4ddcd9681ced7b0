//! Blocking point-to-point message passing between ranked processes.
//!
//! Both round-trip legs run between the same pair of endpoints, so rank alone
//! cannot tell coordinator-to-worker traffic apart from the replies. Every
//! exchange therefore names a [`ChannelRole`], which maps onto the transport's
//! message tag.

use crate::error::Error;

/// Process rank within the fixed topology. Rank 0 is always the coordinator.
pub type Rank = i32;

pub const COORDINATOR_RANK: Rank = 0;

/// Direction of an exchange between the coordinator and a worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelRole {
    /// Coordinator-to-worker: assignment and input data.
    Scatter,
    /// Worker-to-coordinator: computed result blocks.
    Gather,
}

impl ChannelRole {
    /// Message tag carried on the wire for this direction.
    pub fn tag(self) -> i32 {
        match self {
            ChannelRole::Scatter => 1,
            ChannelRole::Gather => 2,
        }
    }
}

/// Blocking point-to-point transport for fixed-width integer payloads.
///
/// `send` blocks until the transport accepts the payload; `recv_into` blocks
/// until the matching message from `source` with the given role arrives.
/// Zero-length payloads are legal and must be delivered like any other
/// message.
pub trait Transport {
    fn send(&self, dest: Rank, role: ChannelRole, payload: &[i32]) -> Result<(), Error>;

    fn recv_into(&self, source: Rank, role: ChannelRole, buf: &mut [i32]) -> Result<(), Error>;
}

#[cfg(feature = "mpi")]
pub use self::mpi_transport::MpiTransport;

#[cfg(feature = "mpi")]
mod mpi_transport {
    use mpi::traits::*;

    use super::{ChannelRole, Rank, Transport};
    use crate::error::Error;

    /// [`Transport`] backed by an MPI communicator.
    ///
    /// rsmpi surfaces MPI failures by aborting the job, which matches the
    /// fatal, no-retry policy of this protocol, so both operations here
    /// return `Ok` once the call completes.
    pub struct MpiTransport<C: Communicator> {
        world: C,
    }

    impl<C: Communicator> MpiTransport<C> {
        pub fn new(world: C) -> Self {
            MpiTransport { world }
        }
    }

    impl<C: Communicator> Transport for MpiTransport<C> {
        fn send(&self, dest: Rank, role: ChannelRole, payload: &[i32]) -> Result<(), Error> {
            self.world
                .process_at_rank(dest)
                .send_with_tag(payload, role.tag());
            Ok(())
        }

        fn recv_into(&self, source: Rank, role: ChannelRole, buf: &mut [i32]) -> Result<(), Error> {
            self.world
                .process_at_rank(source)
                .receive_into_with_tag(buf, role.tag());
            Ok(())
        }
    }
}
