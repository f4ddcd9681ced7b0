//! Wire protocol shared by both roles.
//!
//! One scatter exchange is four messages in fixed order: offset, row count,
//! the A row-block, the full B matrix. One gather exchange mirrors the first
//! three: offset, row count, result block. Scalars travel as single-element
//! slices; receivers must consume the fields in exactly this order.

use crate::error::Error;
use crate::partition::RowRange;
use crate::transport::{ChannelRole, Rank, Transport};

pub fn send_scalar<T: Transport>(
    transport: &T,
    dest: Rank,
    role: ChannelRole,
    value: i32,
) -> Result<(), Error> {
    transport.send(dest, role, &[value])
}

pub fn recv_scalar<T: Transport>(
    transport: &T,
    source: Rank,
    role: ChannelRole,
) -> Result<i32, Error> {
    let mut buf = [0i32; 1];
    transport.recv_into(source, role, &mut buf)?;
    Ok(buf[0])
}

/// Send a row-range assignment header: offset, then row count.
pub fn send_assignment<T: Transport>(
    transport: &T,
    dest: Rank,
    role: ChannelRole,
    range: RowRange,
) -> Result<(), Error> {
    send_scalar(transport, dest, role, range.offset as i32)?;
    send_scalar(transport, dest, role, range.rows as i32)
}

/// Receive a row-range assignment header in wire order.
pub fn recv_assignment<T: Transport>(
    transport: &T,
    source: Rank,
    role: ChannelRole,
) -> Result<RowRange, Error> {
    let offset = recv_scalar(transport, source, role)?;
    let rows = recv_scalar(transport, source, role)?;
    if offset < 0 || rows < 0 {
        return Err(Error::Transport {
            rank: source,
            reason: format!("negative assignment header: offset={offset}, rows={rows}"),
        });
    }
    Ok(RowRange {
        offset: offset as usize,
        rows: rows as usize,
    })
}

/// Receive a contiguous block of exactly `len` cells.
pub fn recv_cells<T: Transport>(
    transport: &T,
    source: Rank,
    role: ChannelRole,
    len: usize,
) -> Result<Vec<i32>, Error> {
    let mut cells = vec![0i32; len];
    transport.recv_into(source, role, &mut cells)?;
    Ok(cells)
}
