//! In-memory blocking transport and a thread-per-rank round harness, so the
//! full scatter/compute/gather protocol runs under `cargo test` without an
//! MPI launcher.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Condvar, Mutex};
use std::thread;

use scatter_matmul::error::Error;
use scatter_matmul::matrix::Matrix;
use scatter_matmul::transport::{ChannelRole, Rank, Transport, COORDINATOR_RANK};
use scatter_matmul::{Coordinator, Worker};

type QueueKey = (Rank, Rank, i32);

/// Shared mailbox: one FIFO queue per (source, dest, tag) triple.
pub struct MessageHub {
    queues: Mutex<HashMap<QueueKey, VecDeque<Vec<i32>>>>,
    ready: Condvar,
}

impl MessageHub {
    pub fn new() -> Arc<Self> {
        Arc::new(MessageHub {
            queues: Mutex::new(HashMap::new()),
            ready: Condvar::new(),
        })
    }
}

/// One process's view of the hub.
pub struct LocalEndpoint {
    rank: Rank,
    hub: Arc<MessageHub>,
}

impl LocalEndpoint {
    pub fn new(hub: Arc<MessageHub>, rank: Rank) -> Self {
        LocalEndpoint { rank, hub }
    }
}

impl Transport for LocalEndpoint {
    fn send(&self, dest: Rank, role: ChannelRole, payload: &[i32]) -> Result<(), Error> {
        let mut queues = self.hub.queues.lock().unwrap();
        queues
            .entry((self.rank, dest, role.tag()))
            .or_default()
            .push_back(payload.to_vec());
        self.hub.ready.notify_all();
        Ok(())
    }

    fn recv_into(&self, source: Rank, role: ChannelRole, buf: &mut [i32]) -> Result<(), Error> {
        let mut queues = self.hub.queues.lock().unwrap();
        loop {
            let message = queues
                .get_mut(&(source, self.rank, role.tag()))
                .and_then(|queue| queue.pop_front());
            if let Some(message) = message {
                if message.len() != buf.len() {
                    return Err(Error::Transport {
                        rank: source,
                        reason: format!(
                            "expected {} cells, message carries {}",
                            buf.len(),
                            message.len()
                        ),
                    });
                }
                buf.copy_from_slice(&message);
                return Ok(());
            }
            queues = self.hub.ready.wait(queues).unwrap();
        }
    }
}

/// Run one complete round with `workers` worker threads and the coordinator
/// on the calling thread. Panics if any worker fails its round.
pub fn run_round_local(a: &Matrix, b: &Matrix, workers: usize) -> Result<Matrix, Error> {
    let hub = MessageHub::new();
    let inner = a.cols;
    let out_cols = b.cols;

    let mut handles = Vec::with_capacity(workers);
    for rank in 1..=workers as Rank {
        let endpoint = LocalEndpoint::new(Arc::clone(&hub), rank);
        handles.push(thread::spawn(move || {
            Worker::new(endpoint, rank, inner, out_cols).serve_round()
        }));
    }

    let coordinator = Coordinator::new(
        LocalEndpoint::new(Arc::clone(&hub), COORDINATOR_RANK),
        workers + 1,
    )?;
    let result = coordinator.run_round(a, b);

    for handle in handles {
        handle.join().expect("worker thread panicked")?;
    }
    result
}
