use std::io;
use std::time::Instant;

use clap::Parser;
use mpi::traits::*;

use scatter_matmul::transport::{MpiTransport, COORDINATOR_RANK};
use scatter_matmul::{report, Coordinator, Matrix, Worker};

/// Distributed dense matrix multiplication: rank 0 scatters row-blocks of A
/// and the full B to every other rank, then gathers and assembles the
/// product.
///
/// A is size x inner, B is inner x size, the result is size x size. Every
/// rank parses the same arguments, which is how workers learn their buffer
/// dimensions.
#[derive(Parser)]
struct Config {
    /// Result dimension N.
    #[arg(long, default_value_t = 20)]
    size: usize,

    /// Shared inner dimension M.
    #[arg(long, default_value_t = 32)]
    inner: usize,
}

fn main() {
    let config = Config::parse();

    let universe = mpi::initialize().expect("Failed to initialize MPI");
    let world = universe.world();
    let rank = world.rank();
    let world_size = world.size() as usize;
    let transport = MpiTransport::new(world);

    if rank == COORDINATOR_RANK {
        let coordinator = match Coordinator::new(transport, world_size) {
            Ok(coordinator) => coordinator,
            Err(e) => {
                eprintln!("[Coordinator] Error: {e}");
                eprintln!("Run under mpiexec with at least 2 processes.");
                std::process::exit(1);
            }
        };

        println!(
            "[Coordinator] Multiplying {}x{} by {}x{} across {} workers",
            config.size,
            config.inner,
            config.inner,
            config.size,
            coordinator.worker_count()
        );

        let a = Matrix::column_ramp(config.size, config.inner);
        let b = Matrix::column_ramp(config.inner, config.size);

        let start = Instant::now();
        let result = match coordinator.run_round(&a, &b) {
            Ok(result) => result,
            Err(e) => {
                eprintln!("[Coordinator] Error: {e}");
                std::process::exit(1);
            }
        };
        let elapsed = start.elapsed();

        let stdout = io::stdout();
        if let Err(e) = report::write_round_report(&mut stdout.lock(), &a, &b, &result, elapsed) {
            eprintln!("[Coordinator] Error writing report: {e}");
            std::process::exit(1);
        }
    } else {
        let worker = Worker::new(transport, rank, config.inner, config.size);
        if let Err(e) = worker.serve_round() {
            eprintln!("[Worker {}] Error: {e}", worker.rank());
            std::process::exit(1);
        }
    }
}
