pub mod coordinator;
pub mod error;
pub mod matrix;
pub mod partition;
pub mod protocol;
pub mod report;
pub mod transport;
pub mod worker;

pub use coordinator::Coordinator;
pub use error::Error;
pub use matrix::Matrix;
pub use worker::Worker;
