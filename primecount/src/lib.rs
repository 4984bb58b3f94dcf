//!
//! primecount - Concurrent Primes Counter
//!
//! Counts how many integers in a stream are prime, using a fixed pool of
//! worker threads fed by a single producer through a bounded concurrent
//! queue.
//!
//! ## Pipeline
//!
//! Dispatcher -> BoundedBatchQueue -> WorkerPool -> is_prime, with the
//! per-worker counts summed after all workers have joined:
//! - `queue` - bounded circular buffer with blocking batch transfers and
//!   a broadcast close protocol
//! - `pool` - consumer threads, each with a private count returned as
//!   its thread result
//! - `primality` - pure, reentrant trial-division test
//! - `input` - token reader keeping malformed data away from the queue
//! - `dispatch` - the producer loop tying the pieces together
//!
//! ## Guarantees
//!
//! FIFO delivery per item, no item lost or duplicated, bounded memory,
//! and blocking (never spinning) suspension on both sides of the queue.
//!

pub mod config;
pub mod dispatch;
pub mod error;
pub mod input;
pub mod pool;
pub mod primality;
pub mod queue;

pub use config::{PipelineConfig, DEFAULT_BATCH_SIZE, DEFAULT_QUEUE_CAPACITY};
pub use dispatch::run_pipeline;
pub use error::PipelineError;
pub use input::Tokens;
pub use pool::WorkerPool;
pub use primality::is_prime;
pub use queue::BoundedBatchQueue;
