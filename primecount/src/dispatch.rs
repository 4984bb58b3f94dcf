//!
//! Dispatcher
//!
//! The single producer. Builds the queue, spawns the worker pool, streams
//! tokens from the input into fixed-size batches, and after the input is
//! exhausted closes the queue, joins the pool, and returns the total.
//!
//! If the input turns out to be malformed mid-stream the queue is still
//! closed and the pool still joined before the error is returned, so no
//! worker is ever left blocked.
//!

use std::io::BufRead;
use std::sync::Arc;

use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::input::Tokens;
use crate::pool::WorkerPool;
use crate::queue::BoundedBatchQueue;

/// Run the full pipeline over `input` and return the number of primes.
pub fn run_pipeline<R: BufRead>(
    input: R,
    config: &PipelineConfig,
) -> Result<u64, PipelineError> {
    config.validate()?;

    let queue = Arc::new(BoundedBatchQueue::new(config.queue_capacity));
    let pool = WorkerPool::spawn(Arc::clone(&queue), config.workers, config.batch_size)?;
    tracing::debug!(
        workers = config.workers,
        capacity = config.queue_capacity,
        batch_size = config.batch_size,
        "pipeline started"
    );

    let mut batch = Vec::with_capacity(config.batch_size);
    for token in Tokens::new(input) {
        let value = match token {
            Ok(value) => value,
            Err(e) => {
                queue.close();
                pool.join()?;
                return Err(e);
            }
        };

        batch.push(value);
        if batch.len() == config.batch_size {
            queue.enqueue_batch(&batch);
            batch.clear();
        }
    }

    // Final partial batch.
    if !batch.is_empty() {
        queue.enqueue_batch(&batch);
    }

    queue.close();
    tracing::debug!("input exhausted, queue closed");

    let total = pool.join()?;
    tracing::info!(total, "pipeline complete");
    Ok(total)
}
