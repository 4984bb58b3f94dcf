//!
//! Worker Pool
//!
//! N consumer threads draining the bounded queue in batches. Each worker
//! tests every dequeued integer for primality and keeps a private count;
//! no state is shared between workers during the parallel phase. The
//! counts travel back as thread results and are summed after all joins,
//! so the total is never touched concurrently.
//!

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::error::PipelineError;
use crate::primality::is_prime;
use crate::queue::BoundedBatchQueue;

pub struct WorkerPool {
    workers: Vec<JoinHandle<u64>>,
}

impl WorkerPool {
    /// Spawn `workers` consumer threads against the queue. Each dequeues
    /// up to `batch_size` integers per transfer.
    pub fn spawn(
        queue: Arc<BoundedBatchQueue>,
        workers: usize,
        batch_size: usize,
    ) -> Result<Self, PipelineError> {
        if workers == 0 {
            return Err(PipelineError::InvalidConfig {
                reason: "workers must be > 0".to_string(),
            });
        }

        let mut handles = Vec::with_capacity(workers);
        for worker_id in 0..workers {
            let queue = Arc::clone(&queue);
            let handle = thread::Builder::new()
                .name(format!("prime-worker-{}", worker_id))
                .spawn(move || worker_loop(worker_id, &queue, batch_size))?;
            handles.push(handle);
        }

        Ok(Self { workers: handles })
    }

    /// Wait for every worker to finish and sum their counts.
    ///
    /// All threads are joined even if one panicked; the first panic is
    /// reported after the rest have been reaped.
    pub fn join(self) -> Result<u64, PipelineError> {
        let mut total = 0u64;
        let mut panicked = None;

        for (worker_id, handle) in self.workers.into_iter().enumerate() {
            match handle.join() {
                Ok(count) => total += count,
                Err(_) => {
                    panicked.get_or_insert(worker_id);
                }
            }
        }

        match panicked {
            Some(worker) => Err(PipelineError::WorkerPanicked { worker }),
            None => Ok(total),
        }
    }
}

fn worker_loop(worker_id: usize, queue: &BoundedBatchQueue, batch_size: usize) -> u64 {
    let mut local_primes = 0u64;

    loop {
        let (batch, exhausted) = queue.dequeue_batch(batch_size);
        if exhausted {
            break;
        }
        local_primes += batch.iter().filter(|&&n| is_prime(n)).count() as u64;
    }

    tracing::debug!(worker = worker_id, primes = local_primes, "worker drained");
    local_primes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_pool(values: &[i32], workers: usize, capacity: usize, batch_size: usize) -> u64 {
        let queue = Arc::new(BoundedBatchQueue::new(capacity));
        let pool = WorkerPool::spawn(Arc::clone(&queue), workers, batch_size).unwrap();

        for chunk in values.chunks(batch_size) {
            queue.enqueue_batch(chunk);
        }
        queue.close();

        pool.join().unwrap()
    }

    #[test]
    fn test_counts_match_sequential() {
        let values: Vec<i32> = (0..500).collect();
        let expected = values.iter().filter(|&&n| is_prime(n)).count() as u64;

        for workers in [1, 2, 4, 8] {
            assert_eq!(run_pool(&values, workers, 32, 8), expected);
        }
    }

    #[test]
    fn test_empty_input_yields_zero() {
        assert_eq!(run_pool(&[], 4, 16, 4), 0);
    }

    #[test]
    fn test_close_before_spawn_terminates_workers() {
        let queue = Arc::new(BoundedBatchQueue::new(16));
        queue.close();

        let pool = WorkerPool::spawn(Arc::clone(&queue), 4, 4).unwrap();
        assert_eq!(pool.join().unwrap(), 0);
    }

    #[test]
    fn test_zero_workers_rejected() {
        let queue = Arc::new(BoundedBatchQueue::new(16));
        assert!(WorkerPool::spawn(queue, 0, 4).is_err());
    }

    #[test]
    fn test_tiny_queue_large_input() {
        // Capacity 1 forces the producer to block on every item.
        let values: Vec<i32> = (1..=100).collect();
        let expected = values.iter().filter(|&&n| is_prime(n)).count() as u64;
        assert_eq!(run_pool(&values, 3, 1, 1), expected);
    }
}
