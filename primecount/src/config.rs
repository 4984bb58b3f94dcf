//!
//! Pipeline Configuration
//!
//! Queue capacity, transfer batch size, and worker count. All three are
//! fixed at construction time and immutable for the run. The worker count
//! defaults to the number of available CPU cores.
//!

use std::thread;

use crate::error::PipelineError;

pub const DEFAULT_QUEUE_CAPACITY: usize = 1024;
pub const DEFAULT_BATCH_SIZE: usize = 400;

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Maximum number of integers the queue holds at once
    pub queue_capacity: usize,

    /// Number of integers moved per enqueue/dequeue transfer
    pub batch_size: usize,

    /// Number of consumer threads
    pub workers: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            batch_size: DEFAULT_BATCH_SIZE,
            workers: default_workers(),
        }
    }
}

impl PipelineConfig {
    /// Check the configuration before any thread is spawned.
    ///
    /// A batch larger than the queue could never be admitted whole, so
    /// `batch_size <= queue_capacity` is required.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.queue_capacity == 0 {
            return Err(PipelineError::InvalidConfig {
                reason: "queue_capacity must be > 0".to_string(),
            });
        }
        if self.batch_size == 0 {
            return Err(PipelineError::InvalidConfig {
                reason: "batch_size must be > 0".to_string(),
            });
        }
        if self.batch_size > self.queue_capacity {
            return Err(PipelineError::InvalidConfig {
                reason: format!(
                    "batch_size ({}) must not exceed queue_capacity ({})",
                    self.batch_size, self.queue_capacity
                ),
            });
        }
        if self.workers == 0 {
            return Err(PipelineError::InvalidConfig {
                reason: "workers must be > 0".to_string(),
            });
        }
        Ok(())
    }
}

fn default_workers() -> usize {
    thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}
