//!
//! Bounded Batch Queue
//!
//! A fixed-capacity circular buffer of integers handed between one
//! producer and many consumers in batches. One mutex guards all state;
//! two condition variables carry the "space freed" and "data arrived"
//! signals. Closing the queue is a one-way broadcast that lets every
//! idle consumer observe termination.
//!
//! ## Protocol
//!
//! - `enqueue_batch` blocks until the whole batch fits, then admits it
//!   atomically. With a single producer this keeps batches contiguous.
//! - `dequeue_batch` blocks only while the queue is empty and open. It
//!   takes what is currently available up to the cap; it never waits
//!   mid-batch for more data to arrive.
//! - `close` sets the closed flag and wakes all consumers.
//!
//! Draining takes priority over termination: a call that returns items
//! never reports exhaustion, even when the queue is already closed. The
//! terminal signal is exactly an empty batch with `exhausted = true`.
//!

use std::sync::{Condvar, Mutex};

struct State {
    buf: Box<[i32]>,
    head: usize,
    tail: usize,
    len: usize,
    closed: bool,
}

pub struct BoundedBatchQueue {
    state: Mutex<State>,
    not_full: Condvar,
    not_empty: Condvar,
    capacity: usize,
}

impl BoundedBatchQueue {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "queue capacity must be > 0");
        Self {
            state: Mutex::new(State {
                buf: vec![0; capacity].into_boxed_slice(),
                head: 0,
                tail: 0,
                len: 0,
                closed: false,
            }),
            not_full: Condvar::new(),
            not_empty: Condvar::new(),
            capacity,
        }
    }

    /// Insert every item of the batch, blocking until the queue has
    /// enough free capacity to admit the batch whole.
    ///
    /// The batch must not exceed the queue capacity, and the queue must
    /// not have been closed; with a single producer both hold by
    /// construction.
    pub fn enqueue_batch(&self, items: &[i32]) {
        assert!(
            items.len() <= self.capacity,
            "batch of {} exceeds queue capacity {}",
            items.len(),
            self.capacity
        );

        let mut state = self.state.lock().unwrap();
        debug_assert!(!state.closed, "enqueue after close");

        while self.capacity - state.len < items.len() {
            state = self.not_full.wait(state).unwrap();
        }

        for &item in items {
            let tail = state.tail;
            state.buf[tail] = item;
            state.tail = (tail + 1) % self.capacity;
        }
        state.len += items.len();

        // One batch can satisfy several idle consumers.
        self.not_empty.notify_all();
    }

    /// Remove up to `max_items` integers, blocking only while the queue
    /// is empty and still open.
    ///
    /// Returns the drained items and the `exhausted` flag. The flag is
    /// true only for an empty take on a closed queue; that pair is the
    /// terminal signal and consumers must stop looping on it.
    pub fn dequeue_batch(&self, max_items: usize) -> (Vec<i32>, bool) {
        let mut state = self.state.lock().unwrap();

        while state.len == 0 && !state.closed {
            state = self.not_empty.wait(state).unwrap();
        }

        let take = max_items.min(state.len);
        let mut items = Vec::with_capacity(take);
        for _ in 0..take {
            let head = state.head;
            items.push(state.buf[head]);
            state.head = (head + 1) % self.capacity;
        }
        state.len -= take;

        if take > 0 {
            // Single producer, so one wake is enough.
            self.not_full.notify_one();
        }

        let exhausted = items.is_empty() && state.closed;
        (items, exhausted)
    }

    /// Mark the queue closed and wake every blocked consumer. One-way;
    /// the flag never reverts.
    pub fn close(&self) {
        let mut state = self.state.lock().unwrap();
        state.closed = true;
        self.not_empty.notify_all();
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().len
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
