//!
//! Token Input
//!
//! Reads whitespace-separated decimal integers from any buffered stream
//! until end-of-stream. This is the external collaborator that keeps
//! malformed data away from the queue: every token either parses as an
//! i32 or surfaces as a typed error with its 1-based position.
//!

use std::collections::VecDeque;
use std::io::BufRead;

use crate::error::PipelineError;

pub struct Tokens<R: BufRead> {
    reader: R,
    pending: VecDeque<String>,
    position: usize,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            position: 0,
        }
    }
}

impl<R: BufRead> Iterator for Tokens<R> {
    type Item = Result<i32, PipelineError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                self.position += 1;
                let position = self.position;
                return Some(token.parse::<i32>().map_err(|_| {
                    PipelineError::BadToken { token, position }
                }));
            }

            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {
                    self.pending
                        .extend(line.split_whitespace().map(String::from));
                }
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}
