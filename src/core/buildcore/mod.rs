pub use crate::core::{
    queue::Queue,
    log::{LogEntry, Logger, Op, Outcome},
};

/// Queue that records every operation in its own log
#[derive(Clone, Debug)]
pub struct TracedQueue<T> {
    queue: Queue<T>,
    logger: Logger<T>,
}

impl<T> Default for TracedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TracedQueue<T> {
    /// Create an empty queue with an empty log
    pub fn new() -> Self {
        Self {
            queue: Queue::new(),
            logger: Logger::new(),
        }
    }

    /// Get current queue state as (length, empty)
    pub fn queue_state(&self) -> (usize, bool) {
        (self.queue.len(), self.queue.is_empty())
    }

    /// Expose logs
    pub fn logs(&self) -> &[LogEntry<T>] {
        self.logger.entries()
    }

    /// Borrow the underlying queue
    pub fn queue(&self) -> &Queue<T> {
        &self.queue
    }

    pub fn into_parts(self) -> (Queue<T>, Logger<T>) {
        (self.queue, self.logger)
    }
}

impl<T: Clone> TracedQueue<T> {
    /// Enqueue with logging
    pub fn enqueue(&mut self, item: T) {
        self.queue.enqueue(item.clone());
        self.logger.log(Op::Enqueue, Some(item), Outcome::Present, self.queue.len());
    }

    /// Dequeue the head item with logging
    pub fn dequeue(&mut self) -> Option<T> {
        let item = self.queue.dequeue();
        let outcome = if item.is_some() { Outcome::Present } else { Outcome::Absent };
        self.logger.log(Op::Dequeue, item.clone(), outcome, self.queue.len());
        item
    }

    /// Peek at the head item with logging
    pub fn peek(&mut self) -> Option<T> {
        let item = self.queue.peek().cloned();
        let outcome = if item.is_some() { Outcome::Present } else { Outcome::Absent };
        self.logger.log(Op::Peek, item.clone(), outcome, self.queue.len());
        item
    }
}

impl<T: Clone + PartialEq> TracedQueue<T> {
    /// Homogeneity check with logging
    pub fn is_homogeneous(&mut self) -> bool {
        let verdict = self.queue.is_homogeneous();
        self.logger.log(Op::HomogeneityCheck, None, Outcome::Verdict(verdict), self.queue.len());
        verdict
    }
}
