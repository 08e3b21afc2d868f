use std::collections::VecDeque;
use serde::{Serialize, Deserialize};

/// core queue structure: strict FIFO over a double-ended buffer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Create a new, empty queue
    pub fn new() -> Self {
        Self { items: VecDeque::new() }
    }

    /// Enqueue an item at the tail
    pub fn enqueue(&mut self, item: T) {
        let len_before = self.items.len();
        self.items.push_back(item);
        // -- post op assertion
        assert_eq!(self.items.len(), len_before + 1, "Queue length should grow by 1 after enqueue");
    }

    /// Dequeue the head item, `None` when empty
    pub fn dequeue(&mut self) -> Option<T> {
        let len_before = self.items.len();
        let result = self.items.pop_front();
        // -- post op assertion: queue size decreases if dequeue succeeded
        match result {
            Some(_) => assert_eq!(self.items.len(), len_before - 1, "Queue length should decrease by 1"),
            None => assert_eq!(self.items.len(), len_before, "Queue length unchanged when empty"),
        }
        result
    }

    /// Look at the head item without removing it
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// Get the current queue length
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate from head to tail
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: PartialEq> Queue<T> {
    /// True when every held item equals the head. Vacuously true when empty.
    pub fn is_homogeneous(&self) -> bool {
        let Some(first) = self.items.front() else {
            return true;
        };
        self.items.iter().skip(1).all(|item| item == first)
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}
