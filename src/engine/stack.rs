// src/engine/stack.rs

//! Last-in-first-out container of pending work.
//!
//! The stack has no locking of its own. It is owned by a single run and only
//! mutated from that run's thread of control: directly by the executor loop
//! and through the [`Append`](crate::engine::Append) handle lent to the unit
//! that is currently executing.

use crate::errors::EmptyStackError;

/// Generic LIFO stack: the most recently pushed item is the next one out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkStack<T> {
    items: Vec<T>,
}

impl<T> WorkStack<T> {
    /// Build a stack from an initial sequence.
    ///
    /// The last element of `items` is the top of the stack. The vector is
    /// taken over as-is, no copy is made.
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Put `item` on top of the stack.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Remove and return the topmost item.
    ///
    /// This is destructive (a pop, not a peek). On an empty stack it returns
    /// [`EmptyStackError`] and leaves the stack untouched.
    pub fn top(&mut self) -> Result<T, EmptyStackError> {
        self.items.pop().ok_or(EmptyStackError)
    }
}

impl<T> Default for WorkStack<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> FromIterator<T> for WorkStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
