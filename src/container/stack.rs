//! Stack struct definition
//!
//! A growable array with push and pop at the end. Elements below the top are
//! never visible to callers.

/// A last-in-first-out stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    /// Elements, bottom first; the last one is the top
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Create an empty stack
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create an empty stack with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Check if the stack holds no elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of elements on the stack
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Put `item` on top of the stack
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the top element, or `None` if the stack is empty
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Look at the top element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}
