//! The FIFO and LIFO containers the tree uses for its traversals.
//!
//! Both follow the textbook contract: removing from an empty container is an
//! error ([`CollectionError`]) rather than a `None`, since the tree always
//! checks for emptiness first and reaching the error means the tree is broken.

use std::collections::VecDeque;

use crate::error::CollectionError;

/// A first-in, first-out queue.
///
/// # Examples
///
/// ```
/// use ordered_tree::{CollectionError, Queue};
///
/// let mut queue = Queue::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
///
/// assert_eq!(queue.dequeue(), Ok(1));
/// assert_eq!(queue.dequeue(), Ok(2));
/// assert_eq!(queue.dequeue(), Err(CollectionError::EmptyQueue));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Generates a new, empty `Queue`.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Adds `item` to the back of the queue.
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes and returns the item at the front of the queue.
    pub fn dequeue(&mut self) -> Result<T, CollectionError> {
        self.items.pop_front().ok_or(CollectionError::EmptyQueue)
    }

    /// Returns the item at the front of the queue without removing it.
    pub fn peek(&self) -> Result<&T, CollectionError> {
        self.items.front().ok_or(CollectionError::EmptyQueue)
    }

    /// Returns `true` if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of queued items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Drops every queued item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates from front to back without dequeuing.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter()
    }

    /// Consumes the queue, returning its items from front to back.
    pub fn into_vec(self) -> Vec<T> {
        self.items.into()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = std::collections::vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// A last-in, first-out stack.
///
/// # Examples
///
/// ```
/// use ordered_tree::{CollectionError, Stack};
///
/// let mut stack = Stack::new();
/// stack.push('a');
/// stack.push('b');
///
/// assert_eq!(stack.top(), Ok(&'b'));
/// assert_eq!(stack.pop(), Ok('b'));
/// assert_eq!(stack.pop(), Ok('a'));
/// assert_eq!(stack.pop(), Err(CollectionError::EmptyStack));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Generates a new, empty `Stack`.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Pushes `item` onto the top of the stack.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the top item.
    pub fn pop(&mut self) -> Result<T, CollectionError> {
        self.items.pop().ok_or(CollectionError::EmptyStack)
    }

    /// Returns the top item without removing it.
    pub fn top(&self) -> Result<&T, CollectionError> {
        self.items.last().ok_or(CollectionError::EmptyStack)
    }

    /// Returns `true` if nothing is on the stack.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items on the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}
