//! An ordered BST. Values are placed by a comparator chosen when the tree is
//! built, and the tree is never rebalanced.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.get(&1), None);
//! assert_eq!(tree.min(), None);
//!
//! tree.add(2);
//! tree.add(1);
//! tree.add(3);
//! assert_eq!(tree.get(&1), Some(&1));
//! assert_eq!((tree.min(), tree.max()), (Some(&1), Some(&3)));
//!
//! // Equal values are kept, not overwritten.
//! tree.add(2);
//! assert_eq!(tree.size(), 4);
//!
//! assert!(tree.remove(&2));
//! assert!(tree.contains(&2));
//! assert!(tree.remove(&2));
//! assert!(!tree.contains(&2));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use tracing::trace;

use crate::collections::{Queue, Stack};
use crate::util::{natural_order, NaturalOrder};

/// Message for popping a container that was checked to be non-empty. Every
/// walk in this module tests `is_empty` right before removing, so the
/// container's "empty" error can't surface; `test_walks_never_pop_empty`
/// drives each walk over the shapes where that matters.
const CHECKED_NON_EMPTY: &str = "container was checked to be non-empty before removing from it";

/// A Binary Search Tree ordered by the comparator `C`.
///
/// For every node, the values in its left subtree compare less than or equal to
/// it and the values in its right subtree compare strictly greater. Adding a
/// value equal to one already present therefore puts it on the left; nothing is
/// overwritten.
///
/// Lookups stop at the first node that compares equal to the target, so when
/// duplicates are stored [`get`][OrderedTree::get] and
/// [`remove`][OrderedTree::remove] act on one of them with no guarantee which.
/// Two values that compare equal are indistinguishable to the tree even if
/// they carry different data beyond the comparator's key.
pub struct OrderedTree<T, C = NaturalOrder<T>> {
    root: Link<T>,
    comparator: C,
}

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Removes this node from its subtree, returning whatever should take its
    /// place.
    fn remove(mut self: Box<Self>) -> Link<T> {
        match (self.left.take(), self.right.take()) {
            (None, right) => {
                trace!("removed node had no left child");
                right
            }
            (left, None) => {
                trace!("removed node had no right child");
                left
            }
            // With two children we promote this node's predecessor. That is, the
            // largest value in this node's left subtree. The predecessor never has
            // a right child so detaching it is one of the simple cases above.
            (Some(left), right) => {
                trace!("removed node had two children, promoting its predecessor");
                let (predecessor, left) = left.take_rightmost();
                self.value = predecessor;
                self.left = left;
                self.right = right;
                Some(self)
            }
        }
    }

    /// Returns the value of the rightmost node in this subtree and the subtree
    /// without that node.
    fn take_rightmost(mut self: Box<Self>) -> (T, Link<T>) {
        match self.right.take() {
            None => {
                let Node { value, left, .. } = *self;
                (value, left)
            }
            Some(right) => {
                let (value, right) = right.take_rightmost();
                self.right = right;
                (value, Some(self))
            }
        }
    }
}

impl<T: Ord> OrderedTree<T> {
    /// Generates a new, empty `OrderedTree` that uses the natural ordering of `T`.
    pub fn new() -> Self {
        Self::with_comparator(natural_order())
    }
}

impl<T: Ord> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> Drop for OrderedTree<T, C> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, C> OrderedTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Generates a new, empty `OrderedTree` ordered by `comparator`, which must be
    /// a total order over `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{OrderedTree, Queue};
    ///
    /// let mut tree = OrderedTree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// tree.extend(vec![1, 3, 2]);
    ///
    /// let mut values = Queue::new();
    /// tree.in_order(&mut values);
    /// assert_eq!(values.into_vec(), [3, 2, 1]);
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            comparator,
        }
    }

    /// Returns `true` if a value comparing equal to `target` is in the tree.
    pub fn contains(&self, target: &T) -> bool {
        self.get(target).is_some()
    }

    /// Potentially finds a value comparing equal to `target`. If no such value is
    /// stored, `None` is returned.
    pub fn get(&self, target: &T) -> Option<&T> {
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            link = match (self.comparator)(target, &node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            };
        }

        None
    }

    /// Adds `value` to the tree. This always succeeds, including for values equal
    /// to one already stored, so it always returns `true`.
    pub fn add(&mut self, value: T) -> bool {
        let mut depth = 1;
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match (self.comparator)(&value, &node.value) {
                Ordering::Greater => &mut node.right,
                Ordering::Less | Ordering::Equal => &mut node.left,
            };
            depth += 1;
        }
        *link = Some(Box::new(Node::new(value)));
        trace!(depth, "added value");

        true
    }

    /// Removes a value comparing equal to `target`. Returns whether one was found.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree: OrderedTree<_> = vec![2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.remove(&2));
    /// assert!(!tree.remove(&2));
    /// assert_eq!(tree.size(), 2);
    /// ```
    pub fn remove(&mut self, target: &T) -> bool {
        let (root, removed) = Self::remove_from(self.root.take(), target, &self.comparator);
        self.root = root;
        trace!(removed, "remove finished");

        removed
    }

    /// Removes `target` from the subtree at `link`, returning the rebuilt subtree
    /// and whether anything was removed.
    fn remove_from(link: Link<T>, target: &T, comparator: &C) -> (Link<T>, bool) {
        match link {
            None => (None, false),
            Some(mut node) => match comparator(target, &node.value) {
                Ordering::Less => {
                    let (left, removed) = Self::remove_from(node.left.take(), target, comparator);
                    node.left = left;
                    (Some(node), removed)
                }
                Ordering::Greater => {
                    let (right, removed) =
                        Self::remove_from(node.right.take(), target, comparator);
                    node.right = right;
                    (Some(node), removed)
                }
                Ordering::Equal => (node.remove(), true),
            },
        }
    }
}

impl<T, C> OrderedTree<T, C> {
    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// A linked tree never runs out of room.
    pub fn is_full(&self) -> bool {
        false
    }

    /// A read-only handle to the root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.root.as_deref().map(|node| NodeRef { node })
    }

    /// The smallest value under the tree's comparator (the leftmost one).
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }

        Some(&node.value)
    }

    /// The largest value under the tree's comparator (the rightmost one).
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }

        Some(&node.value)
    }

    /// Counts the values in the tree recursively.
    ///
    /// This recurses once per level. For trees that may have degenerated into
    /// long chains prefer [`size_iterative`][OrderedTree::size_iterative].
    pub fn size(&self) -> usize {
        self.root().map_or(0, |root| root.size())
    }

    /// Counts the values in the tree using an explicit stack.
    pub fn size_iterative(&self) -> usize {
        let mut count = 0;
        let mut stack = Stack::new();
        if let Some(root) = self.root.as_deref() {
            stack.push(root);
        }

        while !stack.is_empty() {
            let node = stack.pop().expect(CHECKED_NON_EMPTY);
            count += 1;
            if let Some(left) = node.left.as_deref() {
                stack.push(left);
            }
            if let Some(right) = node.right.as_deref() {
                stack.push(right);
            }
        }

        count
    }

    /// The number of levels in the tree. An empty tree has a depth of 0 and a
    /// lone root has a depth of 1.
    pub fn depth(&self) -> usize {
        self.root().map_or(0, |root| root.depth())
    }

    /// Iterates over the values in sorted (in-order) order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref())
    }

    /// Enqueues every value onto `sink` in pre-order: a node, then its left
    /// subtree, then its right subtree.
    pub fn pre_order(&self, sink: &mut Queue<T>)
    where
        T: Clone,
    {
        let mut stack = Stack::new();
        if let Some(root) = self.root.as_deref() {
            stack.push(root);
        }

        while !stack.is_empty() {
            let node = stack.pop().expect(CHECKED_NON_EMPTY);
            sink.enqueue(node.value.clone());
            // Right first so the left subtree is popped first.
            if let Some(right) = node.right.as_deref() {
                stack.push(right);
            }
            if let Some(left) = node.left.as_deref() {
                stack.push(left);
            }
        }
    }

    /// Enqueues every value onto `sink` in order: a node's left subtree, then the
    /// node, then its right subtree. The values come out sorted.
    pub fn in_order(&self, sink: &mut Queue<T>)
    where
        T: Clone,
    {
        sink.extend(self.iter().cloned());
    }

    /// Enqueues every value onto `sink` in post-order: a node's left subtree, then
    /// its right subtree, then the node.
    pub fn post_order(&self, sink: &mut Queue<T>)
    where
        T: Clone,
    {
        // Walk (node, right, left) and reverse it.
        let mut stack = Stack::new();
        let mut reversed = Stack::new();
        if let Some(root) = self.root.as_deref() {
            stack.push(root);
        }

        while !stack.is_empty() {
            let node = stack.pop().expect(CHECKED_NON_EMPTY);
            reversed.push(node);
            if let Some(left) = node.left.as_deref() {
                stack.push(left);
            }
            if let Some(right) = node.right.as_deref() {
                stack.push(right);
            }
        }

        while !reversed.is_empty() {
            let node = reversed.pop().expect(CHECKED_NON_EMPTY);
            sink.enqueue(node.value.clone());
        }
    }

    /// Iterates over the values level by level, left to right. Each call walks
    /// the tree afresh.
    pub fn breadth_first(&self) -> BreadthFirst<'_, T> {
        let mut queue = Queue::new();
        queue.extend(self.root.as_deref());
        BreadthFirst { queue }
    }

    /// Like [`breadth_first`][OrderedTree::breadth_first] but every value is
    /// followed by a [`LevelMark::NoLeft`] and/or [`LevelMark::NoRight`] for each
    /// child slot that is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{LevelMark, OrderedTree};
    ///
    /// let tree: OrderedTree<_> = vec![2, 3].into_iter().collect();
    /// let marks: Vec<_> = tree.breadth_first_marked().collect();
    ///
    /// assert_eq!(
    ///     marks,
    ///     [
    ///         LevelMark::Value(&2),
    ///         LevelMark::NoLeft,
    ///         LevelMark::Value(&3),
    ///         LevelMark::NoLeft,
    ///         LevelMark::NoRight,
    ///     ]
    /// );
    /// ```
    pub fn breadth_first_marked(&self) -> BreadthFirstMarked<'_, T> {
        let mut nodes = Queue::new();
        nodes.extend(self.root.as_deref());
        BreadthFirstMarked {
            nodes,
            pending: Queue::new(),
        }
    }

    /// Drops every value. Nodes are freed one at a time so a degenerate tree
    /// doesn't recurse once per node while dropping.
    pub fn clear(&mut self) {
        let mut stack = Stack::new();
        if let Some(root) = self.root.take() {
            stack.push(root);
        }

        while !stack.is_empty() {
            let mut node = stack.pop().expect(CHECKED_NON_EMPTY);
            if let Some(left) = node.left.take() {
                stack.push(left);
            }
            if let Some(right) = node.right.take() {
                stack.push(right);
            }
        }
    }
}

impl<T, C> fmt::Debug for OrderedTree<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, C> Extend<T> for OrderedTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for OrderedTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T, C> IntoIterator for &'a OrderedTree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A read-only view of one node: its value and its children.
pub struct NodeRef<'a, T> {
    node: &'a Node<T>,
}

/// Manual implementations of `Clone` and `Copy` so we don't require `T: Clone`
/// to copy a reference.
impl<'a, T> Clone for NodeRef<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<'a, T> Copy for NodeRef<'a, T> {}

impl<'a, T> NodeRef<'a, T> {
    /// The value stored in this node.
    pub fn value(&self) -> &'a T {
        &self.node.value
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<NodeRef<'a, T>> {
        self.node.left.as_deref().map(|node| NodeRef { node })
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<NodeRef<'a, T>> {
        self.node.right.as_deref().map(|node| NodeRef { node })
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.node.left.is_none() && self.node.right.is_none()
    }

    /// Number of values in the subtree rooted here, counted recursively.
    pub fn size(&self) -> usize {
        1 + self.left().map_or(0, |left| left.size()) + self.right().map_or(0, |right| right.size())
    }

    /// Number of levels in the subtree rooted here, found by expanding one level
    /// at a time until a level has no nodes.
    pub fn depth(&self) -> usize {
        let mut levels = 0;
        let mut frontier = vec![self.node];
        while !frontier.is_empty() {
            frontier = frontier
                .into_iter()
                .flat_map(|node| node.left.as_deref().into_iter().chain(node.right.as_deref()))
                .collect();
            levels += 1;
        }

        levels
    }
}

impl<'a, T> fmt::Debug for NodeRef<'a, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("value", self.value())
            .field("left", &self.left().map(|left| left.value()))
            .field("right", &self.right().map(|right| right.value()))
            .finish()
    }
}

/// One entry of a level-by-level listing. See
/// [`OrderedTree::breadth_first_marked`] and
/// [`TreeRenderer::render_levels`][crate::TreeRenderer::render_levels].
#[derive(Debug, PartialEq, Eq)]
pub enum LevelMark<'a, T> {
    /// A node's value.
    Value(&'a T),
    /// The preceding node has no left child.
    NoLeft,
    /// The preceding node has no right child.
    NoRight,
    /// Everything after this belongs to the next level down.
    NextLevel,
}

impl<'a, T> Clone for LevelMark<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<'a, T> Copy for LevelMark<'a, T> {}

impl<'a, T> fmt::Display for LevelMark<'a, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => fmt::Display::fmt(value, f),
            Self::NoLeft => f.write_str("no left"),
            Self::NoRight => f.write_str("no right"),
            Self::NextLevel => f.write_str("next level"),
        }
    }
}

/// In-order iterator over an [`OrderedTree`]'s values.
pub struct Iter<'a, T> {
    // Nodes whose left subtrees have been visited but which haven't been yielded.
    stack: Stack<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self {
            stack: Stack::new(),
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Option<&'a Node<T>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.stack.is_empty() {
            return None;
        }

        let node = self.stack.pop().expect(CHECKED_NON_EMPTY);
        self.push_left_spine(node.right.as_deref());
        Some(&node.value)
    }
}

/// Level-order iterator over an [`OrderedTree`]'s values.
pub struct BreadthFirst<'a, T> {
    queue: Queue<&'a Node<T>>,
}

impl<'a, T> Iterator for BreadthFirst<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.queue.is_empty() {
            return None;
        }

        let node = self.queue.dequeue().expect(CHECKED_NON_EMPTY);
        self.queue.extend(node.left.as_deref());
        self.queue.extend(node.right.as_deref());
        Some(&node.value)
    }
}

/// Level-order iterator that also reports empty child slots. Created by
/// [`OrderedTree::breadth_first_marked`].
pub struct BreadthFirstMarked<'a, T> {
    nodes: Queue<&'a Node<T>>,
    pending: Queue<LevelMark<'a, T>>,
}

impl<'a, T> Iterator for BreadthFirstMarked<'a, T> {
    type Item = LevelMark<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pending.is_empty() {
            if self.nodes.is_empty() {
                return None;
            }

            let node = self.nodes.dequeue().expect(CHECKED_NON_EMPTY);
            self.pending.enqueue(LevelMark::Value(&node.value));
            match node.left.as_deref() {
                Some(left) => self.nodes.enqueue(left),
                None => self.pending.enqueue(LevelMark::NoLeft),
            }
            match node.right.as_deref() {
                Some(right) => self.nodes.enqueue(right),
                None => self.pending.enqueue(LevelMark::NoRight),
            }
        }

        Some(self.pending.dequeue().expect(CHECKED_NON_EMPTY))
    }
}
