//! An ordered Binary Search Tree whose placement rule is supplied by a
//! comparator, plus a renderer that draws the tree as text.
//!
//! ## Placement
//!
//! [`OrderedTree`] keeps one rule: when a value is added it walks down from the
//! root, turning right past every node it compares strictly greater than and
//! left otherwise. Ties therefore go left, so a value equal to one already in
//! the tree is stored next to it instead of replacing it, and every subtree ends
//! up holding values `<=` its root on the left and `>` its root on the right.
//!
//! Searching follows the same path and stops at the first node that compares
//! equal, which is why lookups and removals of a duplicated value act on
//! whichever copy is met first. Removing a node with two children moves its
//! in-order predecessor (the largest value on its left) into its place.
//!
//! The comparator is the natural [`Ord`] of the element type unless the caller
//! supplies another total order. Nothing is ever rebalanced: adding values in
//! sorted order builds a single chain, so searching, counting, traversing and
//! dropping walk the tree with explicit stacks and queues rather than
//! recursing once per level.
//!
//! ## Rendering
//!
//! [`TreeRenderer`] only reads the tree through [`NodeRef`]s. It can list the
//! tree level by level, noting which child slots are empty, or compute a
//! two-dimensional [`Layout`] with branch glyphs between parents and children.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{OrderedTree, Queue, TreeRenderer};
//!
//! let mut tree = OrderedTree::new();
//! for value in ["D", "B", "A", "C", "G", "H", "J", "K"] {
//!     tree.add(value);
//! }
//!
//! let mut sorted = Queue::new();
//! tree.in_order(&mut sorted);
//! assert_eq!(sorted.into_vec(), ["A", "B", "C", "D", "G", "H", "J", "K"]);
//!
//! // Removing a node with two children promotes its in-order predecessor.
//! assert!(tree.remove(&"D"));
//! assert_eq!(tree.root().map(|root| *root.value()), Some("C"));
//!
//! let layout = TreeRenderer::new().render_as_tree(&tree).unwrap();
//! assert_eq!(layout.depth(), 5);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod collections;
pub mod error;
pub mod render;
pub mod tree;
mod util;

#[cfg(test)]
pub(crate) mod testing;

pub use collections::{Queue, Stack};
pub use error::{CollectionError, RenderError};
pub use render::{Cell, Layout, RenderOptions, TreeRenderer};
pub use tree::{BreadthFirst, BreadthFirstMarked, Iter, LevelMark, NodeRef, OrderedTree};
pub use util::NaturalOrder;
