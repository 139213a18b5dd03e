//! Error types. Queries against the tree never fail (an absent result is a
//! `None`), so the only errors are misuse of the auxiliary containers and
//! layouts too large to render.

use thiserror::Error;

/// Returned when a [`Queue`][crate::Queue] or [`Stack`][crate::Stack] is asked
/// for an element it does not have.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    /// `dequeue` or `peek` on an empty queue.
    #[error("dequeue attempted on an empty queue")]
    EmptyQueue,

    /// `pop` or `top` on an empty stack.
    #[error("pop attempted on an empty stack")]
    EmptyStack,
}

/// Returned by [`TreeRenderer::render_as_tree`][crate::TreeRenderer::render_as_tree].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    /// Rows of the layout double in width with every level, so deep trees are
    /// refused before anything is allocated.
    #[error("tree depth {depth} exceeds the renderer's limit of {max_depth} levels")]
    TooDeep {
        /// Depth of the tree that was refused.
        depth: usize,
        /// Deepest tree the renderer is configured to lay out.
        max_depth: usize,
    },

    /// The layout would hold more cells than the renderer allows.
    #[error("layout needs {cells} cells, over the renderer's limit of {max_cells}")]
    TooLarge {
        /// Cells the layout would have held.
        cells: usize,
        /// Most cells the renderer is configured to allocate.
        max_cells: usize,
    },
}
