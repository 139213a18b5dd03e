//! Lays an [`OrderedTree`] out as text.
//!
//! The renderer never touches the tree's storage; it walks the tree through
//! [`NodeRef`]s, so the only things it knows are which child slots are filled
//! and what each value looks like when displayed.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{OrderedTree, TreeRenderer};
//!
//! let tree: OrderedTree<_> = "BAC".chars().collect();
//! let layout = TreeRenderer::new().render_as_tree(&tree).unwrap();
//!
//! assert_eq!(layout.to_string(), " B\n/ \\\nA C\n");
//! ```

use std::fmt;
use std::iter;

use tracing::{debug, instrument};

use crate::collections::Queue;
use crate::error::RenderError;
use crate::tree::{LevelMark, NodeRef, OrderedTree};

/// No configuration may render deeper than this. A layout of depth `D` holds
/// roughly `2^(2D - 1)` cells.
const DEPTH_LIMIT: usize = 12;

/// Glyphs and limits used by a [`TreeRenderer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Drawn beneath a node that has a left child.
    pub left_branch: char,
    /// Drawn beneath a node that has a right child.
    pub right_branch: char,
    /// Padding between values and branches.
    pub blank: char,
    /// Deepest tree [`TreeRenderer::render_as_tree`] will lay out. Values above
    /// 12 are treated as 12.
    pub max_depth: usize,
    /// Most cells a single layout may hold, placeholders included.
    pub max_cells: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            left_branch: '/',
            right_branch: '\\',
            blank: ' ',
            max_depth: 10,
            max_cells: 1 << 20,
        }
    }
}

impl RenderOptions {
    /// Sets the glyphs drawn for left and right branches.
    pub fn with_branches(mut self, left: char, right: char) -> Self {
        self.left_branch = left;
        self.right_branch = right;
        self
    }

    /// Sets the padding glyph.
    pub fn with_blank(mut self, blank: char) -> Self {
        self.blank = blank;
        self
    }

    /// Sets the deepest tree that will be laid out.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the most cells a single layout may hold.
    pub fn with_max_cells(mut self, max_cells: usize) -> Self {
        self.max_cells = max_cells;
        self
    }
}

/// One cell of a [`Layout`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Padding.
    Blank,
    /// A branch down to a left child.
    LeftBranch,
    /// A branch down to a right child.
    RightBranch,
    /// A node's displayed value.
    Value(String),
}

/// The grid produced by [`TreeRenderer::render_as_tree`]: rows of cells, top
/// to bottom. Each level of the tree contributes a row of values followed by
/// one or more rows of branches.
///
/// Every cell except [`Cell::Value`] is one glyph wide. Values whose display
/// text is longer than one character push the rest of their row to the right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    rows: Vec<Vec<Cell>>,
    depth: usize,
    options: RenderOptions,
}

impl Layout {
    /// The rows of the grid.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Depth of the tree this layout was made from.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns `true` for the layout of an empty tree.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Each row as text, with trailing padding removed.
    pub fn lines(&self) -> Vec<String> {
        self.rows.iter().map(|row| self.line(row)).collect()
    }

    fn line(&self, row: &[Cell]) -> String {
        // Trailing padding is dropped by cell so value text is never trimmed.
        let end = row
            .iter()
            .rposition(|cell| *cell != Cell::Blank)
            .map_or(0, |last| last + 1);
        let mut line = String::with_capacity(end);
        for cell in &row[..end] {
            match cell {
                Cell::Blank => line.push(self.options.blank),
                Cell::LeftBranch => line.push(self.options.left_branch),
                Cell::RightBranch => line.push(self.options.right_branch),
                Cell::Value(text) => line.push_str(text),
            }
        }

        line
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

/// Renders [`OrderedTree`]s as text.
#[derive(Debug, Clone, Default)]
pub struct TreeRenderer {
    options: RenderOptions,
}

impl TreeRenderer {
    /// A renderer using [`RenderOptions::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// A renderer using the given options.
    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    /// The options this renderer was built with.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// The number of levels in `tree`.
    pub fn compute_depth<T, C>(&self, tree: &OrderedTree<T, C>) -> usize {
        tree.depth()
    }

    /// Lists `tree` level by level, left to right. Each value is followed by a
    /// [`LevelMark::NoLeft`] and/or [`LevelMark::NoRight`] for its empty child
    /// slots, and levels are separated by [`LevelMark::NextLevel`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{LevelMark, OrderedTree, TreeRenderer};
    ///
    /// let tree: OrderedTree<_> = vec![1, 2].into_iter().collect();
    /// let marks = TreeRenderer::new().render_levels(&tree);
    ///
    /// assert_eq!(
    ///     marks,
    ///     [
    ///         LevelMark::Value(&1),
    ///         LevelMark::NoLeft,
    ///         LevelMark::NextLevel,
    ///         LevelMark::Value(&2),
    ///         LevelMark::NoLeft,
    ///         LevelMark::NoRight,
    ///     ]
    /// );
    /// ```
    #[instrument(level = "debug", skip_all)]
    pub fn render_levels<'a, T, C>(&self, tree: &'a OrderedTree<T, C>) -> Vec<LevelMark<'a, T>> {
        let mut marks = Vec::new();
        let mut current = Queue::new();
        let mut next = Queue::new();
        current.extend(tree.root());

        while !current.is_empty() {
            while !current.is_empty() {
                let node: NodeRef<'a, T> = current
                    .dequeue()
                    .expect("current level was checked to be non-empty");
                marks.push(LevelMark::Value(node.value()));
                match node.left() {
                    Some(left) => next.enqueue(left),
                    None => marks.push(LevelMark::NoLeft),
                }
                match node.right() {
                    Some(right) => next.enqueue(right),
                    None => marks.push(LevelMark::NoRight),
                }
            }

            if !next.is_empty() {
                marks.push(LevelMark::NextLevel);
            }
            std::mem::swap(&mut current, &mut next);
        }

        marks
    }

    /// Lays `tree` out as a grid with branches between parents and children.
    ///
    /// With the root on level 1 of `D` levels, level `L` is drawn with
    /// `floor = D - L`: `2^floor - 1` blanks of indentation, `2^(floor + 1) - 1`
    /// blanks after every value, and `2^max(floor - 1, 0)` rows of branches
    /// below. Missing nodes keep their place as blanks so that every level lines
    /// up under the one above it.
    ///
    /// Fails with [`RenderError::TooDeep`] when the tree has more levels than
    /// the configured [`max_depth`][RenderOptions::max_depth], and with
    /// [`RenderError::TooLarge`] when the grid would hold more than
    /// [`max_cells`][RenderOptions::max_cells] cells. Both are checked before
    /// anything is allocated.
    #[instrument(level = "debug", skip_all)]
    pub fn render_as_tree<T, C>(&self, tree: &OrderedTree<T, C>) -> Result<Layout, RenderError>
    where
        T: fmt::Display,
    {
        let depth = self.compute_depth(tree);
        let max_depth = self.options.max_depth.min(DEPTH_LIMIT);
        if depth > max_depth {
            debug!(depth, max_depth, "refusing to render tree");
            return Err(RenderError::TooDeep { depth, max_depth });
        }
        let cells = layout_cells(depth);
        if cells > self.options.max_cells {
            debug!(cells, max_cells = self.options.max_cells, "refusing to render tree");
            return Err(RenderError::TooLarge {
                cells,
                max_cells: self.options.max_cells,
            });
        }

        let mut rows = Vec::new();
        let mut nodes: Vec<Option<NodeRef<'_, T>>> = tree.root().into_iter().map(Some).collect();
        let mut level = 1;
        while nodes.iter().any(Option::is_some) {
            let floor = depth - level;
            let edge_lines = 1usize << floor.saturating_sub(1);
            let first_spaces = (1usize << floor) - 1;
            let between_spaces = (1usize << (floor + 1)) - 1;

            let mut row: Vec<Cell> = blanks(first_spaces).collect();
            let mut next_nodes = Vec::with_capacity(nodes.len() * 2);
            for node in &nodes {
                match node {
                    Some(node) => {
                        row.push(Cell::Value(node.value().to_string()));
                        next_nodes.push(node.left());
                        next_nodes.push(node.right());
                    }
                    None => {
                        row.push(Cell::Blank);
                        next_nodes.push(None);
                        next_nodes.push(None);
                    }
                }
                row.extend(blanks(between_spaces));
            }
            rows.push(row);

            for i in 1..=edge_lines {
                let mut row = Vec::new();
                for node in &nodes {
                    row.extend(blanks(first_spaces.saturating_sub(i)));
                    let node = match node {
                        Some(node) => node,
                        None => {
                            row.extend(blanks(2 * edge_lines + i + 1));
                            continue;
                        }
                    };

                    row.push(match node.left() {
                        Some(_) => Cell::LeftBranch,
                        None => Cell::Blank,
                    });
                    row.extend(blanks(2 * i - 1));
                    row.push(match node.right() {
                        Some(_) => Cell::RightBranch,
                        None => Cell::Blank,
                    });
                    row.extend(blanks(2 * edge_lines - i));
                }
                rows.push(row);
            }

            nodes = next_nodes;
            level += 1;
        }

        Ok(Layout {
            rows,
            depth,
            options: self.options,
        })
    }
}

/// Number of cells `render_as_tree` produces for a tree of `depth` levels.
/// Every level holds `2^(level - 1)` entries once placeholders are counted, so
/// this depends only on the depth.
fn layout_cells(depth: usize) -> usize {
    let mut cells = 0;
    for level in 1..=depth {
        let floor = depth - level;
        let nodes = 1usize << (level - 1);
        let edge_lines = 1usize << floor.saturating_sub(1);
        let first_spaces = (1usize << floor) - 1;
        let between_spaces = (1usize << (floor + 1)) - 1;

        cells += first_spaces + nodes * (1 + between_spaces);
        for i in 1..=edge_lines {
            cells += nodes * (first_spaces.saturating_sub(i) + 2 * edge_lines + i + 1);
        }
    }

    cells
}

fn blanks(count: usize) -> impl Iterator<Item = Cell> {
    iter::repeat(Cell::Blank).take(count)
}
