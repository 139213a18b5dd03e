use ordered_tree::{Cell, LevelMark, OrderedTree, RenderOptions, TreeRenderer};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

fn renderer() -> TreeRenderer {
    TreeRenderer::with_options(RenderOptions::default().with_max_depth(12))
}

#[quickcheck]
fn layout_holds_every_value(xs: Vec<u8>) -> TestResult {
    let tree: OrderedTree<_> = xs.iter().copied().collect();
    let layout = match renderer().render_as_tree(&tree) {
        Ok(layout) => layout,
        // Deep trees are refused rather than drawn.
        Err(_) => return TestResult::discard(),
    };

    let values = layout
        .rows()
        .iter()
        .flatten()
        .filter(|cell| matches!(cell, Cell::Value(_)))
        .count();
    TestResult::from_bool(values == tree.size() && layout.depth() == tree.depth())
}

#[quickcheck]
fn layout_branches_match_children(xs: Vec<u8>) -> TestResult {
    let tree: OrderedTree<_> = xs.iter().copied().collect();
    let layout = match renderer().render_as_tree(&tree) {
        Ok(layout) => layout,
        Err(_) => return TestResult::discard(),
    };

    // Every node but the root hangs off at least one branch glyph.
    let children = tree.size().saturating_sub(1);
    let branches = layout
        .rows()
        .iter()
        .flatten()
        .filter(|cell| matches!(cell, Cell::LeftBranch | Cell::RightBranch))
        .count();
    TestResult::from_bool(branches >= children)
}

#[quickcheck]
fn levels_list_every_value_once(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();
    let marks = TreeRenderer::new().render_levels(&tree);

    let values = marks
        .iter()
        .filter(|mark| matches!(mark, LevelMark::Value(_)))
        .count();
    let separators = marks
        .iter()
        .filter(|mark| matches!(mark, LevelMark::NextLevel))
        .count();
    let empty_slots = marks
        .iter()
        .filter(|mark| matches!(mark, LevelMark::NoLeft | LevelMark::NoRight))
        .count();

    values == tree.size()
        && separators == tree.depth().saturating_sub(1)
        // A tree of n nodes has n + 1 empty child slots.
        && empty_slots == if tree.is_empty() { 0 } else { tree.size() + 1 }
}

#[quickcheck]
fn levels_agree_with_marked_breadth_first(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();
    let levels: Vec<_> = TreeRenderer::new()
        .render_levels(&tree)
        .into_iter()
        .filter(|mark| *mark != LevelMark::NextLevel)
        .collect();
    let marked: Vec<_> = tree.breadth_first_marked().collect();

    levels == marked
}
