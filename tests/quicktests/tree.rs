use ordered_tree::{OrderedTree, Queue};
use quickcheck_macros::quickcheck;

use std::collections::HashSet;

use crate::Op;

fn in_order<T: Clone, C>(tree: &OrderedTree<T, C>) -> Vec<T> {
    let mut sink = Queue::new();
    tree.in_order(&mut sink);
    sink.into_vec()
}

/// Applies a set of operations to a tree and to a sorted `Vec` holding the
/// same multiset. Returns `false` as soon as the two disagree.
fn do_ops<T>(ops: &[Op<T>], tree: &mut OrderedTree<T>, model: &mut Vec<T>) -> bool
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Add(x) => {
                if !tree.add(x.clone()) {
                    return false;
                }
                let pos = model.partition_point(|y| y <= x);
                model.insert(pos, x.clone());
            }
            Op::Remove(x) => {
                let expected = match model.binary_search(x) {
                    Ok(pos) => {
                        model.remove(pos);
                        true
                    }
                    Err(_) => false,
                };
                if tree.remove(x) != expected {
                    return false;
                }
            }
            Op::Check => {
                if in_order(tree) != *model {
                    return false;
                }
            }
        }
    }

    in_order(tree) == *model
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = OrderedTree::new();
    let mut model = Vec::new();

    do_ops(&ops, &mut tree, &mut model) && tree.size() == model.len()
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i16>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();
    let values = in_order(&tree);

    values.windows(2).all(|pair| pair[0] <= pair[1]) && values.len() == xs.len()
}

#[quickcheck]
fn in_order_is_sorted_by_comparator(xs: Vec<i16>) -> bool {
    let mut tree = OrderedTree::with_comparator(|a: &i16, b: &i16| b.cmp(a));
    tree.extend(xs);
    let values = in_order(&tree);

    values.windows(2).all(|pair| pair[0] >= pair[1])
}

#[quickcheck]
fn add_then_remove_restores(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: OrderedTree<_> = xs.iter().copied().filter(|y| *y != x).collect();
    let before = in_order(&tree);

    tree.add(x);
    tree.remove(&x) && in_order(&tree) == before
}

#[quickcheck]
fn sizes_agree(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();

    let mut pre = Queue::new();
    tree.pre_order(&mut pre);
    let mut post = Queue::new();
    tree.post_order(&mut post);

    let size = tree.size();
    size == xs.len()
        && size == tree.size_iterative()
        && size == tree.iter().count()
        && size == tree.breadth_first().count()
        && size == pre.len()
        && size == post.len()
}

#[quickcheck]
fn contains_iff_in_order(xs: Vec<i8>, probes: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();
    let present: HashSet<_> = in_order(&tree).into_iter().collect();

    probes.iter().chain(&xs).all(|x| {
        tree.contains(x) == present.contains(x) && tree.get(x).is_some() == tree.contains(x)
    })
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: OrderedTree<_> = xs.iter().copied().collect();
    let mut still_present = xs;
    for delete in &deletes {
        let removed = tree.remove(delete);
        // Only one copy comes out per removal.
        match still_present.iter().position(|x| x == delete) {
            Some(pos) => {
                still_present.swap_remove(pos);
                if !removed {
                    return false;
                }
            }
            None if removed => return false,
            None => {}
        }
    }

    still_present.sort_unstable();
    in_order(&tree) == still_present
}

#[quickcheck]
fn depth_is_one_more_than_deepest_child(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();

    match tree.root() {
        None => tree.depth() == 0,
        Some(root) => {
            let left = root.left().map_or(0, |left| left.depth());
            let right = root.right().map_or(0, |right| right.depth());
            tree.depth() == 1 + left.max(right)
        }
    }
}

#[quickcheck]
fn extremes_match_in_order(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();
    let values = in_order(&tree);

    tree.min() == values.first() && tree.max() == values.last()
}
