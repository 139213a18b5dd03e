use std::cmp::Ordering;

/// The comparator type of a tree built with [`OrderedTree::new`][crate::OrderedTree::new]:
/// a plain function pointer to the element type's [`Ord::cmp`].
pub type NaturalOrder<T> = fn(&T, &T) -> Ordering;

/// Returns the natural ordering of `T` as a comparator.
pub(crate) fn natural_order<T: Ord>() -> NaturalOrder<T> {
    T::cmp
}
