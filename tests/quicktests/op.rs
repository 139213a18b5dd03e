use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// an ordered tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Add the value to the tree
    Add(T),
    /// Remove one copy of the value from the tree
    Remove(T),
    /// Compare the tree's contents against the model
    Check,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 2]).unwrap() {
            0 => Op::Add(T::arbitrary(g)),
            1 => Op::Remove(T::arbitrary(g)),
            2 => Op::Check,
            _ => unreachable!(),
        }
    }
}
