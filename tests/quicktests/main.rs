use quickcheck::{Arbitrary, Gen};

mod tree;

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<T> {
    /// Insert the value into the data structure
    Insert(T),
    /// Delete the value from the data structure
    Delete(T),
    /// Compare the values found between two bounds
    Range(T, T),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::Delete(T::arbitrary(g)),
            2 => Op::Range(T::arbitrary(g), T::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}
