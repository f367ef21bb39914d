/*!
# Utilities

Provides helper traits used across the crate:
- abstractions over [`Set`] for more flexibility in traversal algorithms,
- [`FromCapacity`] for constructing such data structures with known bounds,
- [`WithGraphRef`] for algorithm structs that hold on to a graph reference.

Apart from [`Set`], you probably do not need to interact with this module directly.
*/

use std::{collections::HashSet, hash::BuildHasher};

use stream_bitset::{PrimIndex, bitset::BitSetImpl};

pub mod set;

pub use set::Set;

/// Helper trait for datastructures that can be initialized with capacity.
/// Can be interpreted as reserved space or guaranteed used space.
///
/// Note that this should mainly be used in conjunction with [`Set`]-like datastructures:
/// bitsets need the *total* capacity (the largest storable value), hash sets only the *used*
/// capacity (the number of elements actually inserted).
pub trait FromCapacity: Sized {
    /// Create a new instance with a given capacity
    fn from_capacity(capacity: usize) -> Self {
        Self::from_total_used_capacity(capacity, capacity)
    }

    /// Creates a new instance from the total capacity (ie. max-value for example) and the actual
    /// capacity that will be used (space-wise).
    ///
    /// If you only have one value as an upper bound, provide it as both arguments if possible.
    fn from_total_used_capacity(total: usize, used: usize) -> Self;
}

impl<I> FromCapacity for BitSetImpl<I>
where
    I: PrimIndex,
{
    fn from_total_used_capacity(total: usize, _used: usize) -> Self {
        // A bitset must be able to index up to the maximum element
        Self::new(I::from_usize(total).unwrap())
    }
}

impl<T, S> FromCapacity for HashSet<T, S>
where
    S: BuildHasher + Default,
{
    fn from_total_used_capacity(_total: usize, used: usize) -> Self {
        // A hash set only needs room for the elements actually inserted
        Self::with_capacity_and_hasher(used, S::default())
    }
}

/// Trait for algorithm structs that keep a shared reference to the graph they operate on
pub trait WithGraphRef<G> {
    /// Returns the graph being operated on
    fn graph_ref(&self) -> &G;
}
