/*!
# Capacity Representations

This module defines the storage backends for capacitated directed graphs.

## Provided Representations

- [`CapacityMatrix`] ([`DenseCapacities`]) — a dense `n * n` capacity matrix.
- [`CapacityList`] ([`SparseCapacities`]) — sorted per-node adjacency lists of
  `(node, capacity)` entries backed by inline small vectors.

## Design
Both representations implement the same operation traits from [`ops`](crate::ops) and maintain
the residual capacities of a flow network in place. They agree on the observable contracts:
neighbors iterate in ascending node order, only positive-capacity arcs are visible, and the
capacity diagonal is always zero.
*/

use crate::{edge::*, node::*, ops::*};

mod dense;
mod sparse;

pub use dense::*;
pub use sparse::*;
