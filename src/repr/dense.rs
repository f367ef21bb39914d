use crate::testing::test_capacity_ops;

use super::*;

/// A capacitated directed graph storing a dense `n * n` capacity matrix in row-major order.
///
/// Lookup and mutation of a single arc are O(1); iterating the neighbors of a node scans its
/// full row, so one breadth-first relaxation costs O(n^2). Appropriate for small or dense
/// networks; for large sparse ones prefer [`SparseCapacities`](super::SparseCapacities).
///
/// # Type parameters
/// - `C`: the capacity scalar, any primitive unsigned integer.
#[derive(Clone)]
pub struct DenseCapacities<C = Capacity> {
    n: NumNodes,
    num_edges: NumEdges,
    capacities: Vec<C>,
}

/// Dense capacity matrix over the default capacity type
pub type CapacityMatrix = DenseCapacities;

impl<C> DenseCapacities<C>
where
    C: CapacityNum,
{
    #[inline]
    fn idx(&self, u: Node, v: Node) -> usize {
        assert!(u < self.n && v < self.n);
        u as usize * self.n as usize + v as usize
    }

    /// Returns the row of outgoing capacities of `u`, including zero entries
    fn row(&self, u: Node) -> &[C] {
        assert!(u < self.n);
        let start = u as usize * self.n as usize;
        &self.capacities[start..start + self.n as usize]
    }
}

impl<C> GraphNodeOrder for DenseCapacities<C>
where
    C: CapacityNum,
{
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }
}

impl<C> GraphEdgeOrder for DenseCapacities<C>
where
    C: CapacityNum,
{
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<C> CapacitatedAdjacency for DenseCapacities<C>
where
    C: CapacityNum,
{
    type Cap = C;

    fn capacity_of(&self, u: Node, v: Node) -> C {
        self.capacities[self.idx(u, v)]
    }

    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.row(u)
            .iter()
            .enumerate()
            .filter_map(|(v, &c)| (c > C::zero()).then_some(v as Node))
    }

    fn out_capacity_of(&self, u: Node) -> C {
        self.row(u).iter().copied().sum()
    }
}

impl<C> GraphNew for DenseCapacities<C>
where
    C: CapacityNum,
{
    fn new(n: NumNodes) -> Self {
        assert!(n > 0);
        Self {
            n,
            num_edges: 0,
            capacities: vec![C::zero(); n as usize * n as usize],
        }
    }
}

impl<C> CapacityEdgeEditing for DenseCapacities<C>
where
    C: CapacityNum,
{
    fn add_edge(&mut self, u: Node, v: Node, capacity: C) {
        let idx = self.idx(u, v);
        if u == v || capacity.is_zero() {
            return;
        }

        if self.capacities[idx].is_zero() {
            self.num_edges += 1;
        }
        self.capacities[idx] = self.capacities[idx] + capacity;
    }

    fn set_capacity(&mut self, u: Node, v: Node, capacity: C) {
        let idx = self.idx(u, v);
        assert!(u != v || capacity.is_zero());

        match (self.capacities[idx].is_zero(), capacity.is_zero()) {
            (true, false) => self.num_edges += 1,
            (false, true) => self.num_edges -= 1,
            _ => {}
        }
        self.capacities[idx] = capacity;
    }
}

test_capacity_ops!(dense_ops, CapacityMatrix);
