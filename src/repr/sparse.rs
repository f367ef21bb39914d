use smallvec::{Array, SmallVec};

use crate::testing::test_capacity_ops;

use super::*;

/// A capacitated directed graph storing, per node, a list of `(head, capacity)` entries sorted
/// by head. Like `SmallVec`-backed adjacency arrays, short neighborhoods live inline without a
/// heap allocation.
///
/// Arc lookup is a binary search over the out-neighborhood; neighbor iteration is linear in the
/// out-degree rather than in `n`, which makes this the better residual structure for large
/// sparse networks. Entries whose capacity drops to zero stay in place (they are likely to be
/// refilled by a reverse credit) but are skipped by all positive-adjacency accessors.
///
/// # Type parameters
/// - `C`: the capacity scalar, any primitive unsigned integer.
/// - `N`: number of entries stored inline per node.
#[derive(Clone)]
pub struct SparseCapacities<C = Capacity, const N: usize = 4>
where
    [(Node, C); N]: Array<Item = (Node, C)>,
{
    nbs: Vec<SmallVec<[(Node, C); N]>>,
    num_edges: NumEdges,
}

/// Sparse adjacency-list capacities over the default capacity type
pub type CapacityList = SparseCapacities;

impl<C, const N: usize> SparseCapacities<C, N>
where
    C: CapacityNum,
    [(Node, C); N]: Array<Item = (Node, C)>,
{
    #[inline]
    fn assert_nodes(&self, u: Node, v: Node) {
        assert!(u < self.number_of_nodes() && v < self.number_of_nodes());
    }

    /// Position of `v` in the out-neighborhood of `u`, or the insertion point keeping it sorted
    #[inline]
    fn entry_of(&self, u: Node, v: Node) -> Result<usize, usize> {
        self.nbs[u as usize].binary_search_by_key(&v, |&(w, _)| w)
    }
}

impl<C, const N: usize> GraphNodeOrder for SparseCapacities<C, N>
where
    C: CapacityNum,
    [(Node, C); N]: Array<Item = (Node, C)>,
{
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }

    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }
}

impl<C, const N: usize> GraphEdgeOrder for SparseCapacities<C, N>
where
    C: CapacityNum,
    [(Node, C); N]: Array<Item = (Node, C)>,
{
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<C, const N: usize> CapacitatedAdjacency for SparseCapacities<C, N>
where
    C: CapacityNum,
    [(Node, C); N]: Array<Item = (Node, C)>,
{
    type Cap = C;

    fn capacity_of(&self, u: Node, v: Node) -> C {
        self.assert_nodes(u, v);
        match self.entry_of(u, v) {
            Ok(pos) => self.nbs[u as usize][pos].1,
            Err(_) => C::zero(),
        }
    }

    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        // entries are kept sorted by head, so this iterates in ascending order
        self.nbs[u as usize]
            .iter()
            .filter_map(|&(v, c)| (c > C::zero()).then_some(v))
    }

    fn out_capacity_of(&self, u: Node) -> C {
        self.nbs[u as usize].iter().map(|&(_, c)| c).sum()
    }
}

impl<C, const N: usize> GraphNew for SparseCapacities<C, N>
where
    C: CapacityNum,
    [(Node, C); N]: Array<Item = (Node, C)>,
{
    fn new(n: NumNodes) -> Self {
        assert!(n > 0);
        Self {
            nbs: vec![SmallVec::new(); n as usize],
            num_edges: 0,
        }
    }
}

impl<C, const N: usize> CapacityEdgeEditing for SparseCapacities<C, N>
where
    C: CapacityNum,
    [(Node, C); N]: Array<Item = (Node, C)>,
{
    fn add_edge(&mut self, u: Node, v: Node, capacity: C) {
        self.assert_nodes(u, v);
        if u == v || capacity.is_zero() {
            return;
        }

        match self.entry_of(u, v) {
            Ok(pos) => {
                let entry = &mut self.nbs[u as usize][pos];
                if entry.1.is_zero() {
                    self.num_edges += 1;
                }
                entry.1 += capacity;
            }
            Err(pos) => {
                self.nbs[u as usize].insert(pos, (v, capacity));
                self.num_edges += 1;
            }
        }
    }

    fn set_capacity(&mut self, u: Node, v: Node, capacity: C) {
        self.assert_nodes(u, v);
        assert!(u != v || capacity.is_zero());

        match self.entry_of(u, v) {
            Ok(pos) => {
                let entry = &mut self.nbs[u as usize][pos];
                match (entry.1.is_zero(), capacity.is_zero()) {
                    (true, false) => self.num_edges += 1,
                    (false, true) => self.num_edges -= 1,
                    _ => {}
                }
                entry.1 = capacity;
            }
            Err(pos) => {
                if !capacity.is_zero() {
                    self.nbs[u as usize].insert(pos, (v, capacity));
                    self.num_edges += 1;
                }
            }
        }
    }
}

test_capacity_ops!(sparse_ops, CapacityList);
