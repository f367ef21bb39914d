use std::ops::Range;

use crate::{edge::*, node::*};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_;

    /// Returns a range over all vertices of the graph.
    /// In contrast to `self.vertices()`, the range returned by `self.vertices_range()` does
    /// not borrow self and hence may be used where additional mutable references of self are needed
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns full bitset with one entry per node
    fn vertex_bitset_set(&self) -> NodeBitSet {
        NodeBitSet::new_all_set(self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no arcs)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of arcs with strictly positive capacity
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no arcs with positive capacity
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Read access to the capacitated adjacency structure of a graph.
///
/// The neighbor relation exposed here is the **residual-positive** one: a node `v` is a neighbor
/// of `u` exactly if the arc `(u, v)` currently has strictly positive capacity. Exhausted arcs
/// (capacity zero) are invisible to traversals, which is what augmenting-path searches require.
pub trait CapacitatedAdjacency: GraphNodeOrder + Sized {
    /// The capacity scalar stored on arcs
    type Cap: CapacityNum;

    /// Returns the capacity of the arc `(u, v)`, or zero if no such arc exists.
    /// ** Panics if `u >= n || v >= n` **
    fn capacity_of(&self, u: Node, v: Node) -> Self::Cap;

    /// Returns an iterator over the out-neighbors of `u` reachable over arcs with positive
    /// capacity, **in ascending node order**.
    ///
    /// The ascending order is a contract, not an implementation detail: it decides which of
    /// several hop-minimal augmenting paths a breadth-first search discovers first, and all
    /// representations must agree on it.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of positive-capacity out-arcs of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes {
        self.neighbors_of(u).count() as NumNodes
    }

    /// Returns *true* if the arc `(u,v)` has positive capacity.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.capacity_of(u, v) > Self::Cap::zero()
    }

    /// Returns the total capacity leaving `u`.
    ///
    /// For a flow network this bounds every (s, t)-flow with `s = u` from above.
    /// ** Panics if `u >= n` **
    fn out_capacity_of(&self, u: Node) -> Self::Cap {
        self.neighbors_of(u).map(|v| self.capacity_of(u, v)).sum()
    }

    /// Returns an iterator over the positive-capacity out-arcs of `u` in ascending head order.
    /// ** Panics if `u >= n` **
    fn out_edges_of(&self, u: Node) -> impl Iterator<Item = CapEdge<Self::Cap>> + '_ {
        self.neighbors_of(u)
            .map(move |v| CapEdge(u, v, self.capacity_of(u, v)))
    }

    /// Returns an iterator over all positive-capacity arcs in the graph in lexicographic order.
    fn edges(&self) -> impl Iterator<Item = CapEdge<Self::Cap>> + '_ {
        self.vertices_range().flat_map(move |u| self.out_edges_of(u))
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates a graph with `n` nodes and no arcs
    /// ** Panics if `n == 0` **
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert arc capacity and to overwrite it during flow computations.
///
/// There is deliberately no arc *removal*: residual capacities only ever reach zero by being
/// consumed, and an arc at zero is equivalent to an absent one.
pub trait CapacityEdgeEditing: CapacitatedAdjacency + GraphNew {
    /// Adds `capacity` to the arc `(u, v)`, creating it if absent.
    ///
    /// Repeated calls for the same pair **accumulate**: adding 5 twice is identical to adding 10
    /// once. Self-loops (`u == v`) can never lie on an (s, t)-path and are dropped so that the
    /// capacity diagonal stays zero. Adding zero capacity is a no-op.
    /// ** Panics if `u >= n || v >= n` **
    fn add_edge(&mut self, u: Node, v: Node, capacity: Self::Cap);

    /// Adds all arcs in the collection
    /// ** Panics if any arc has an endpoint `>= n` **
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<CapEdge<Self::Cap>>>) {
        for CapEdge(u, v, c) in edges.into_iter().map(|e| e.into()) {
            self.add_edge(u, v, c);
        }
    }

    /// Overwrites the capacity of the arc `(u, v)` with `capacity`.
    ///
    /// This is the mutation primitive of the flow solvers: forward arcs shrink by the bottleneck,
    /// reverse arcs grow by it. Setting zero capacity makes the arc invisible to
    /// [`CapacitatedAdjacency::neighbors_of`].
    /// ** Panics if `u >= n || v >= n`, or if `u == v` and `capacity > 0` **
    fn set_capacity(&mut self, u: Node, v: Node, capacity: Self::Cap);
}

/// A super trait for creating a graph from scratch from a set of capacitated arcs and a number
/// of nodes
pub trait GraphFromScratch: CapacitatedAdjacency {
    /// Create a graph from a number of nodes and a collection of capacitated arcs
    ///
    /// # Examples
    /// ```
    /// use cgraphs::prelude::*;
    ///
    /// let g = CapacityMatrix::from_edges(3, [(0, 1, 4u64), (1, 2, 2)]);
    /// assert_eq!(g.capacity_of(0, 1), 4);
    /// assert_eq!(g.capacity_of(1, 0), 0);
    /// ```
    fn from_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<CapEdge<Self::Cap>>>,
    ) -> Self;
}

impl<G: GraphNew + CapacityEdgeEditing> GraphFromScratch for G {
    fn from_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<CapEdge<Self::Cap>>>,
    ) -> Self {
        let mut graph = Self::new(n);
        graph.add_edges(edges);
        graph
    }
}
