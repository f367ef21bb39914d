/*!
Traversals over the residual-positive adjacency of a capacitated graph.

This module provides:
- Generic traversal iterators (BFS, DFS, with and without predecessor tracking).
- Abstractions (`TraversalSearch`, `TraversalTree`) that turn traversals into useful
  structures such as parent arrays.
- A high-level `Traversal` trait that exposes traversal algorithms directly as methods
  on graph data structures.

Since [`CapacitatedAdjacency::neighbors_of`] only yields arcs with positive residual capacity,
these traversals automatically see the residual graph of a partially solved flow network: an
exhausted arc is as good as absent. Neighbors are expanded in ascending node order, so the
breadth-first variants discover the lexicographically smallest among all hop-minimal paths.
*/

use super::*;
use std::{collections::VecDeque, marker::PhantomData};

/// Common interface for maintaining and querying visited-states during a traversal.
///
/// This allows traversal algorithms to be parameterized by different set implementations
/// (e.g., `BitSet`, `HashSet`) without changing the traversal logic.
pub trait TraversalState<S>
where
    S: Set<Node>,
{
    /// Returns a reference to the set of visited nodes.
    fn visited(&self) -> &S;

    /// Checks if a given node `u` has already been visited.
    fn did_visit_node(&self, u: Node) -> bool {
        self.visited().contains(&u)
    }
}

/// Abstraction for items yielded by a traversal iterator.
///
/// A `SequencedItem` encodes both the **node currently visited** and an **optional
/// predecessor** that represents its parent in the traversal tree.
///
/// Two implementations are provided:
/// - [`Node`] — stores only the node (no predecessor information).
/// - [`PredecessorOfNode`] — stores `(predecessor, node)` pairs.
pub trait SequencedItem: Clone + Copy {
    /// Constructs a new item with a predecessor.
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self;

    /// Constructs a new item without predecessor information.
    fn new_without_predecessor(item: Node) -> Self;

    /// Returns the node represented by this item.
    fn item(&self) -> Node;

    /// Returns the predecessor of this node, if any.
    fn predecessor(&self) -> Option<Node>;

    /// Returns a pair `(predecessor, item)` where the predecessor may be `None` if not tracked.
    fn predecessor_with_item(&self) -> (Option<Node>, Node) {
        (self.predecessor(), self.item())
    }
}

impl SequencedItem for Node {
    fn new_with_predecessor(_: Node, item: Node) -> Self {
        item
    }
    fn new_without_predecessor(item: Node) -> Self {
        item
    }
    fn item(&self) -> Node {
        *self
    }
    fn predecessor(&self) -> Option<Node> {
        None
    }
}

/// Compact representation of `(predecessor, node)` used for traversals with parent tracking.
///
/// Internally, the absence of a predecessor is encoded by setting both tuple entries to the
/// same node value.
pub type PredecessorOfNode = (Node, Node);
impl SequencedItem for PredecessorOfNode {
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self {
        (predecessor, item)
    }
    fn new_without_predecessor(item: Node) -> Self {
        (item, item)
    }

    fn item(&self) -> Node {
        self.1
    }

    fn predecessor(&self) -> Option<Node> {
        if self.0 == self.1 { None } else { Some(self.0) }
    }
}

/// Abstraction for the traversal frontier data structure.
///
/// A `NodeSequencer` is responsible for storing the "to be visited" nodes during a traversal.
/// Different implementations determine the traversal order:
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait NodeSequencer<T> {
    /// Creates a new sequencer initialized with a single node.
    fn init(u: T) -> Self;

    /// Pushes a node into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next node from the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl<T> NodeSequencer<T> for VecDeque<T>
where
    T: Clone,
{
    fn init(u: T) -> Self {
        Self::from(vec![u])
    }
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> NodeSequencer<T> for Vec<T>
where
    T: Clone,
{
    fn init(u: T) -> Self {
        vec![u]
    }
    fn push(&mut self, u: T) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Maintains an explicit "frontier" (queue or stack) of nodes to visit, a set of visited nodes,
/// and optionally records predecessor information. Nodes are marked visited and their
/// predecessor is fixed when they are **enqueued**, so the parent of a node is always the first
/// node that discovered it, independent of how far the search runs afterwards.
pub struct TraversalSearch<'a, G, S, I, V>
where
    G: CapacitatedAdjacency,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node>,
{
    graph: &'a G,
    visited: V,
    sequencer: S,
    stop_at: Option<Node>,
    _item: PhantomData<I>,
}

/// Type alias for a **breadth-first search** iterator using a custom visited-set.
pub type BFSWithSet<'a, G, V> = TraversalSearch<'a, G, VecDeque<Node>, Node, V>;

/// Type alias for a **depth-first search** iterator using a custom visited-set.
pub type DFSWithSet<'a, G, V> = TraversalSearch<'a, G, Vec<Node>, Node, V>;

/// A BFS traversal iterator over the graph, visiting nodes in breadth-first order from a given
/// starting node.
pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<Node>, Node, NodeBitSet>;

/// A DFS traversal iterator over the graph, visiting nodes in depth-first order from a given
/// starting node.
pub type DFS<'a, G> = TraversalSearch<'a, G, Vec<Node>, Node, NodeBitSet>;

/// A BFS traversal iterator that records predecessor information, producing a spanning tree of
/// the search.
pub type BFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, VecDeque<PredecessorOfNode>, PredecessorOfNode, NodeBitSet>;

impl<G, S, I, V> WithGraphRef<G> for TraversalSearch<'_, G, S, I, V>
where
    G: CapacitatedAdjacency,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node>,
{
    fn graph_ref(&self) -> &G {
        self.graph
    }
}

impl<G, S, I, V> TraversalState<V> for TraversalSearch<'_, G, S, I, V>
where
    G: CapacitatedAdjacency,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node>,
{
    fn visited(&self) -> &V {
        &self.visited
    }
}

impl<G, S, I, V> Iterator for TraversalSearch<'_, G, S, I, V>
where
    G: CapacitatedAdjacency,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node>,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.sequencer.pop()?;
        let u = popped.item();

        if self.stop_at == Some(u) {
            while self.sequencer.pop().is_some() {} // drop all
        } else {
            for v in self.graph.neighbors_of(u) {
                if !self.visited.contains(&v) {
                    self.sequencer.push(I::new_with_predecessor(u, v));
                    self.visited.insert(v);
                }
            }
        }

        Some(popped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.sequencer.cardinality(),
            Some(self.graph.len() - self.visited.len()),
        )
    }
}

impl<'a, G, S, I, V> TraversalSearch<'a, G, S, I, V>
where
    G: CapacitatedAdjacency,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node> + FromCapacity,
{
    /// Creates a new traversal iterator starting from `start`.
    ///
    /// - `graph`: The graph to traverse.
    /// - `start`: The starting node.
    pub fn new(graph: &'a G, start: Node) -> Self {
        let len = graph.len();
        let mut visited = V::from_total_used_capacity(len, len);
        visited.insert(start);
        Self {
            graph,
            visited,
            sequencer: S::init(I::new_without_predecessor(start)),
            stop_at: None,
            _item: PhantomData,
        }
    }
}

impl<'a, G, S, I, V> TraversalSearch<'a, G, S, I, V>
where
    G: CapacitatedAdjacency,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node>,
{
    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards
    /// only None.
    pub fn set_stop_at(&mut self, stopper: Node) {
        self.stop_at = Some(stopper);
    }

    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards
    /// only None.
    pub fn stop_at(mut self, stopper: Node) -> Self {
        self.set_stop_at(stopper);
        self
    }
}

/// Extension trait for traversal iterators that return `PredecessorOfNode`, enabling extraction
/// of the implied spanning tree structure.
pub trait TraversalTree<'a, G>:
    WithGraphRef<G> + Iterator<Item = PredecessorOfNode> + Sized
where
    G: 'a + CapacitatedAdjacency,
{
    /// Consumes the iterator and records the parent of each node in the implied traversal tree
    /// into the provided slice `tree`.
    ///
    /// - For each visited node `v`, `tree[v]` is set to its predecessor.
    /// - Unvisited entries remain unchanged.
    ///
    /// # Requirements
    /// - `tree.len()` must be at least `graph.len()`.
    fn parent_array_into(&mut self, tree: &mut [Node]) {
        for pred_with_item in self.by_ref() {
            if let Some(p) = pred_with_item.predecessor() {
                tree[pred_with_item.item() as usize] = p;
            }
        }
    }

    /// Constructs a fresh parent array of size `graph.len()` where each node is initially set
    /// to be its own parent. Then fills in the traversal tree structure using
    /// `parent_array_into`.
    ///
    /// # Examples
    /// ```
    /// use cgraphs::{prelude::*, algo::*};
    ///
    /// let g = CapacityMatrix::from_edges(3, [(0, 1, 1u64), (1, 2, 1)]);
    ///
    /// let parents = g.bfs_with_predecessor(0).parent_array();
    /// assert_eq!(parents, vec![0, 0, 1]);
    /// ```
    fn parent_array(&mut self) -> Vec<Node> {
        let mut tree: Vec<_> = self.graph_ref().vertices_range().collect();
        self.parent_array_into(&mut tree);
        tree
    }
}

impl<'a, G, S, V> TraversalTree<'a, G> for TraversalSearch<'a, G, S, PredecessorOfNode, V>
where
    G: CapacitatedAdjacency,
    S: NodeSequencer<PredecessorOfNode>,
    V: Set<Node>,
{
}

/// Provides convenient traversal methods over the residual-positive adjacency
pub trait Traversal: CapacitatedAdjacency + Sized {
    /// Returns an iterator that traverses nodes reachable from `start` over positive-capacity
    /// arcs in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use cgraphs::{prelude::*, algo::*};
    ///
    /// let g = CapacityMatrix::from_edges(3, [(0, 1, 5u64), (1, 2, 0)]);
    ///
    /// // the zero-capacity arc (1, 2) is invisible
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order, vec![0, 1]);
    /// ```
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns an iterator that traverses nodes reachable from `start` over positive-capacity
    /// arcs in **depth-first search (DFS) order**.
    ///
    /// # Examples
    /// ```
    /// use cgraphs::{prelude::*, algo::*};
    ///
    /// let g = CapacityMatrix::from_edges(2, [(0, 1, 1u64)]);
    ///
    /// let order: Vec<_> = g.dfs(0).collect();
    /// assert_eq!(order, vec![0, 1]);
    /// ```
    fn dfs(&self, start: Node) -> DFS<'_, Self> {
        DFS::new(self, start)
    }

    /// Returns a BFS iterator starting from `start` that additionally yields the predecessor
    /// relation (arcs traversed).
    ///
    /// # Examples
    /// ```
    /// use cgraphs::{prelude::*, algo::{*, SequencedItem}};
    ///
    /// let g = CapacityMatrix::from_edges(2, [(0, 1, 1u64)]);
    ///
    /// let mut it = g.bfs_with_predecessor(0);
    /// assert_eq!(it.next().unwrap().item(), 0);
    /// assert_eq!(it.next().unwrap().predecessor(), Some(0));
    /// ```
    fn bfs_with_predecessor(&self, start: Node) -> BFSWithPredecessor<'_, Self> {
        BFSWithPredecessor::new(self, start)
    }
}

impl<G> Traversal for G where G: CapacitatedAdjacency + Sized {}

#[cfg(test)]
pub mod tests {
    use super::*;
    use fxhash::FxHashSet;
    use itertools::Itertools;

    fn example_graph() -> CapacityMatrix {
        //  / 2 --- \
        // 1         4 - 3
        //  \ 0 - 5 /
        CapacityMatrix::from_edges(
            6,
            [
                (1, 2, 1u64),
                (1, 0, 2),
                (4, 3, 3),
                (0, 5, 1),
                (2, 4, 2),
                (5, 4, 1),
            ],
        )
    }

    #[test]
    fn bfs_order() {
        let graph = example_graph();

        {
            // neighbors iterate ascending, so ties break towards smaller nodes
            let order: Vec<Node> = graph.bfs(1).collect();
            assert_eq!(order, vec![1, 0, 2, 5, 4, 3]);
        }

        {
            let order: Vec<Node> = BFS::new(&graph, 5).collect();
            assert_eq!(order, [5, 4, 3]);
        }
    }

    #[test]
    fn bfs_with_predecessor() {
        let graph = example_graph();

        let mut edges: Vec<_> = graph
            .bfs_with_predecessor(1)
            .map(|x| x.predecessor_with_item())
            .collect();
        edges.sort();
        assert_eq!(
            edges,
            vec![
                (None, 1),
                (Some(0), 5),
                (Some(1), 0),
                (Some(1), 2),
                (Some(2), 4),
                (Some(4), 3)
            ]
        );
    }

    #[test]
    fn test_stopper() {
        let graph = CapacityMatrix::from_edges(4, [(0, 1, 1u64), (1, 2, 1), (2, 3, 1)]);
        assert_eq!(graph.bfs(0).collect_vec(), vec![0, 1, 2, 3]);

        assert_eq!(graph.bfs(0).stop_at(1).collect_vec(), vec![0, 1]);
    }

    #[test]
    fn bfs_tree() {
        let graph = example_graph();
        let tree = graph.bfs_with_predecessor(1).parent_array();
        assert_eq!(tree, vec![1, 1, 1, 4, 2, 0]);
    }

    #[test]
    fn exhausted_arcs_are_invisible() {
        let mut graph = CapacityMatrix::from_edges(3, [(0, 1, 3u64), (1, 2, 3)]);
        assert_eq!(graph.bfs(0).collect_vec(), vec![0, 1, 2]);

        graph.set_capacity(1, 2, 0);
        assert_eq!(graph.bfs(0).collect_vec(), vec![0, 1]);
    }

    #[test]
    fn bfs_with_hash_set() {
        let graph = example_graph();
        let order: Vec<Node> = BFSWithSet::<_, FxHashSet<Node>>::new(&graph, 1).collect();
        assert_eq!(order, vec![1, 0, 2, 5, 4, 3]);
    }

    #[test]
    fn dfs_order() {
        let graph = CapacityMatrix::from_edges(
            6,
            [(1, 2, 1u64), (1, 0, 1), (4, 3, 1), (0, 5, 1), (5, 4, 1)],
        );

        {
            let order: Vec<Node> = DFS::new(&graph, 1).collect();
            assert_eq!(order, vec![1, 2, 0, 5, 4, 3]);
        }

        {
            let order: Vec<Node> = graph.dfs(5).collect();
            assert_eq!(order, [5, 4, 3]);
        }
    }
}
