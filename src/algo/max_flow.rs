/*!
# Maximum (s, t)-Flow

This module implements the **Edmonds-Karp** algorithm: maximum flow via repeated augmentation
along *shortest* (fewest-arc) paths, found by breadth-first search over the residual network.

## Core concepts
- The **residual capacity** of an arc is what the graph representations store; pushing flow
  forward shrinks it and grows the reverse arc by the same amount, so later augmentations can
  cancel earlier ones.
- An **augmenting path** is an (s, t)-path using only positive-residual arcs.
- The **bottleneck** of a path is the smallest residual capacity along it, i.e. the flow one
  augmentation can carry.

## Implementations
- [`EdmondsKarp`] performs one augmentation per iterator step and yields the path taken
  together with its bottleneck.
- [`STFlow`] is a utility trait for constructing and running (s, t)-flow computations with the
  option to **undo or persist changes** to the graph, and exposes `max_flow` directly on graphs.

Note on naming: breadth-first augmenting-path search is Edmonds-Karp, *not* Dinic's algorithm;
there are no level graphs or blocking flows here. The solver is named for what it does.
*/

use super::*;

/// A single augmentation step: the path taken and the flow pushed along it.
///
/// The path is in source-to-sink order and valid only against the residual state at the moment
/// it was found; the very augmentation that produced it has already changed that state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Augmentation<C> {
    /// The augmenting path, starting at the source and ending at the sink
    pub path: Vec<Node>,
    /// The bottleneck capacity that was pushed along the path
    pub bottleneck: C,
}

/// A capacity transfer applied to the residual network during one augmentation.
/// Replayed backwards, it restores the pre-augmentation capacities.
#[derive(Debug, Clone, Copy)]
struct Shift<C> {
    tail: Node,
    head: Node,
    amount: C,
}

/// Implementation of the Edmonds-Karp algorithm for computing a maximum (s, t)-flow on a
/// capacitated directed graph.
///
/// The solver borrows its graph mutably and updates the residual capacities **in place**: after
/// running to exhaustion, the graph holds the residual network of a maximum flow. Exclusive
/// access is enforced by the borrow; concurrent solves on one graph cannot compile. It also
/// supports optionally tracking modifications to the residual network, which is useful when the
/// original capacities are needed afterwards (see [`STFlow::st_flow_undo_changes`]).
pub struct EdmondsKarp<'a, G>
where
    G: CapacityEdgeEditing,
{
    graph: &'a mut G,
    predecessor: Vec<Node>,
    source: Node,
    target: Node,
    changes: Option<Vec<Shift<G::Cap>>>,
}

impl<'a, G> EdmondsKarp<'a, G>
where
    G: CapacityEdgeEditing,
{
    /// Creates a new Edmonds-Karp solver for the flow from `source` to `target`.
    /// ** Panics if `source >= n || target >= n` **
    pub fn new(graph: &'a mut G, source: Node, target: Node) -> Self {
        assert!(source < graph.number_of_nodes() && target < graph.number_of_nodes());
        let n = graph.len();
        Self {
            graph,
            predecessor: vec![0; n],
            source,
            target,
            changes: None,
        }
    }

    /// Performs BFS over positive-residual arcs to find an augmenting path from source to
    /// target. Updates the predecessor array and returns whether the target was reached.
    fn bfs(&mut self) -> bool {
        let mut bfs = self.graph.bfs_with_predecessor(self.source);
        bfs.set_stop_at(self.target);
        bfs.parent_array_into(self.predecessor.as_mut_slice());
        bfs.did_visit_node(self.target)
    }

    /// Drives the solver to exhaustion and returns the total flow value.
    ///
    /// Starting from zero, every augmentation adds its bottleneck; the loop terminates since
    /// integer bottlenecks are at least one and the total is bounded by the capacity leaving
    /// the source.
    pub fn total_flow(&mut self) -> G::Cap {
        self.map(|augmentation| augmentation.bottleneck).sum()
    }

    /// Returns all augmentations performed until no augmenting path remains.
    pub fn augmenting_paths(&mut self) -> Vec<Augmentation<G::Cap>> {
        self.collect()
    }

    /// Read-only view of the residual network in its current state of computation.
    pub fn residual(&self) -> &G {
        self.graph
    }

    /// Enables or disables remembering residual network modifications.
    /// Useful when changes must later be undone.
    pub fn set_remember_changes(&mut self, remember_changes: bool) {
        if remember_changes {
            assert!(self.changes.as_ref().is_none_or(|v| v.is_empty()));
            self.changes = Some(Vec::new());
        } else {
            self.changes = None;
        }
    }

    /// Chainable version of [`Self::set_remember_changes`].
    pub fn remember_changes(mut self, remember_changes: bool) -> Self {
        self.set_remember_changes(remember_changes);
        self
    }

    /// Undoes all recorded augmentations, restoring the capacities the graph had when the
    /// solver was created. Requires that remembering changes was enabled.
    pub fn undo_changes(&mut self) {
        let stack = self.changes.as_mut().unwrap();

        while let Some(Shift { tail, head, amount }) = stack.pop() {
            let forward = self.graph.capacity_of(tail, head) + amount;
            self.graph.set_capacity(tail, head, forward);
            let backward = self.graph.capacity_of(head, tail) - amount;
            self.graph.set_capacity(head, tail, backward);
        }
    }
}

impl<'a, G> Drop for EdmondsKarp<'a, G>
where
    G: CapacityEdgeEditing,
{
    fn drop(&mut self) {
        if self.changes.is_some() {
            self.undo_changes();
        }
    }
}

/// Iterates over the augmentations of an Edmonds-Karp run.
///
/// Each call to `next` performs one full augmentation step: a breadth-first search for a
/// shortest augmenting path, the bottleneck computation along it, and the residual update
/// (forward arcs shrink, reverse arcs grow). The iterator terminates once no augmenting path
/// exists; the accumulated bottlenecks then equal the maximum flow.
impl<'a, G> Iterator for EdmondsKarp<'a, G>
where
    G: CapacityEdgeEditing,
{
    type Item = Augmentation<G::Cap>;

    fn next(&mut self) -> Option<Self::Item> {
        // a node cannot route flow to itself; the flow from s to s is zero by convention
        if self.source == self.target {
            return None;
        }

        if !self.bfs() {
            return None;
        }

        let s = self.source;
        let t = self.target;

        let mut bottleneck = G::Cap::max_value();
        let mut v = t;
        while v != s {
            let u = self.predecessor[v as usize];
            bottleneck = bottleneck.min(self.graph.capacity_of(u, v));
            v = u;
        }

        let mut path = vec![t];
        let mut v = t;
        while v != s {
            let u = self.predecessor[v as usize];

            let forward = self.graph.capacity_of(u, v) - bottleneck;
            self.graph.set_capacity(u, v, forward);
            let backward = self.graph.capacity_of(v, u) + bottleneck;
            self.graph.set_capacity(v, u, backward);

            if let Some(changes) = self.changes.as_mut() {
                changes.push(Shift {
                    tail: u,
                    head: v,
                    amount: bottleneck,
                });
            }

            path.push(u);
            v = u;
        }
        path.reverse();

        Some(Augmentation { path, bottleneck })
    }
}

/// Utility trait for computing (s, t)-flows on graphs with **undoable or permanent
/// modifications** of the residual capacities.
pub trait STFlow: CapacityEdgeEditing + Sized {
    /// Returns an Edmonds-Karp solver whose changes to the residual capacities remain
    /// permanently applied (i.e., without rollback).
    /// ** Panics if `s >= n || t >= n` **
    fn st_flow_keep_changes(&mut self, s: Node, t: Node) -> EdmondsKarp<'_, Self> {
        EdmondsKarp::new(self, s, t)
    }

    /// Returns an Edmonds-Karp solver that remembers its changes to the residual capacities
    /// and undoes them automatically when dropped.
    /// ** Panics if `s >= n || t >= n` **
    fn st_flow_undo_changes(&mut self, s: Node, t: Node) -> EdmondsKarp<'_, Self> {
        self.st_flow_keep_changes(s, t).remember_changes(true)
    }

    /// Computes the maximum (s, t)-flow value, leaving the graph in the residual state of the
    /// maximum flow. A second call on the exhausted graph therefore returns zero.
    ///
    /// If `s == t`, no augmentation is attempted and the flow is zero.
    /// ** Panics if `s >= n || t >= n` **
    ///
    /// # Examples
    /// ```
    /// use cgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = CapacityMatrix::from_edges(
    ///     4,
    ///     [(0, 1, 10u64), (0, 2, 5), (1, 2, 15), (1, 3, 10), (2, 3, 10)],
    /// );
    /// assert_eq!(g.max_flow(0, 3), 15);
    /// assert_eq!(g.max_flow(0, 3), 0);
    /// ```
    fn max_flow(&mut self, s: Node, t: Node) -> Self::Cap {
        self.st_flow_keep_changes(s, t).total_flow()
    }

    /// Computes the maximum (s, t)-flow value and restores the original capacities afterwards.
    /// ** Panics if `s >= n || t >= n` **
    fn max_flow_value(&mut self, s: Node, t: Node) -> Self::Cap {
        self.st_flow_undo_changes(s, t).total_flow()
    }
}

impl<G> STFlow for G where G: CapacityEdgeEditing {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gens::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    fn check_scenario<G>(
        n: NumNodes,
        edges: &[(Node, Node, Capacity)],
        s: Node,
        t: Node,
        expected: Capacity,
    ) where
        G: GraphFromScratch + CapacityEdgeEditing + CapacitatedAdjacency<Cap = Capacity>,
    {
        let mut graph = G::from_edges(n, edges.iter().copied());
        assert_eq!(graph.max_flow(s, t), expected);
        // the residual state of a maximum flow admits no further augmentation
        assert_eq!(graph.max_flow(s, t), 0);
    }

    fn check_scenario_all_reprs(
        n: NumNodes,
        edges: &[(Node, Node, Capacity)],
        s: Node,
        t: Node,
        expected: Capacity,
    ) {
        check_scenario::<CapacityMatrix>(n, edges, s, t, expected);
        check_scenario::<CapacityList>(n, edges, s, t, expected);
    }

    #[test]
    fn diamond_network() {
        check_scenario_all_reprs(
            4,
            &[(0, 1, 10), (0, 2, 5), (1, 2, 15), (1, 3, 10), (2, 3, 10)],
            0,
            3,
            15,
        );
    }

    #[test]
    fn layered_network() {
        // the cut {(1, 3), (4, 5)} with capacity 12 + 4 = 16 is the bottleneck
        check_scenario_all_reprs(
            6,
            &[
                (0, 1, 16),
                (0, 2, 13),
                (1, 2, 10),
                (1, 3, 12),
                (2, 4, 14),
                (3, 5, 20),
                (4, 5, 4),
            ],
            0,
            5,
            16,
        );
    }

    #[test]
    fn disconnected_network() {
        check_scenario_all_reprs(4, &[(0, 1, 10), (2, 3, 5)], 0, 3, 0);
    }

    #[test]
    fn dense_network() {
        check_scenario_all_reprs(
            4,
            &[(0, 1, 20), (0, 2, 10), (1, 2, 5), (1, 3, 10), (2, 3, 15)],
            0,
            3,
            25,
        );
    }

    #[test]
    fn self_loop_is_inert() {
        check_scenario_all_reprs(3, &[(0, 1, 10), (1, 2, 5), (1, 1, 15)], 0, 2, 5);
    }

    #[test]
    fn flow_needs_cancellation() {
        // the first augmentation routes 0 -> 1 -> 2 -> 3 and saturates (1, 2); the remaining
        // unit only fits if the second path cancels that flow over the reverse credit (2, 1)
        let edges = [
            (0, 1, 1),
            (1, 2, 1),
            (2, 3, 1),
            (0, 4, 1),
            (4, 2, 1),
            (1, 5, 1),
            (5, 3, 1),
        ];
        check_scenario_all_reprs(6, &edges, 0, 3, 2);

        let mut graph = CapacityMatrix::from_edges(6, edges);
        let paths = graph
            .st_flow_keep_changes(0, 3)
            .augmenting_paths()
            .into_iter()
            .map(|a| a.path)
            .collect_vec();
        assert_eq!(paths, vec![vec![0, 1, 2, 3], vec![0, 4, 2, 1, 5, 3]]);
    }

    #[test]
    fn parallel_add_edge_accumulates() {
        let mut split = CapacityMatrix::new(2);
        split.add_edge(0, 1, 5);
        split.add_edge(0, 1, 5);

        let mut joined = CapacityMatrix::new(2);
        joined.add_edge(0, 1, 10);

        assert_eq!(split.max_flow(0, 1), joined.max_flow(0, 1));
    }

    #[test]
    fn zero_capacity_edges_do_not_matter() {
        let edges = [(0, 1, 10), (0, 2, 5), (1, 2, 15), (1, 3, 10), (2, 3, 10)];
        let mut with_zeros = CapacityMatrix::from_edges(4, edges);
        with_zeros.add_edge(0, 3, 0);
        with_zeros.add_edge(3, 0, 0);

        assert_eq!(with_zeros.max_flow(0, 3), 15);
    }

    #[test]
    #[should_panic]
    fn terminals_out_of_range() {
        let mut graph = CapacityMatrix::from_edges(3, [(0, 1, 1u64)]);
        graph.max_flow(0, 3);
    }

    #[test]
    fn source_equals_sink() {
        let edges = [(0, 1, 10u64), (1, 2, 5), (2, 0, 7)];
        let mut graph = CapacityMatrix::from_edges(3, edges);
        let before = graph.edges().collect_vec();

        assert_eq!(graph.max_flow(1, 1), 0);
        assert_eq!(graph.edges().collect_vec(), before);
    }

    #[test]
    fn shortest_paths_first_with_ascending_tie_break() {
        // two hop-minimal paths exist; the BFS must take the one over node 1 first
        let mut graph =
            CapacityMatrix::from_edges(4, [(0, 1, 2u64), (0, 2, 3), (1, 3, 2), (2, 3, 3)]);

        let mut flow = graph.st_flow_keep_changes(0, 3);
        let augmentations = flow.augmenting_paths();

        assert_eq!(augmentations.len(), 2);
        assert_eq!(augmentations[0].path, vec![0, 1, 3]);
        assert_eq!(augmentations[0].bottleneck, 2);
        assert_eq!(augmentations[1].path, vec![0, 2, 3]);
        assert_eq!(augmentations[1].bottleneck, 3);
    }

    #[test]
    fn augmentations_prefer_fewer_arcs() {
        // a direct arc and a two-arc detour: the direct arc must be augmented first
        let mut graph =
            CapacityMatrix::from_edges(3, [(0, 2, 1u64), (0, 1, 1), (1, 2, 1)]);

        let paths = graph
            .st_flow_keep_changes(0, 2)
            .augmenting_paths()
            .into_iter()
            .map(|a| a.path)
            .collect_vec();
        assert_eq!(paths, vec![vec![0, 2], vec![0, 1, 2]]);
    }

    #[test]
    fn undo_restores_capacities() {
        let rng = &mut Pcg64::seed_from_u64(1234);

        for _ in 0..10 {
            let mut graph = CapacityList::uniform_network(rng, 30, 150, 20u64);
            let before = graph.edges().collect_vec();

            let first = graph.max_flow_value(0, 29);
            assert_eq!(graph.edges().collect_vec(), before);

            // restored capacities must reproduce the same flow
            assert_eq!(graph.max_flow_value(0, 29), first);
        }
    }

    #[test]
    fn flow_is_bounded_by_cuts_around_terminals() {
        let rng = &mut Pcg64::seed_from_u64(567);

        for _ in 0..10 {
            let mut graph = CapacityMatrix::uniform_network(rng, 25, 120, 10u64);
            let (s, t) = (0, 24);

            let out_s = graph.out_capacity_of(s);
            let in_t: Capacity = graph
                .vertices()
                .map(|u| graph.capacity_of(u, t))
                .sum();

            let flow = graph.max_flow(s, t);
            assert!(flow <= out_s);
            assert!(flow <= in_t);
        }
    }

    #[test]
    fn representations_agree() {
        let rng = &mut Pcg64::seed_from_u64(31415);

        for n in [10, 20, 40] {
            for m in [2 * n, 5 * n] {
                let edges = UniformNetwork::new()
                    .nodes(n)
                    .edges(m as NumEdges)
                    .max_capacity(15u64)
                    .generate(rng);

                let mut dense = CapacityMatrix::from_edges(n, edges.iter().copied());
                let mut sparse = CapacityList::from_edges(n, edges);

                assert_eq!(dense.max_flow(0, n - 1), sparse.max_flow(0, n - 1));
            }
        }
    }

    #[test]
    fn flow_conservation() {
        let rng = &mut Pcg64::seed_from_u64(99);

        for _ in 0..5 {
            let mut graph = CapacityMatrix::uniform_network(rng, 20, 100, 12u64);
            let original = graph.clone();
            let (s, t) = (0, 19);

            let flow = graph.max_flow(s, t);

            // the flow over (u, v) is the capacity consumed on it; reverse credits show up as
            // negative consumption on the opposite arc
            let net = |u: Node, v: Node| {
                original.capacity_of(u, v) as i64 - graph.capacity_of(u, v) as i64
            };

            for u in graph.vertices() {
                let balance: i64 = graph.vertices().map(|v| net(u, v) - net(v, u)).sum();
                if u == s {
                    assert_eq!(balance, 2 * flow as i64);
                } else if u == t {
                    assert_eq!(balance, -2 * (flow as i64));
                } else {
                    assert_eq!(balance, 0);
                }
            }
        }
    }
}
