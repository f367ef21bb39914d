/*!
# Minimum (s, t)-Cuts

Flow-based computation of **minimum edge cuts** in capacitated directed graphs.

## Core concepts
- An **(s, t) edge cut** is a set of arcs whose removal leaves no (s, t)-path; its value is the
  total capacity of those arcs.
- By **max-flow/min-cut duality**, the smallest such value equals the maximum (s, t)-flow, and
  the arcs leaving the residual-reachable side of an exhausted flow form a minimum cut.

The computation runs a change-remembering [`EdmondsKarp`](super::EdmondsKarp) solve, reads the
source side off the residual network, and rolls the capacities back before reporting the cut
against the original graph, which is left exactly as it was.
*/

use stream_bitset::prelude::*;

use super::*;

/// Algorithms for computing minimum (s, t) edge cuts
pub trait MinSTCut: STFlow {
    /// Computes a **minimum (s, t) edge cut** using a flow-based method.
    ///
    /// Returns the value of the cut and the source side: the set of nodes still reachable from
    /// `s` in the residual network of a maximum flow. The graph is restored to its original
    /// capacities before returning.
    ///
    /// By duality the returned value equals [`STFlow::max_flow_value`], which makes this the
    /// natural correctness oracle for the flow solver.
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
    /// let (value, side) = g.min_st_cut(0, 3);
    /// assert_eq!(value, 15);
    /// assert!(side.get_bit(0) && !side.get_bit(3));
    /// ```
    fn min_st_cut(&mut self, s: Node, t: Node) -> (Self::Cap, NodeBitSet) {
        let side = {
            let mut flow = self.st_flow_undo_changes(s, t);
            flow.by_ref().for_each(drop);

            let residual = flow.residual();
            let mut side = residual.vertex_bitset_unset();
            side.set_bits(residual.dfs(s));
            side
        }; // dropping the solver restores the capacities

        let mut value = Self::Cap::zero();
        for u in side.bitmask_stream().iter_set_bits() {
            for CapEdge(_, v, c) in self.out_edges_of(u) {
                if !side.get_bit(v) {
                    value += c;
                }
            }
        }

        (value, side)
    }

    /// Returns the arcs of a minimum (s, t) edge cut together with their capacities: all arcs
    /// leaving the source side. The graph is unchanged afterwards.
    /// ** Panics if `s >= n || t >= n` **
    fn min_st_cut_edges(&mut self, s: Node, t: Node) -> Vec<CapEdge<Self::Cap>> {
        let (_, side) = self.min_st_cut(s, t);

        let mut cut = Vec::new();
        for u in side.bitmask_stream().iter_set_bits() {
            cut.extend(self.out_edges_of(u).filter(|&CapEdge(_, v, _)| !side.get_bit(v)));
        }
        cut
    }
}

impl<G> MinSTCut for G where G: STFlow {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gens::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn cut_on_a_path() {
        let mut graph = CapacityMatrix::from_edges(3, [(0, 1, 7u64), (1, 2, 3)]);
        let (value, side) = graph.min_st_cut(0, 2);

        assert_eq!(value, 3);
        // the bottleneck arc (1, 2) is saturated, so 1 stays on the source side
        assert!(side.get_bit(0) && side.get_bit(1) && !side.get_bit(2));

        assert_eq!(graph.min_st_cut_edges(0, 2), vec![CapEdge(1, 2, 3)]);

        // untouched afterwards
        assert_eq!(graph.capacity_of(0, 1), 7);
        assert_eq!(graph.capacity_of(1, 2), 3);
    }

    #[test]
    fn cut_separates_layered_network() {
        let mut graph = CapacityMatrix::from_edges(
            6,
            [
                (0, 1, 16u64),
                (0, 2, 13),
                (1, 2, 10),
                (1, 3, 12),
                (2, 4, 14),
                (3, 5, 20),
                (4, 5, 4),
            ],
        );

        let cut = graph.min_st_cut_edges(0, 5);
        assert_eq!(cut.iter().map(|e| e.2).sum::<Capacity>(), 16);
        assert_eq!(
            cut.iter().map(|e| e.edge()).collect_vec(),
            vec![Edge(1, 3), Edge(4, 5)]
        );
    }

    #[test]
    fn disconnected_sink_gives_empty_cut() {
        let mut graph = CapacityMatrix::from_edges(4, [(0, 1, 10u64), (2, 3, 5)]);
        let (value, side) = graph.min_st_cut(0, 3);

        assert_eq!(value, 0);
        assert!(side.get_bit(0) && side.get_bit(1));
        assert!(!side.get_bit(2) && !side.get_bit(3));
        assert!(graph.min_st_cut_edges(0, 3).is_empty());
    }

    /// Exhaustive reference: minimum capacity over all vertex bipartitions with `s` on one side
    /// and `t` on the other
    fn brute_force_min_cut<G>(graph: &G, s: Node, t: Node) -> Capacity
    where
        G: CapacitatedAdjacency<Cap = Capacity>,
    {
        let free: Vec<Node> = graph.vertices().filter(|&u| u != s && u != t).collect();
        let mut best = Capacity::MAX;

        for mask in 0u32..(1 << free.len()) {
            let mut side = graph.vertex_bitset_unset();
            side.set_bit(s);
            for (i, &u) in free.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    side.set_bit(u);
                }
            }

            let value = graph
                .edges()
                .filter(|&CapEdge(u, v, _)| side.get_bit(u) && !side.get_bit(v))
                .map(|e| e.2)
                .sum();
            best = best.min(value);
        }

        best
    }

    #[test]
    fn duality_against_brute_force() {
        let rng = &mut Pcg64::seed_from_u64(8128);

        for _ in 0..20 {
            let mut graph = CapacityMatrix::uniform_network(rng, 8, 30, 10u64);
            let (s, t) = (0, 7);

            let reference = brute_force_min_cut(&graph, s, t);
            let (cut, _) = graph.min_st_cut(s, t);
            let flow = graph.max_flow_value(s, t);

            assert_eq!(cut, reference);
            assert_eq!(flow, reference);
        }
    }

    #[test]
    fn duality_on_larger_networks() {
        let rng = &mut Pcg64::seed_from_u64(4321);

        for n in [20, 40] {
            for m in [3 * n, 8 * n] {
                let edges = UniformNetwork::new()
                    .nodes(n)
                    .edges(m as NumEdges)
                    .max_capacity(25u64)
                    .generate(rng);

                let mut dense = CapacityMatrix::from_edges(n, edges.iter().copied());
                let mut sparse = CapacityList::from_edges(n, edges);

                let (cut, _) = dense.min_st_cut(0, n - 1);
                assert_eq!(cut, dense.max_flow_value(0, n - 1));
                assert_eq!(cut, sparse.max_flow_value(0, n - 1));
            }
        }
    }
}
