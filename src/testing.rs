/// Every capacity representation should pass the same contract tests
macro_rules! test_capacity_ops {
    ($env:ident, $graph:ty) => {
        #[cfg(test)]
        mod $env {
            use crate::{edge::*, gens::*, node::*, ops::*, repr::*};
            use itertools::Itertools;
            use rand::SeedableRng;
            use rand_pcg::Pcg64Mcg;

            #[test]
            fn graph_new() {
                for n in 1..50 {
                    let graph = <$graph>::new(n);

                    assert_eq!(graph.number_of_nodes(), n);
                    assert_eq!(graph.number_of_edges(), 0);
                    assert!(graph.is_singleton());

                    assert_eq!(graph.vertices_range().len(), n as usize);
                    assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                    assert_eq!(graph.edges().count(), 0);
                }
            }

            #[test]
            #[should_panic]
            fn graph_new_empty() {
                let _ = <$graph>::new(0);
            }

            #[test]
            #[should_panic]
            fn add_edge_out_of_range() {
                let mut graph = <$graph>::new(3);
                graph.add_edge(0, 3, 1);
            }

            #[test]
            fn add_edge_accumulates() {
                let mut graph = <$graph>::new(4);
                graph.add_edge(0, 1, 5);
                graph.add_edge(0, 1, 5);

                let mut single = <$graph>::new(4);
                single.add_edge(0, 1, 10);

                assert_eq!(graph.capacity_of(0, 1), single.capacity_of(0, 1));
                assert_eq!(graph.number_of_edges(), 1);
            }

            #[test]
            fn self_loops_are_dropped() {
                let mut graph = <$graph>::new(3);
                graph.add_edge(1, 1, 15);
                graph.add_edge(0, 1, 10);

                assert_eq!(graph.number_of_edges(), 1);
                for u in graph.vertices() {
                    assert_eq!(graph.capacity_of(u, u), 0);
                    assert!(!graph.has_edge(u, u));
                }
                assert_eq!(graph.neighbors_of(1).collect_vec(), vec![]);
            }

            #[test]
            fn zero_capacity_is_inert() {
                let mut graph = <$graph>::new(3);
                graph.add_edge(0, 1, 0);

                assert_eq!(graph.number_of_edges(), 0);
                assert!(!graph.has_edge(0, 1));
                assert_eq!(graph.neighbors_of(0).collect_vec(), vec![]);
            }

            #[test]
            fn set_capacity_tracks_edges() {
                let mut graph = <$graph>::new(3);
                graph.add_edge(0, 1, 7);
                assert_eq!(graph.number_of_edges(), 1);

                graph.set_capacity(0, 1, 0);
                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.neighbors_of(0).collect_vec(), vec![]);

                graph.set_capacity(1, 0, 3);
                assert_eq!(graph.number_of_edges(), 1);
                assert_eq!(graph.capacity_of(1, 0), 3);
                assert_eq!(graph.degree_of(1), 1);
            }

            #[test]
            fn neighbors_sorted_and_positive() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [10 as NumNodes, 20, 50] {
                    for m in [n, n * 3, n * 8] {
                        let edges = UniformNetwork::new()
                            .nodes(n)
                            .edges(m as NumEdges)
                            .max_capacity(50u64)
                            .generate(rng);

                        let mut reference = vec![vec![0u64; n as usize]; n as usize];
                        for CapEdge(u, v, c) in edges.iter().copied() {
                            reference[u as usize][v as usize] += c;
                        }

                        let graph = <$graph>::from_edges(n, edges);

                        for u in 0..n {
                            let expected = (0..n)
                                .filter(|&v| reference[u as usize][v as usize] > 0)
                                .collect_vec();
                            assert_eq!(graph.neighbors_of(u).collect_vec(), expected);
                            assert_eq!(graph.degree_of(u) as usize, expected.len());

                            for v in 0..n {
                                assert_eq!(
                                    graph.capacity_of(u, v),
                                    reference[u as usize][v as usize]
                                );
                            }

                            assert_eq!(
                                graph.out_capacity_of(u),
                                reference[u as usize].iter().sum::<u64>()
                            );
                        }

                        let positive = reference.iter().flatten().filter(|&&c| c > 0).count();
                        assert_eq!(graph.number_of_edges() as usize, positive);
                        assert_eq!(graph.edges().count(), positive);
                    }
                }
            }
        }
    };
}

pub(crate) use test_capacity_ops;
