/// Every graph should implement `GraphNew`, `GraphReset` and one of the adjacency traits.
///
/// Usage: `test_graph_ops!(module_name, GraphType, undirected, weight_range, (Traits...))`
/// where `weight_range` is only sampled by the `WeightedAdjacencyList` tests.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ty, $undirected:literal, $weights:expr, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{ops::*, repr::*, testing::test_graph_ops, *};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            /// Creates a list of `m` random edges for nodes `0..n`; duplicates and loops are kept
            #[allow(dead_code)]
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Vec<Edge> {
                (0..m)
                    .map(|_| Edge(rng.random_range(0..n), rng.random_range(0..n)))
                    .collect_vec()
            }

            $(
                test_graph_ops!($graph, $undirected, $weights => $trait);
            )*
        }
    };
    ($graph:ty, $undirected:literal, $weights:expr => GraphNew) => {
        #[test]
        fn graph_new() {
            for n in 0..50 {
                let graph = <$graph>::new(n);

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);
                assert_eq!(graph.is_empty(), n == 0);

                assert_eq!(graph.vertices_range().len(), n as usize);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                assert!(graph.vertices().all(|u| graph.degree_of(u) == 0));
            }
        }
    };
    ($graph:ty, $undirected:literal, $weights:expr => GraphReset) => {
        #[test]
        fn graph_reset() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);
            let mut graph = <$graph>::new(10);

            for n in [10 as NumNodes, 3, 25, 25, 1] {
                let old_n = graph.number_of_nodes();
                for Edge(u, v) in random_edges(rng, old_n, old_n * 3) {
                    graph.add_edge(u, v);
                }
                assert!(!graph.is_singleton_graph());

                graph.reset(n);

                assert_eq!(graph.number_of_nodes(), n);
                assert!(graph.is_singleton_graph());
                assert!(graph.vertices().all(|u| graph.neighbors_of(u).next().is_none()));
            }
        }
    };
    ($graph:ty, $undirected:literal, $weights:expr => WeightedGraphReset) => {
        #[test]
        fn weighted_graph_reset() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);
            let mut graph = <$graph>::new(10);

            for n in [10 as NumNodes, 3, 25, 25, 1] {
                let old_n = graph.number_of_nodes();
                for Edge(u, v) in random_edges(rng, old_n, old_n * 3) {
                    graph.add_weighted_edge(u, v, rng.random_range($weights));
                }
                assert_eq!(graph.number_of_edges(), old_n * 3);

                graph.reset(n);

                assert_eq!(graph.number_of_nodes(), n);
                assert!(graph.is_singleton_graph());
                assert!(graph.weighted_edges(false).next().is_none());
            }
        }
    };
    ($graph:ty, $undirected:literal, $weights:expr => AdjacencyList) => {
        #[test]
        fn test_adjacency_list() {
            assert!(!$undirected);

            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m as NumEdges);

                        let mut adj_list: Vec<Vec<Node>> = vec![Vec::new(); n as usize];
                        for &Edge(u, v) in &edges {
                            adj_list[u as usize].push(v);
                        }

                        let graph = <$graph>::from_edges(n, edges.iter());

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges(), m);
                        assert_eq!(graph.edges(false).count(), m as usize);

                        let mut sorted_edges = edges.clone();
                        sorted_edges.sort_unstable();
                        assert_eq!(graph.ordered_edges(false), sorted_edges);

                        for u in 0..n {
                            assert_eq!(graph.neighbors_of(u).collect_vec(), adj_list[u as usize]);
                            assert_eq!(graph.degree_of(u) as usize, adj_list[u as usize].len());
                        }
                    }
                }
            }
        }
    };
    ($graph:ty, $undirected:literal, $weights:expr => WeightedAdjacencyList) => {
        #[test]
        fn test_weighted_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m in [n * 2, n * 5] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m as NumEdges)
                            .into_iter()
                            .map(|e| e.with_weight(rng.random_range($weights)))
                            .collect_vec();

                        let mut adj_list = vec![Vec::new(); n as usize];
                        for &WeightedEdge(u, v, w) in &edges {
                            adj_list[u as usize].push((v, w));
                            if $undirected && u != v {
                                adj_list[v as usize].push((u, w));
                            }
                        }

                        let graph = <$graph>::from_weighted_edges(n, edges.iter());

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges(), m);

                        for u in 0..n {
                            assert_eq!(
                                graph.weighted_neighbors_of(u).collect_vec(),
                                adj_list[u as usize]
                            );
                            assert_eq!(
                                graph.neighbors_of(u).collect_vec(),
                                adj_list[u as usize].iter().map(|&(v, _)| v).collect_vec()
                            );
                            assert_eq!(graph.degree_of(u) as usize, adj_list[u as usize].len());
                        }

                        let mut expected = edges.clone();
                        if $undirected {
                            expected.iter_mut().for_each(|e| *e = e.normalized());
                        }
                        expected.sort_unstable();
                        assert_eq!(graph.ordered_weighted_edges($undirected), expected);
                        assert_eq!(graph.min_weight(), edges.iter().map(|e| e.weight()).min());
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
