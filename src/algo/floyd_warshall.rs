use log::{debug, trace};

use super::*;

/// Computes the distances between all pairs of nodes of `graph` into `result`
/// (Floyd-Warshall).
///
/// Parallel edges are collapsed to their minimum weight, nonnegative self-loops are ignored.
/// A pair `(i, j)` ends up unbounded if some node on a negative cycle is reachable from `i`
/// and reaches `j`, or if `j` is reachable from a node whose distance from `i` fell below
/// the range of the weight type.
pub(crate) fn floyd_warshall_into<G>(graph: &G, result: &mut PathMatrix<G::Weight>)
where
    G: WeightedAdjacencyList,
{
    let n = graph.number_of_nodes();
    trace!("Floyd-Warshall on n={n}");

    result.reset(n);
    for u in graph.vertices() {
        let uu = result.index(u, u);
        result.dist[uu] = Distance::zero();
    }

    for WeightedEdge(u, v, w) in graph.weighted_edges(false) {
        let uv = result.index(u, v);
        let w = Distance::Finite(w);
        if w < result.dist[uv] {
            result.dist[uv] = w;
            result.prev[uv] = u;
        }
    }

    for k in graph.vertices() {
        let kk = result.index(k, k);
        let on_negative_cycle = result.dist[kk].is_negative();

        for i in graph.vertices() {
            let ik = result.dist[result.index(i, k)];
            if !ik.is_reachable() {
                continue;
            }

            for j in graph.vertices() {
                let kj = result.index(k, j);
                let dkj = result.dist[kj];
                if !dkj.is_reachable() {
                    continue;
                }

                let ij = result.index(i, j);
                if on_negative_cycle || ik.is_unbounded() || dkj.is_unbounded() {
                    result.dist[ij] = Distance::NegInfinity;
                } else {
                    let dij = ik + dkj;
                    if dij < result.dist[ij] {
                        result.dist[ij] = dij;
                        result.prev[ij] = result.prev[kj];
                    }
                }
            }
        }
    }

    close_negative_cycles(graph, result);
    close_unbounded_rows(graph, result);
}

/// Marks `(i, j)` unbounded for every `k` with a negative cycle through it that is reachable
/// from `i` and reaches `j`
fn close_negative_cycles<G>(graph: &G, result: &mut PathMatrix<G::Weight>)
where
    G: WeightedAdjacencyList,
{
    let mut unbounded_cycles = 0;
    for k in graph.vertices() {
        if !result.dist[result.index(k, k)].is_negative() {
            continue;
        }
        unbounded_cycles += 1;

        for i in graph.vertices() {
            if !result.dist[result.index(i, k)].is_reachable() {
                continue;
            }

            for j in graph.vertices() {
                if result.dist[result.index(k, j)].is_reachable() {
                    let ij = result.index(i, j);
                    result.dist[ij] = Distance::NegInfinity;
                }
            }
        }
    }

    if unbounded_cycles > 0 {
        debug!(
            "Floyd-Warshall: {unbounded_cycles} nodes on negative cycles, {} pairs unbounded",
            result.dist.iter().filter(|d| d.is_unbounded()).count()
        );
    }
}

/// Closes every row under reachability: `(i, j)` becomes unbounded if `j` is reachable from
/// some `k` with `(i, k)` unbounded
fn close_unbounded_rows<G>(graph: &G, result: &mut PathMatrix<G::Weight>)
where
    G: WeightedAdjacencyList,
{
    let mut stack = Vec::new();
    for i in graph.vertices() {
        stack.extend(
            graph
                .vertices()
                .filter(|&k| result.dist[result.index(i, k)].is_unbounded()),
        );

        while let Some(k) = stack.pop() {
            for j in graph.neighbors_of(k) {
                let ij = result.index(i, j);
                if !result.dist[ij].is_unbounded() {
                    result.dist[ij] = Distance::NegInfinity;
                    stack.push(j);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_parallel_edges_and_loops() {
        let graph = GraphWD::<i32>::from_weighted_edges(
            3,
            [(0, 1, 7), (0, 1, 2), (0, 1, 5), (1, 1, 4), (1, 2, 1), (2, 2, 0)],
        );
        let mut matrix = PathMatrix::new();
        floyd_warshall_into(&graph, &mut matrix);

        assert_eq!(matrix.distance(0, 1), Distance::Finite(2));
        assert_eq!(matrix.distance(0, 2), Distance::Finite(3));
        assert_eq!(matrix.distance(1, 1), Distance::Finite(0));
        assert_eq!(matrix.predecessor(1, 1), None);
        assert_eq!(matrix.predecessor(2, 2), None);
        assert_eq!(matrix.distance(2, 0), Distance::Infinity);
        assert_eq!(matrix.path(0, 2), vec![2, 1, 0]);
    }

    #[test]
    fn negative_cycle_closure() {
        // the cycle 3 -> 4 -> 3 is only reached late in the node order and leads back to 0
        let graph = GraphWD::<i64>::from_weighted_edges(
            6,
            [
                (0, 1, 1),
                (1, 2, 1),
                (2, 3, 1),
                (3, 4, -3),
                (4, 3, 1),
                (4, 0, 5),
                (5, 5, 0),
            ],
        );
        let mut matrix = PathMatrix::new();
        floyd_warshall_into(&graph, &mut matrix);

        for i in 0..5 {
            for j in 0..5 {
                assert_eq!(matrix.distance(i, j), Distance::NegInfinity, "({i},{j})");
                assert!(matrix.path(i, j).is_empty());
            }
            assert_eq!(matrix.distance(i, 5), Distance::Infinity);
            assert_eq!(matrix.distance(5, i), Distance::Infinity);
        }
        assert_eq!(matrix.distance(5, 5), Distance::Finite(0));
        assert_eq!(matrix.path(5, 5), vec![5]);
    }

    #[test]
    fn underflow_closes_rows() {
        // 0 -> 3 -> 2 sums below i8::MIN; the same step k = 3 yields a finite
        // (0, 1) = -100 + 27 that only the row closure marks unbounded
        let graph = GraphWD::<i8>::from_weighted_edges(4, [(0, 3, -100), (3, 2, -100), (2, 1, 127)]);
        let mut matrix = PathMatrix::new();
        floyd_warshall_into(&graph, &mut matrix);

        assert_eq!(matrix.distance(0, 0), Distance::Finite(0));
        assert_eq!(matrix.distance(0, 1), Distance::NegInfinity);
        assert_eq!(matrix.distance(0, 2), Distance::NegInfinity);
        assert_eq!(matrix.distance(0, 3), Distance::Finite(-100));
        assert_eq!(matrix.distance(3, 1), Distance::Finite(27));
        assert_eq!(matrix.distance(1, 0), Distance::Infinity);

        let paths = graph.shortest_distances(0);
        for v in graph.vertices() {
            assert_eq!(paths.distance(v), matrix.distance(0, v), "0 -> {v}");
        }
    }

    #[test]
    fn empty_graph() {
        let mut matrix = PathMatrix::<u8>::new();
        floyd_warshall_into(&GraphWDP::<u8>::new(0), &mut matrix);
        assert_eq!(matrix.number_of_nodes(), 0);
    }
}
