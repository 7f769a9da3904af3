use crate::{repr::macros::impl_common_graph_ops, testing::test_graph_ops};

use super::*;

/// A weighted undirected (multi-)graph.
///
/// Every edge `{u, v}` is stored in the adjacency lists of both endpoints (a self-loop once)
/// but counted once in [`GraphEdgeOrder::number_of_edges`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphWU<W> {
    nbs: Vec<Vec<(Node, W)>>,
    num_edges: NumEdges,
}

impl_common_graph_ops!(GraphWU<W: Weight> => Undirected);

impl<W: Weight> AdjacencyList for GraphWU<W> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].iter().map(|&(v, _)| v)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }
}

impl<W: Weight> WeightedAdjacencyList for GraphWU<W> {
    type Weight = W;

    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, W)> + '_ {
        self.nbs[u as usize].iter().copied()
    }
}

impl<W: Weight> WeightedGraphEdgeEditing for GraphWU<W> {
    fn add_weighted_edge(&mut self, u: Node, v: Node, w: W) {
        assert!((v as usize) < self.nbs.len());
        self.nbs[u as usize].push((v, w));
        if u != v {
            self.nbs[v as usize].push((u, w));
        }
        self.num_edges += 1;
    }
}

test_graph_ops!(
    test_graph_wu,
    GraphWU<i32>,
    true,
    -20i32..=20,
    (GraphNew, WeightedGraphReset, WeightedAdjacencyList)
);
