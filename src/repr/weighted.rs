/*!
# Weighted Directed Graphs

[`WeightedDigraph`] stores for every node its outgoing `(target, weight)` pairs in insertion
order. The second type parameter states whether negative weights are allowed:

- [`GraphWD`] accepts arbitrary weights,
- [`GraphWDP`] rejects negative weights on insertion.

Both share the same storage; converting between them moves the adjacency lists.
*/

use std::marker::PhantomData;

use crate::{error::*, repr::macros::impl_common_graph_ops, testing::test_graph_ops};

use super::*;

/// A weighted directed (multi-)graph; `S` states whether weights may be negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedDigraph<W, S> {
    nbs: Vec<Vec<(Node, W)>>,
    num_edges: NumEdges,
    _sign: PhantomData<S>,
}

/// Weighted directed graph allowing positive and negative edge weights
pub type GraphWD<W> = WeightedDigraph<W, Signed>;

/// Weighted directed graph restricted to nonnegative edge weights
pub type GraphWDP<W> = WeightedDigraph<W, NonNegative>;

impl_common_graph_ops!(WeightedDigraph<W: Weight, S: WeightSign> => Directed, { _sign: PhantomData });

impl<W: Weight, S: WeightSign> WeightedDigraph<W, S> {
    /// Returns the outgoing `(target, weight)` pairs of `u` in insertion order
    /// ** Panics if `u >= n` **
    pub fn weighted_neighbors_slice(&self, u: Node) -> &[(Node, W)] {
        &self.nbs[u as usize]
    }

    /// Adds the edge *(u,v)* with weight *w* unless the weight is invalid for this graph,
    /// ie. negative in a [`GraphWDP`].
    /// ** Panics if `u >= n || v >= n` **
    pub fn try_add_weighted_edge(&mut self, u: Node, v: Node, w: W) -> GraphResult<()> {
        if S::NONNEGATIVE && w < W::zero() {
            return Err(GraphError::NegativeWeight { u, v });
        }

        assert!((v as usize) < self.nbs.len());
        self.nbs[u as usize].push((v, w));
        self.num_edges += 1;
        Ok(())
    }

    /// Removes all edges leaving `u`
    pub(crate) fn clear_weighted_edges_of(&mut self, u: Node) {
        self.num_edges -= self.nbs[u as usize].len() as NumEdges;
        self.nbs[u as usize].clear();
    }

    fn with_sign<T: WeightSign>(self) -> WeightedDigraph<W, T> {
        WeightedDigraph {
            nbs: self.nbs,
            num_edges: self.num_edges,
            _sign: PhantomData,
        }
    }
}

impl<W: Weight> GraphWD<W> {
    /// Converts into a graph restricted to nonnegative weights.
    ///
    /// Fails with the first edge (in node order) carrying a negative weight.
    pub fn try_into_nonnegative(self) -> GraphResult<GraphWDP<W>> {
        if let Some(WeightedEdge(u, v, _)) = self
            .weighted_edges(false)
            .find(|e| e.weight() < W::zero())
        {
            return Err(GraphError::NegativeWeight { u, v });
        }

        Ok(self.with_sign())
    }
}

impl<W: Weight> GraphWDP<W> {
    /// Drops the nonnegativity guarantee
    pub fn into_signed(self) -> GraphWD<W> {
        self.with_sign()
    }
}

impl<W: Weight, S: WeightSign> AdjacencyList for WeightedDigraph<W, S> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].iter().map(|&(v, _)| v)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }
}

impl<W: Weight, S: WeightSign> WeightedAdjacencyList for WeightedDigraph<W, S> {
    type Weight = W;

    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, W)> + '_ {
        self.nbs[u as usize].iter().copied()
    }
}

impl<W: Weight, S: WeightSign> WeightedGraphEdgeEditing for WeightedDigraph<W, S> {
    /// ** Panics if `u >= n || v >= n` or if `w < 0` in a [`GraphWDP`] **
    fn add_weighted_edge(&mut self, u: Node, v: Node, w: W) {
        if let Err(err) = self.try_add_weighted_edge(u, v, w) {
            panic!("{err}");
        }
    }
}

test_graph_ops!(
    test_graph_wd,
    GraphWD<i64>,
    false,
    -20i64..=20,
    (GraphNew, WeightedGraphReset, WeightedAdjacencyList)
);

test_graph_ops!(
    test_graph_wdp,
    GraphWDP<u32>,
    false,
    0u32..=20,
    (GraphNew, WeightedGraphReset, WeightedAdjacencyList)
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reject_negative_weights() {
        let mut graph = GraphWDP::<i32>::new(3);
        graph.add_weighted_edge(0, 1, 0);
        assert_eq!(
            graph.try_add_weighted_edge(1, 2, -1),
            Err(GraphError::NegativeWeight { u: 1, v: 2 })
        );
        assert_eq!(graph.number_of_edges(), 1);

        let mut signed = GraphWD::<i32>::new(3);
        assert!(signed.try_add_weighted_edge(1, 2, -1).is_ok());
    }

    #[test]
    #[should_panic(expected = "negative weight")]
    fn panic_on_negative_weight() {
        let mut graph = GraphWDP::<i64>::new(2);
        graph.add_weighted_edge(0, 1, -5);
    }

    #[test]
    fn convert_sign() {
        let graph = GraphWD::<i32>::from_weighted_edges(3, [(0, 1, 4), (1, 2, 0), (2, 0, 7)]);
        let graph = graph.try_into_nonnegative().unwrap();
        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.weighted_neighbors_slice(0), &[(1, 4)]);

        let mut graph = graph.into_signed();
        graph.add_weighted_edge(2, 1, -3);
        assert_eq!(
            graph.try_into_nonnegative(),
            Err(GraphError::NegativeWeight { u: 2, v: 1 })
        );
    }
}
