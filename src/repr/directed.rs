/*!
# Unweighted Directed Graph

[`GraphD`] stores for every node the list of its out-neighbors in insertion order.
The Eulerian walk search ([`EulerianWalk`](crate::algo::EulerianWalk)) consumes these lists
through a per-node cursor and never modifies them.
*/

use crate::{repr::macros::impl_common_graph_ops, testing::test_graph_ops};

use super::*;

/// An unweighted directed (multi-)graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphD {
    nbs: Vec<Vec<Node>>,
    num_edges: NumEdges,
}

impl_common_graph_ops!(GraphD => Directed);

impl GraphD {
    /// Returns the out-neighbors of `u` as a slice in insertion order
    /// ** Panics if `u >= n` **
    pub fn neighbors_slice(&self, u: Node) -> &[Node] {
        &self.nbs[u as usize]
    }

    /// Computes the in-degree of every node into `in_degrees`, overwriting its content
    pub fn in_degrees_into(&self, in_degrees: &mut Vec<NumNodes>) {
        crate::utils::assign(in_degrees, self.number_of_nodes(), 0);
        for v in self.nbs.iter().flatten() {
            in_degrees[*v as usize] += 1;
        }
    }

    /// Returns the in-degree of every node
    pub fn in_degrees(&self) -> Vec<NumNodes> {
        let mut in_degrees = Vec::new();
        self.in_degrees_into(&mut in_degrees);
        in_degrees
    }
}

impl AdjacencyList for GraphD {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }
}

impl GraphEdgeEditing for GraphD {
    fn add_edge(&mut self, u: Node, v: Node) {
        assert!((v as usize) < self.nbs.len());
        self.nbs[u as usize].push(v);
        self.num_edges += 1;
    }
}

test_graph_ops!(
    test_graph_d,
    GraphD,
    false,
    0..1,
    (GraphNew, GraphReset, AdjacencyList)
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_degrees() {
        let graph = GraphD::from_edges(4, [(0, 1), (2, 1), (1, 1), (3, 0), (0, 1)]);
        assert_eq!(graph.in_degrees(), vec![1, 4, 0, 0]);
        assert_eq!(graph.neighbors_slice(0), &[1, 1]);
        assert_eq!(graph.max_degree(), 2);
    }

    #[test]
    #[should_panic]
    fn edge_out_of_range() {
        let mut graph = GraphD::new(2);
        graph.add_edge(0, 2);
    }
}
