use std::ops::Range;

use itertools::Itertools;

use crate::*;

/// Marker for directed graphs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Directed;

/// Marker for undirected graphs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Undirected;

/// Implemented by the two direction markers [`Directed`] and [`Undirected`]
pub trait Direction {
    /// *true* exactly for [`Undirected`]
    const UNDIRECTED: bool;
}

impl Direction for Directed {
    const UNDIRECTED: bool = false;
}

impl Direction for Undirected {
    const UNDIRECTED: bool = true;
}

/// Associates a graph with its direction
pub trait GraphType {
    type Dir: Direction;

    /// Returns *true* if edges are stored symmetrically
    fn is_undirected() -> bool {
        Self::Dir::UNDIRECTED
    }
}

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns a range over V.
    /// In contrast to an iterator borrowing the graph, the range can be used while the
    /// graph is mutably borrowed.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph.
    /// Undirected edges (and parallel copies) are counted once per insertion.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the (out-)neighbors of a given vertex in insertion order.
    /// Parallel edges yield the neighbor multiple times.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of (outgoing) edges of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the degrees of all nodes
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .map(move |v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over all edges in the graph.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Returns all edges in the graph in sorted order.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn ordered_edges(&self, only_normalized: bool) -> Vec<Edge> {
        self.edges(only_normalized).sorted().collect_vec()
    }
}

/// Adjacency access for graphs carrying a weight on every edge
pub trait WeightedAdjacencyList: AdjacencyList {
    type Weight: Weight;

    /// Returns an iterator over `(v, w)` for all edges `(u, v)` of weight `w` in insertion order
    /// ** Panics if `u >= n` **
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Self::Weight)> + '_;

    /// Returns an iterator over the outgoing weighted edges of a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn weighted_edges_of(
        &self,
        u: Node,
        only_normalized: bool,
    ) -> impl Iterator<Item = WeightedEdge<Self::Weight>> + '_ {
        self.weighted_neighbors_of(u)
            .filter(move |&(v, _)| !only_normalized || u <= v)
            .map(move |(v, w)| WeightedEdge(u, v, w))
    }

    /// Returns an iterator over all weighted edges in the graph.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn weighted_edges(
        &self,
        only_normalized: bool,
    ) -> impl Iterator<Item = WeightedEdge<Self::Weight>> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.weighted_edges_of(u, only_normalized))
    }

    /// Returns all weighted edges in sorted order.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn ordered_weighted_edges(&self, only_normalized: bool) -> Vec<WeightedEdge<Self::Weight>> {
        self.weighted_edges(only_normalized).sorted().collect_vec()
    }

    /// Returns the smallest edge weight in the graph, if there is any edge
    fn min_weight(&self) -> Option<Self::Weight> {
        self.weighted_edges(false).map(|e| e.weight()).min()
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Trait for reusing a graph for another instance
pub trait GraphReset: GraphNew {
    /// Removes all edges and resizes the graph to `n` nodes.
    /// Allocated adjacency storage is kept for reuse where possible.
    fn reset(&mut self, n: NumNodes);
}

/// Provides functions to insert unweighted edges.
///
/// There is no edge removal: edges accumulate until the next [`GraphReset::reset`].
pub trait GraphEdgeEditing: GraphNew {
    /// Adds the edge *(u,v)* to the graph. Parallel edges and self-loops are kept.
    /// ** Panics if `u >= n || v >= n` **
    fn add_edge(&mut self, u: Node, v: Node);

    /// Adds all edges in the collection
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for Edge(u, v) in edges.into_iter().map(|d| d.into()) {
            self.add_edge(u, v);
        }
    }
}

/// Provides functions to insert weighted edges.
pub trait WeightedGraphEdgeEditing: GraphNew + WeightedAdjacencyList {
    /// Adds the edge *(u,v)* with weight *w* to the graph. Parallel edges and self-loops are kept.
    /// ** Panics if `u >= n || v >= n` **
    fn add_weighted_edge(&mut self, u: Node, v: Node, w: Self::Weight);

    /// Adds all edges in the collection
    fn add_weighted_edges(
        &mut self,
        edges: impl IntoIterator<Item = impl Into<WeightedEdge<Self::Weight>>>,
    ) {
        for WeightedEdge(u, v, w) in edges.into_iter().map(|e| e.into()) {
            self.add_weighted_edge(u, v, w);
        }
    }
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch {
    /// Create a graph from a number of nodes and a collection of Edges
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        let mut graph = Self::new(n);
        graph.add_edges(edges);
        graph
    }
}

/// Weighted counterpart of [`GraphFromScratch`]
pub trait WeightedGraphFromScratch: WeightedAdjacencyList {
    /// Create a graph from a number of nodes and a collection of weighted edges
    fn from_weighted_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<WeightedEdge<Self::Weight>>>,
    ) -> Self;
}

impl<G: WeightedGraphEdgeEditing> WeightedGraphFromScratch for G {
    fn from_weighted_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<WeightedEdge<Self::Weight>>>,
    ) -> Self {
        let mut graph = Self::new(n);
        graph.add_weighted_edges(edges);
        graph
    }
}
