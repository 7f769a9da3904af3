use std::fmt::{Debug, Display};

use crate::Node;

/// An unweighted edge is defined by two nodes/endpoints.
/// It is up to the graph whether an Edge is directed or not.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// A weighted edge `(u, v)` with weight `w`.
///
/// Ordering is lexicographic on `(u, v, w)`, so sorting an edge list groups parallel edges
/// with the lightest one first.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeightedEdge<W>(pub Node, pub Node, pub W);

/// We limit the number of edges to `2^32 - 1`.
/// CHANGE it to `u64` if this does not suffice (which it usually should).
pub type NumEdges = u32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl<W: Display> Display for WeightedEdge<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{}:{})", self.0, self.1, self.2)
    }
}

impl<W: Debug> Debug for WeightedEdge<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{}:{:?})", self.0, self.1, self.2)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }

    /// Attaches a weight to the edge
    pub fn with_weight<W>(&self, w: W) -> WeightedEdge<W> {
        WeightedEdge(self.0, self.1, w)
    }
}

impl<W: Copy> WeightedEdge<W> {
    /// Returns the weight of the edge
    pub fn weight(&self) -> W {
        self.2
    }

    /// Drops the weight
    pub fn edge(&self) -> Edge {
        Edge(self.0, self.1)
    }

    /// Normalizes the endpoints such that the smaller one comes first; the weight is kept
    pub fn normalized(&self) -> Self {
        WeightedEdge(self.0.min(self.1), self.0.max(self.1), self.2)
    }

    /// Reverses the edge by switching the endpoints; the weight is kept
    pub fn reverse(&self) -> Self {
        WeightedEdge(self.1, self.0, self.2)
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

impl<W> From<(Node, Node, W)> for WeightedEdge<W> {
    fn from(value: (Node, Node, W)) -> Self {
        WeightedEdge(value.0, value.1, value.2)
    }
}

impl<W: Copy> From<&(Node, Node, W)> for WeightedEdge<W> {
    fn from(value: &(Node, Node, W)) -> Self {
        WeightedEdge(value.0, value.1, value.2)
    }
}

impl<W: Copy> From<&WeightedEdge<W>> for WeightedEdge<W> {
    fn from(value: &WeightedEdge<W>) -> Self {
        *value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(format!("{}", Edge(3, 1)), "(3,1)");
        assert_eq!(format!("{:?}", WeightedEdge(3, 1, -4i64)), "(3,1:-4)");
        assert_eq!(format!("{}", Edge(3, 1).with_weight(7u32)), "(3,1:7)");
    }

    #[test]
    fn normalize_keeps_weight() {
        let e = WeightedEdge(5, 2, 9i32);
        assert_eq!(e.normalized(), WeightedEdge(2, 5, 9));
        assert_eq!(e.reverse(), WeightedEdge(2, 5, 9));
        assert_eq!(e.edge(), Edge(5, 2));
        assert!(!e.is_loop());
        assert!(Edge(4, 4).is_loop());
    }
}
