use log::{debug, trace};

use super::*;

/// Eulerian walks (Hierholzer's algorithm) on directed graphs.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let graph = GraphD::from_edges(3, [(0, 1), (1, 2), (2, 0), (0, 2), (2, 0)]);
/// let walk = graph.eulerian_walk();
///
/// // the walk is emitted from its last node back to its first one
/// assert_eq!(walk.len(), 6);
/// assert_eq!(walk.first(), Some(&0));
/// assert_eq!(walk.last(), Some(&0));
/// ```
pub trait EulerianWalk: AdjacencyList {
    /// Checks the degree balance and returns the node an Eulerian walk has to start at:
    /// the unique node with `out = in + 1` or, if all nodes are balanced, node `0`.
    fn eulerian_start(&self) -> GraphResult<Node>;

    /// Writes an Eulerian walk into `sink`, from its last node back to its first one.
    ///
    /// Nothing is written if the degree balance is violated. If the degrees balance but the
    /// edges are not reachable from the start node, the written walk is partial; it covers all
    /// edges exactly if `m + 1` nodes were written. Returns the number of written nodes.
    fn eulerian_walk_into<E: Extend<Node>>(&self, sink: &mut E) -> usize;

    /// Returns an Eulerian walk as described in [`EulerianWalk::eulerian_walk_into`]
    fn eulerian_walk(&self) -> Vec<Node> {
        let mut walk = Vec::new();
        self.eulerian_walk_into(&mut walk);
        walk
    }

    /// Returns an Eulerian walk or an error if the degree balance is violated or the walk
    /// does not cover every edge
    fn try_eulerian_walk(&self) -> GraphResult<Vec<Node>>;
}

impl EulerianWalk for GraphD {
    fn eulerian_start(&self) -> GraphResult<Node> {
        EulerianWalkSearch::new().start_of(self)
    }

    fn eulerian_walk_into<E: Extend<Node>>(&self, sink: &mut E) -> usize {
        EulerianWalkSearch::new().run(self, sink).unwrap_or(0)
    }

    fn try_eulerian_walk(&self) -> GraphResult<Vec<Node>> {
        let mut walk = Vec::new();
        let covered = EulerianWalkSearch::new().run(self, &mut walk)?;

        if self.is_empty() || covered == self.number_of_edges() as usize + 1 {
            Ok(walk)
        } else {
            Err(GraphError::IncompleteWalk {
                covered: covered.saturating_sub(1) as NumEdges,
                total: self.number_of_edges(),
            })
        }
    }
}

/// Reusable working storage of Hierholzer's algorithm.
///
/// The adjacency lists of the graph are consumed from the back through one cursor per node,
/// so the graph itself is never modified.
#[derive(Debug, Clone, Default)]
pub struct EulerianWalkSearch {
    remaining: Vec<NumNodes>,
    in_degrees: Vec<NumNodes>,
    stack: Vec<Node>,
}

impl EulerianWalkSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// See [`EulerianWalk::eulerian_start`]
    pub fn start_of(&mut self, graph: &GraphD) -> GraphResult<Node> {
        graph.in_degrees_into(&mut self.in_degrees);

        let mut start = None;
        let mut end = None;
        for u in graph.vertices() {
            let out_degree = graph.degree_of(u);
            let in_degree = self.in_degrees[u as usize];
            let imbalance = GraphError::DegreeImbalance {
                node: u,
                out_degree,
                in_degree,
            };

            let designated = if out_degree == in_degree {
                continue;
            } else if out_degree == in_degree + 1 {
                &mut start
            } else if in_degree == out_degree + 1 {
                &mut end
            } else {
                return Err(imbalance);
            };

            if designated.replace(u).is_some() {
                return Err(imbalance);
            }
        }

        // with equal sums of in- and out-degrees, `start` exists iff `end` exists
        debug_assert_eq!(start.is_some(), end.is_some());
        Ok(start.unwrap_or(0))
    }

    /// Writes an Eulerian walk of `graph` into `sink` (see [`EulerianWalk::eulerian_walk_into`])
    /// and returns the number of written nodes. Fails without writing anything if the degree
    /// balance is violated.
    pub fn run<E: Extend<Node>>(&mut self, graph: &GraphD, sink: &mut E) -> GraphResult<usize> {
        let start = match self.start_of(graph) {
            Ok(start) => start,
            Err(err) => {
                debug!("No Eulerian walk: {err}");
                return Err(err);
            }
        };

        if graph.is_empty() {
            return Ok(0);
        }

        self.remaining.clear();
        self.remaining.extend(graph.degrees());

        trace!(
            "Eulerian walk on n={} m={} from {start}",
            graph.number_of_nodes(),
            graph.number_of_edges()
        );

        let mut written = 0;
        self.stack.clear();
        self.stack.push(start);
        while let Some(&u) = self.stack.last() {
            let remaining = &mut self.remaining[u as usize];
            if *remaining > 0 {
                *remaining -= 1;
                self.stack.push(graph.neighbors_slice(u)[*remaining as usize]);
            } else {
                self.stack.pop();
                sink.extend(std::iter::once(u));
                written += 1;
            }
        }

        if written != graph.number_of_edges() as usize + 1 {
            debug!(
                "Eulerian walk covers only {} of {} edges",
                written - 1,
                graph.number_of_edges()
            );
        }

        Ok(written)
    }
}
