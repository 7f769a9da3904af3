use std::{cmp::Reverse, collections::BinaryHeap, fmt::Debug};

use log::trace;

use super::*;

/// Earliest arrival times on time-table graphs.
///
/// The "distance" of a node is the earliest point in time it can be reached when leaving the
/// source at the start time; waiting at nodes is always allowed.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let mut graph = GraphTimeTable::new(3);
/// graph.add_scheduled_edge(0, 1, (5, 10, 2)); // departs at 5, 15, 25, ...
/// graph.add_scheduled_edge(1, 2, (0, 4, 1)); // departs at 0, 4, 8, ...
/// graph.add_scheduled_edge(0, 2, (0, 0, 20)); // departs at 0 only
///
/// let times = graph.earliest_arrival(0);
/// assert_eq!(times.distance(1), Distance::Finite(7));
/// assert_eq!(times.distance(2), Distance::Finite(9));
/// assert_eq!(times.path(2), vec![2, 1, 0]);
///
/// let times = graph.earliest_arrival_from(0, 16);
/// assert_eq!(times.distance(2), Distance::Finite(29));
/// ```
pub trait EarliestArrival {
    /// Computes the earliest arrival times at all nodes when leaving `source` at time `0`
    /// ** Panics if `source >= n` **
    fn earliest_arrival_into(&self, source: Node, result: &mut PathVector<Time>) {
        self.earliest_arrival_from_into(source, 0, result);
    }

    /// Computes the earliest arrival times at all nodes when leaving `source` at `start_time`
    /// ** Panics if `source >= n` **
    fn earliest_arrival_from_into(
        &self,
        source: Node,
        start_time: Time,
        result: &mut PathVector<Time>,
    );

    /// Returns the earliest arrival times when leaving `source` at time `0`
    /// ** Panics if `source >= n` **
    fn earliest_arrival(&self, source: Node) -> PathVector<Time> {
        self.earliest_arrival_from(source, 0)
    }

    /// Returns the earliest arrival times when leaving `source` at `start_time`
    /// ** Panics if `source >= n` **
    fn earliest_arrival_from(&self, source: Node, start_time: Time) -> PathVector<Time> {
        let mut result = PathVector::new();
        self.earliest_arrival_from_into(source, start_time, &mut result);
        result
    }
}

impl EarliestArrival for GraphTimeTable {
    fn earliest_arrival_from_into(
        &self,
        source: Node,
        start_time: Time,
        result: &mut PathVector<Time>,
    ) {
        EarliestArrivalSearch::new().run(self, source, start_time, result);
    }
}

/// Reusable working storage of the earliest-arrival search.
///
/// Structurally Dijkstra's algorithm keyed by arrival time: a node is finalized when it is
/// popped for the first time, later (stale) entries are skipped.
#[derive(Clone)]
pub struct EarliestArrivalSearch {
    heap: BinaryHeap<Reverse<(Time, Node)>>,
    finalized: NodeBitSet,
}

impl Debug for EarliestArrivalSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EarliestArrivalSearch")
            .field("heap", &self.heap)
            .field("finalized", &self.finalized.cardinality())
            .finish()
    }
}

impl Default for EarliestArrivalSearch {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            finalized: NodeBitSet::new(0),
        }
    }
}

impl EarliestArrivalSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the earliest arrival times from `source` leaving at `start_time` into `result`
    /// ** Panics if `source >= n` **
    pub fn run(
        &mut self,
        graph: &GraphTimeTable,
        source: Node,
        start_time: Time,
        result: &mut PathVector<Time>,
    ) {
        let n = graph.number_of_nodes();
        result.reset(source, n, start_time);
        self.finalized.reset_scratch(n);
        self.heap.clear();
        self.heap.push(Reverse((start_time, source)));

        while let Some(Reverse((t, u))) = self.heap.pop() {
            if self.finalized.set_bit(u) {
                continue;
            }

            for (v, schedule) in graph.scheduled_neighbors_of(u) {
                // closed for good (or beyond the representable time range)
                let Some(arrival) = schedule.arrival(t) else {
                    continue;
                };

                if Distance::Finite(arrival) < result.dist[v as usize] {
                    result.dist[v as usize] = Distance::Finite(arrival);
                    result.prev[v as usize] = u;
                    self.heap.push(Reverse((arrival, v)));
                }
            }
        }

        trace!(
            "Earliest arrival on n={n} from {source}@{start_time}: {} nodes reached",
            self.finalized.cardinality()
        );
    }
}
