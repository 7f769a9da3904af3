/*!
# Time-Table Graphs

A [`GraphTimeTable`] is a directed graph whose edges cannot be taken at arbitrary times.
Every edge carries a [`Schedule`] `(start, period, duration)`: it departs at the times
`start, start + period, start + 2 * period, ...` (only at `start` if `period == 0`) and arrives
`duration` time units after departure.
*/

use crate::{repr::macros::impl_common_graph_ops, testing::test_graph_ops};

use super::*;

/// Points in time and durations
pub type Time = u64;

/// Departure window of a time-table edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Schedule {
    /// First departure
    pub start: Time,
    /// Time between two departures; `0` if the edge departs only once
    pub period: Time,
    /// Traversal time
    pub duration: Time,
}

impl Schedule {
    /// Creates a new schedule
    pub fn new(start: Time, period: Time, duration: Time) -> Self {
        Self {
            start,
            period,
            duration,
        }
    }

    /// Returns the earliest departure at or after time `t`, or `None` if the edge never
    /// departs again (single departure already passed, or the next one is not representable).
    ///
    /// # Examples
    /// ```
    /// use wgraphs::prelude::*;
    ///
    /// let schedule = Schedule::new(3, 5, 1);
    /// assert_eq!(schedule.next_departure(0), Some(3));
    /// assert_eq!(schedule.next_departure(4), Some(8));
    /// assert_eq!(schedule.next_departure(8), Some(8));
    /// assert_eq!(Schedule::new(3, 0, 1).next_departure(4), None);
    /// ```
    pub fn next_departure(&self, t: Time) -> Option<Time> {
        if t <= self.start {
            return Some(self.start);
        }

        if self.period == 0 {
            return None;
        }

        let periods = (t - self.start).div_ceil(self.period);
        periods.checked_mul(self.period)?.checked_add(self.start)
    }

    /// Returns the arrival time when waiting at the tail of the edge from time `t` on
    pub fn arrival(&self, t: Time) -> Option<Time> {
        self.next_departure(t)?.checked_add(self.duration)
    }
}

impl From<(Time, Time, Time)> for Schedule {
    fn from(value: (Time, Time, Time)) -> Self {
        Schedule::new(value.0, value.1, value.2)
    }
}

/// A directed (multi-)graph with scheduled edges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphTimeTable {
    nbs: Vec<Vec<(Node, Schedule)>>,
    num_edges: NumEdges,
}

impl_common_graph_ops!(GraphTimeTable => Directed);

impl GraphTimeTable {
    /// Adds an edge from `u` to `v` following the given schedule.
    /// ** Panics if `u >= n || v >= n` **
    pub fn add_scheduled_edge(&mut self, u: Node, v: Node, schedule: impl Into<Schedule>) {
        assert!((v as usize) < self.nbs.len());
        self.nbs[u as usize].push((v, schedule.into()));
        self.num_edges += 1;
    }

    /// Adds all `(u, v, schedule)` triples of the collection
    pub fn add_scheduled_edges<S: Into<Schedule>>(
        &mut self,
        edges: impl IntoIterator<Item = (Node, Node, S)>,
    ) {
        for (u, v, schedule) in edges {
            self.add_scheduled_edge(u, v, schedule);
        }
    }

    /// Returns an iterator over `(v, schedule)` for all edges leaving `u`
    /// ** Panics if `u >= n` **
    pub fn scheduled_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Schedule)> + '_ {
        self.nbs[u as usize].iter().copied()
    }
}

impl AdjacencyList for GraphTimeTable {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].iter().map(|&(v, _)| v)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }
}

test_graph_ops!(test_graph_time_table, GraphTimeTable, false, 0..1, (GraphNew));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_departure() {
        let schedule = Schedule::new(10, 4, 2);
        let departures = (0..20).map(|t| schedule.next_departure(t).unwrap());
        let expected = [10; 11].into_iter().chain([14, 14, 14, 14, 18, 18, 18, 18, 22]);
        assert!(departures.eq(expected));

        assert_eq!(schedule.arrival(11), Some(16));
    }

    #[test]
    fn single_departure() {
        let schedule = Schedule::new(10, 0, 2);
        assert_eq!(schedule.next_departure(10), Some(10));
        assert_eq!(schedule.arrival(3), Some(12));
        assert_eq!(schedule.next_departure(11), None);
        assert_eq!(schedule.arrival(11), None);
    }

    #[test]
    fn unrepresentable_departure() {
        let schedule = Schedule::new(0, Time::MAX / 2 + 1, 0);
        assert_eq!(schedule.next_departure(Time::MAX / 2 + 2), None);
        assert_eq!(Schedule::new(5, 1, Time::MAX).arrival(6), None);
    }

    #[test]
    fn reset_and_edges() {
        let mut graph = GraphTimeTable::new(3);
        graph.add_scheduled_edges([(0, 1, (0, 5, 1)), (1, 2, (3, 0, 2)), (0, 2, (1, 1, 9))]);

        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.neighbors_of(0).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(
            graph.scheduled_neighbors_of(1).collect::<Vec<_>>(),
            vec![(2, Schedule::new(3, 0, 2))]
        );

        graph.reset(5);
        assert_eq!(graph.number_of_nodes(), 5);
        assert!(graph.is_singleton_graph());
    }
}
