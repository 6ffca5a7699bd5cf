//! Solver traversal contract.

use std::sync::Arc;

use crate::models::Problem;

/// The capability set an external solver exposes over its solved assignment.
///
/// The crate is agnostic to how the solver reached its assignment; it only
/// walks the traversal, vehicle by vehicle, from `start` until `is_end`.
/// Indices are opaque solver handles, mapped to node ids on demand.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use vrp_disruption::builder::{SequenceTraversal, SolvedTraversal};
/// use vrp_disruption::models::{Node, Problem};
/// use vrp_disruption::distance::DistanceMatrix;
///
/// let nodes = vec![Node::depot(0, 0), Node::new(1, 3, 4, 10)];
/// let dm = DistanceMatrix::from_rows(vec![vec![0, 5], vec![5, 0]]).unwrap();
/// let problem = Arc::new(Problem::new("tiny", nodes, dm, vec![100]).unwrap());
///
/// let t = SequenceTraversal::new(Arc::clone(&problem), vec![vec![1]]);
/// let mut index = t.start(0);
/// assert_eq!(t.node_id(index), 0);
/// index = t.next(index);
/// assert_eq!(t.node_id(index), 1);
/// assert!(t.is_end(t.next(index)));
/// ```
pub trait SolvedTraversal {
    /// First index of the given vehicle's traversal (the depot departure).
    fn start(&self, vehicle_id: usize) -> usize;

    /// Returns `true` if the index is the vehicle's end state (the depot
    /// return).
    fn is_end(&self, index: usize) -> bool;

    /// The index following `index` in the traversal.
    fn next(&self, index: usize) -> usize;

    /// The node serviced at `index`. End indices map to the depot.
    fn node_id(&self, index: usize) -> usize;

    /// Arc cost between two traversal indices for the given vehicle.
    fn arc_cost(&self, from: usize, to: usize, vehicle_id: usize) -> i64;
}

/// A [`SolvedTraversal`] backed by explicit per-vehicle visit sequences.
///
/// Adapts solvers that report plain node sequences rather than an index
/// walk. Each vehicle's path is the depot followed by its customer visits;
/// one extra index slot per vehicle encodes the depot return. Arc costs
/// come from the problem's distance matrix.
#[derive(Debug)]
pub struct SequenceTraversal {
    problem: Arc<Problem>,
    paths: Vec<Vec<usize>>,
    offsets: Vec<usize>,
}

impl SequenceTraversal {
    /// Creates a traversal from per-vehicle customer visit sequences
    /// (depot not included; an empty sequence is an unused vehicle).
    pub fn new(problem: Arc<Problem>, visits: Vec<Vec<usize>>) -> Self {
        let depot_id = problem.depot().id();
        let mut paths = Vec::with_capacity(visits.len());
        let mut offsets = Vec::with_capacity(visits.len());
        let mut offset = 0;
        for sequence in visits {
            let mut path = Vec::with_capacity(sequence.len() + 1);
            path.push(depot_id);
            path.extend(sequence);
            offsets.push(offset);
            offset += path.len() + 1;
            paths.push(path);
        }
        Self {
            problem,
            paths,
            offsets,
        }
    }

    /// Number of vehicles covered by this traversal.
    pub fn num_vehicles(&self) -> usize {
        self.paths.len()
    }

    fn locate(&self, index: usize) -> (usize, usize) {
        let vehicle = match self.offsets.binary_search(&index) {
            Ok(v) => v,
            Err(insert) => insert - 1,
        };
        (vehicle, index - self.offsets[vehicle])
    }
}

impl SolvedTraversal for SequenceTraversal {
    fn start(&self, vehicle_id: usize) -> usize {
        self.offsets[vehicle_id]
    }

    fn is_end(&self, index: usize) -> bool {
        let (vehicle, pos) = self.locate(index);
        pos >= self.paths[vehicle].len()
    }

    fn next(&self, index: usize) -> usize {
        index + 1
    }

    fn node_id(&self, index: usize) -> usize {
        let (vehicle, pos) = self.locate(index);
        self.paths[vehicle]
            .get(pos)
            .copied()
            .unwrap_or_else(|| self.problem.depot().id())
    }

    fn arc_cost(&self, from: usize, to: usize, _vehicle_id: usize) -> i64 {
        self.problem.distance(self.node_id(from), self.node_id(to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::models::Node;

    fn sample_problem() -> Arc<Problem> {
        let nodes = vec![
            Node::depot(0, 0),
            Node::new(1, 1, 0, 10),
            Node::new(2, 2, 0, 20),
            Node::new(3, 3, 0, 30),
        ];
        let dm = DistanceMatrix::from_rows(vec![
            vec![0, 1, 2, 3],
            vec![1, 0, 1, 2],
            vec![2, 1, 0, 1],
            vec![3, 2, 1, 0],
        ])
        .expect("square");
        Arc::new(Problem::new("t", nodes, dm, vec![100, 100]).expect("valid"))
    }

    #[test]
    fn test_walks_both_vehicles() {
        let t = SequenceTraversal::new(sample_problem(), vec![vec![1, 2], vec![3]]);
        assert_eq!(t.num_vehicles(), 2);

        let mut ids = Vec::new();
        for vehicle in 0..2 {
            let mut index = t.start(vehicle);
            while !t.is_end(index) {
                ids.push(t.node_id(index));
                index = t.next(index);
            }
        }
        assert_eq!(ids, vec![0, 1, 2, 0, 3]);
    }

    #[test]
    fn test_end_maps_to_depot() {
        let t = SequenceTraversal::new(sample_problem(), vec![vec![1], vec![]]);
        let mut index = t.start(0);
        index = t.next(index);
        let end = t.next(index);
        assert!(t.is_end(end));
        assert_eq!(t.node_id(end), 0);
        // Return arc is priced back to the depot.
        assert_eq!(t.arc_cost(index, end, 0), 1);
    }

    #[test]
    fn test_unused_vehicle() {
        let t = SequenceTraversal::new(sample_problem(), vec![vec![], vec![3]]);
        let start = t.start(0);
        assert!(!t.is_end(start));
        assert_eq!(t.node_id(start), 0);
        assert!(t.is_end(t.next(start)));
    }
}
