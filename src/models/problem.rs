//! Routing problem instance.

use std::sync::Arc;

use crate::distance::DistanceMatrix;
use crate::error::Error;

use super::Node;

/// An immutable CVRP instance: nodes, demands, arc costs, and the fleet's
/// per-vehicle capacities.
///
/// Nodes are stored in id order (index == id); node 0 is the depot and is
/// marked serviced at construction. The instance never changes after
/// construction, so routes and simulations share it freely.
///
/// # Examples
///
/// ```
/// use vrp_disruption::models::{Node, Problem};
/// use vrp_disruption::distance::DistanceMatrix;
///
/// let nodes = vec![Node::depot(0, 0), Node::new(1, 3, 4, 10)];
/// let dm = DistanceMatrix::from_rows(vec![vec![0, 5], vec![5, 0]]).unwrap();
/// let problem = Problem::new("tiny", nodes, dm, vec![100]).unwrap();
///
/// assert_eq!(problem.num_nodes(), 2);
/// assert_eq!(problem.num_vehicles(), 1);
/// assert_eq!(problem.depot().id(), 0);
/// assert_eq!(problem.distance(0, 1), 5);
/// ```
#[derive(Debug)]
pub struct Problem {
    name: String,
    nodes: Vec<Arc<Node>>,
    distances: DistanceMatrix,
    vehicle_capacities: Vec<i32>,
}

impl Problem {
    /// Builds an instance from its parts.
    ///
    /// Fails with [`Error::MalformedInstance`] if the matrix dimension does
    /// not match the node count, or if node ids are not exactly `0..n` in
    /// order (which also guarantees a unique depot at index 0).
    pub fn new(
        name: impl Into<String>,
        mut nodes: Vec<Node>,
        distances: DistanceMatrix,
        vehicle_capacities: Vec<i32>,
    ) -> Result<Self, Error> {
        if distances.size() != nodes.len() {
            return Err(Error::MalformedInstance(format!(
                "distance matrix is {}x{0} but instance has {} nodes",
                distances.size(),
                nodes.len()
            )));
        }
        if nodes.is_empty() {
            return Err(Error::MalformedInstance("instance has no depot".into()));
        }
        for (index, node) in nodes.iter().enumerate() {
            if node.id() != index {
                return Err(Error::MalformedInstance(format!(
                    "node at position {index} has id {}",
                    node.id()
                )));
            }
        }
        nodes[0].mark_serviced();

        Ok(Self {
            name: name.into(),
            nodes: nodes.into_iter().map(Arc::new).collect(),
            distances,
            vehicle_capacities,
        })
    }

    /// Instance name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All nodes in id order (index 0 is the depot).
    pub fn nodes(&self) -> &[Arc<Node>] {
        &self.nodes
    }

    /// Returns the node with the given id.
    ///
    /// # Panics
    ///
    /// Panics if the id is out of range.
    pub fn node(&self, id: usize) -> &Arc<Node> {
        &self.nodes[id]
    }

    /// The depot node (id 0).
    pub fn depot(&self) -> &Arc<Node> {
        &self.nodes[0]
    }

    /// Number of nodes, including the depot.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of customers (excluding the depot).
    pub fn num_customers(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Fleet size.
    pub fn num_vehicles(&self) -> usize {
        self.vehicle_capacities.len()
    }

    /// Capacity of the given vehicle.
    ///
    /// # Panics
    ///
    /// Panics if the vehicle id is out of range.
    pub fn vehicle_capacity(&self, vehicle_id: usize) -> i32 {
        self.vehicle_capacities[vehicle_id]
    }

    /// Arc cost from node `from` to node `to`.
    pub fn distance(&self, from: usize, to: usize) -> i64 {
        self.distances.get(from, to)
    }

    /// The full arc-cost matrix.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_nodes() -> Vec<Node> {
        vec![
            Node::depot(0, 0),
            Node::new(1, 3, 4, 10),
            Node::new(2, 6, 8, 20),
        ]
    }

    fn sample_matrix() -> DistanceMatrix {
        DistanceMatrix::from_rows(vec![
            vec![0, 5, 10],
            vec![5, 0, 5],
            vec![10, 5, 0],
        ])
        .expect("square")
    }

    #[test]
    fn test_problem_new() {
        let problem =
            Problem::new("c1_2_1", sample_nodes(), sample_matrix(), vec![200, 200]).expect("valid");
        assert_eq!(problem.name(), "c1_2_1");
        assert_eq!(problem.num_nodes(), 3);
        assert_eq!(problem.num_customers(), 2);
        assert_eq!(problem.num_vehicles(), 2);
        assert_eq!(problem.vehicle_capacity(1), 200);
        assert_eq!(problem.distance(1, 2), 5);
    }

    #[test]
    fn test_depot_marked_serviced() {
        let problem = Problem::new("t", sample_nodes(), sample_matrix(), vec![200]).expect("valid");
        assert!(problem.depot().is_serviced());
        assert!(!problem.node(1).is_serviced());
    }

    #[test]
    fn test_matrix_size_mismatch() {
        let dm = DistanceMatrix::new(2);
        let err = Problem::new("t", sample_nodes(), dm, vec![200]).unwrap_err();
        assert!(matches!(err, Error::MalformedInstance(_)));
    }

    #[test]
    fn test_ids_out_of_order() {
        let nodes = vec![Node::depot(0, 0), Node::new(2, 1, 1, 5), Node::new(1, 2, 2, 5)];
        let err = Problem::new("t", nodes, sample_matrix(), vec![200]).unwrap_err();
        assert!(matches!(err, Error::MalformedInstance(_)));
    }

    #[test]
    fn test_missing_depot() {
        let nodes = vec![Node::new(1, 1, 1, 5)];
        let dm = DistanceMatrix::new(1);
        let err = Problem::new("t", nodes, dm, vec![200]).unwrap_err();
        assert!(matches!(err, Error::MalformedInstance(_)));
    }

    #[test]
    fn test_empty_instance() {
        let err = Problem::new("t", vec![], DistanceMatrix::new(0), vec![]).unwrap_err();
        assert!(matches!(err, Error::MalformedInstance(_)));
    }
}
