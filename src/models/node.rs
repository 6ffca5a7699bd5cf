//! Node and route point types.

use std::sync::Arc;

/// A stop in the problem: the depot (id 0) or a customer with a demand.
///
/// Nodes are created once per instance and shared read-only afterwards
/// (the [`Problem`](crate::models::Problem) hands out `Arc<Node>` clones).
/// Only the service flag changes after construction, and only while the
/// problem is being built.
///
/// # Examples
///
/// ```
/// use vrp_disruption::models::Node;
///
/// let depot = Node::depot(0, 0);
/// assert_eq!(depot.id(), 0);
/// assert_eq!(depot.demand(), 0);
///
/// let n = Node::new(3, 4, -2, 17);
/// assert_eq!(n.id(), 3);
/// assert_eq!(n.demand(), 17);
/// assert!(!n.is_serviced());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: usize,
    x: i64,
    y: i64,
    demand: i32,
    is_serviced: bool,
}

impl Node {
    /// Creates a new node. The service flag starts unset.
    pub fn new(id: usize, x: i64, y: i64, demand: i32) -> Self {
        Self {
            id,
            x,
            y,
            demand,
            is_serviced: false,
        }
    }

    /// Creates the depot at the given coordinates (id 0, demand 0).
    pub fn depot(x: i64, y: i64) -> Self {
        Self::new(0, x, y, 0)
    }

    /// Node id (0 = depot).
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> i64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> i64 {
        self.y
    }

    /// Demand at this node (0 for the depot).
    pub fn demand(&self) -> i32 {
        self.demand
    }

    /// Whether this node counts as already serviced. True only for the
    /// depot once the problem has been constructed.
    pub fn is_serviced(&self) -> bool {
        self.is_serviced
    }

    pub(crate) fn mark_serviced(&mut self) {
        self.is_serviced = true;
    }

    /// Euclidean distance to another node.
    pub fn distance_to(&self, other: &Node) -> f64 {
        (self.squared_distance_to(other) as f64).sqrt()
    }

    /// Squared Euclidean distance to another node.
    ///
    /// Exact in integer arithmetic; comparing squared distances orders
    /// nodes identically to comparing the f64 distances without rounding.
    pub fn squared_distance_to(&self, other: &Node) -> i64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// A single serviced stop within a materialized route.
///
/// Records the state of the vehicle at the moment this node was serviced:
/// how much capacity remains and how far the vehicle has traveled to get
/// here. Created once during route materialization and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePoint {
    /// The node being serviced.
    pub node: Arc<Node>,
    /// Vehicle capacity remaining immediately after servicing this node.
    pub remaining_capacity: i32,
    /// Cumulative arc cost from the route start up to arrival here.
    pub traveled_distance: i64,
    /// Vehicle servicing this point.
    pub vehicle_id: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_new() {
        let n = Node::new(2, 10, 20, 5);
        assert_eq!(n.id(), 2);
        assert_eq!(n.x(), 10);
        assert_eq!(n.y(), 20);
        assert_eq!(n.demand(), 5);
        assert!(!n.is_serviced());
    }

    #[test]
    fn test_depot() {
        let d = Node::depot(35, 35);
        assert_eq!(d.id(), 0);
        assert_eq!(d.demand(), 0);
    }

    #[test]
    fn test_distance() {
        let a = Node::new(0, 0, 0, 0);
        let b = Node::new(1, 3, 4, 0);
        assert_eq!(a.squared_distance_to(&b), 25);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_distance_symmetric() {
        let a = Node::new(0, 1, 2, 0);
        let b = Node::new(1, 4, 6, 0);
        assert_eq!(a.squared_distance_to(&b), b.squared_distance_to(&a));
    }

    #[test]
    fn test_mark_serviced() {
        let mut n = Node::depot(0, 0);
        n.mark_serviced();
        assert!(n.is_serviced());
    }

    #[test]
    fn test_route_point_clone_shares_node() {
        let node = Arc::new(Node::new(1, 0, 0, 7));
        let p = RoutePoint {
            node: Arc::clone(&node),
            remaining_capacity: 93,
            traveled_distance: 12,
            vehicle_id: 0,
        };
        let q = p.clone();
        assert!(Arc::ptr_eq(&p.node, &q.node));
        assert_eq!(p, q);
    }
}
