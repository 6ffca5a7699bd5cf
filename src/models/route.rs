//! Materialized route and fleet-wide routing types.

use std::sync::Arc;

use super::{Problem, RoutePoint};

/// An ordered sequence of serviced stops assigned to one vehicle.
///
/// The first point is the depot departure (full capacity, zero traveled
/// distance). Aggregate load and distance cover the whole loop, including
/// the return arc to the depot. Read-only once materialized.
#[derive(Debug, Clone)]
pub struct Route {
    vehicle_id: usize,
    points: Vec<RoutePoint>,
    load: i32,
    distance: i64,
}

impl Route {
    /// Creates a route from materialized points and aggregates.
    pub fn new(vehicle_id: usize, points: Vec<RoutePoint>, load: i32, distance: i64) -> Self {
        Self {
            vehicle_id,
            points,
            load,
            distance,
        }
    }

    /// Vehicle assigned to this route.
    pub fn vehicle_id(&self) -> usize {
        self.vehicle_id
    }

    /// The stops in visiting order.
    pub fn points(&self) -> &[RoutePoint] {
        &self.points
    }

    /// Number of points, counting the depot departure.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if this route has no points at all.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns `true` if this route services at least one customer.
    pub fn serves_customers(&self) -> bool {
        self.points.iter().any(|p| p.node.id() != 0)
    }

    /// Node ids in visiting order.
    pub fn node_ids(&self) -> Vec<usize> {
        self.points.iter().map(|p| p.node.id()).collect()
    }

    /// Total demand serviced by this route.
    pub fn load(&self) -> i32 {
        self.load
    }

    /// Total distance of the full loop, depot to depot.
    pub fn distance(&self) -> i64 {
        self.distance
    }

    /// Returns the point the vehicle is servicing after traveling `elapsed`
    /// distance: the first point reached at or beyond that distance, or the
    /// final point if the whole route lies behind it.
    ///
    /// `None` only for a route with no points.
    pub fn position_at(&self, elapsed: i64) -> Option<&RoutePoint> {
        self.points
            .iter()
            .find(|p| p.traveled_distance >= elapsed)
            .or_else(|| self.points.last())
    }
}

/// A full solved assignment: the shared problem plus one route per vehicle.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use vrp_disruption::models::{Node, Problem, Route, RoutePoint, Routing};
/// use vrp_disruption::distance::DistanceMatrix;
///
/// let nodes = vec![Node::depot(0, 0), Node::new(1, 3, 4, 10)];
/// let dm = DistanceMatrix::from_rows(vec![vec![0, 5], vec![5, 0]]).unwrap();
/// let problem = Arc::new(Problem::new("tiny", nodes, dm, vec![100]).unwrap());
///
/// let points = vec![
///     RoutePoint {
///         node: Arc::clone(problem.depot()),
///         remaining_capacity: 100,
///         traveled_distance: 0,
///         vehicle_id: 0,
///     },
///     RoutePoint {
///         node: Arc::clone(problem.node(1)),
///         remaining_capacity: 90,
///         traveled_distance: 5,
///         vehicle_id: 0,
///     },
/// ];
/// let routing = Routing::new(Arc::clone(&problem), vec![Route::new(0, points, 10, 10)]);
///
/// assert_eq!(routing.total_load(), 10);
/// assert_eq!(routing.total_distance(), 10);
/// assert_eq!(routing.route_servicing(1).unwrap().vehicle_id(), 0);
/// ```
#[derive(Debug)]
pub struct Routing {
    problem: Arc<Problem>,
    routes: Vec<Route>,
}

impl Routing {
    /// Creates a routing over the given problem and routes.
    pub fn new(problem: Arc<Problem>, routes: Vec<Route>) -> Self {
        Self { problem, routes }
    }

    /// The underlying problem instance.
    pub fn problem(&self) -> &Arc<Problem> {
        &self.problem
    }

    /// All routes, indexed by vehicle.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Number of routes (fleet size).
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Returns the route servicing the given node, if any.
    ///
    /// Every customer appears in exactly one route for a feasible
    /// assignment, so the first match is the only match.
    pub fn route_servicing(&self, node_id: usize) -> Option<&Route> {
        self.routes
            .iter()
            .find(|route| route.points().iter().any(|p| p.node.id() == node_id))
    }

    /// Total distance across all routes.
    pub fn total_distance(&self) -> i64 {
        self.routes.iter().map(Route::distance).sum()
    }

    /// Total demand serviced across all routes.
    pub fn total_load(&self) -> i32 {
        self.routes.iter().map(Route::load).sum()
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
            Node::new(1, 3, 4, 10),
            Node::new(2, 6, 8, 20),
        ];
        let dm = DistanceMatrix::from_rows(vec![
            vec![0, 5, 10],
            vec![5, 0, 5],
            vec![10, 5, 0],
        ])
        .expect("square");
        Arc::new(Problem::new("t", nodes, dm, vec![100, 100]).expect("valid"))
    }

    fn point(problem: &Arc<Problem>, id: usize, cap: i32, dist: i64, vehicle: usize) -> RoutePoint {
        RoutePoint {
            node: Arc::clone(problem.node(id)),
            remaining_capacity: cap,
            traveled_distance: dist,
            vehicle_id: vehicle,
        }
    }

    fn sample_routing() -> Routing {
        let problem = sample_problem();
        let r0 = Route::new(
            0,
            vec![
                point(&problem, 0, 100, 0, 0),
                point(&problem, 1, 90, 5, 0),
            ],
            10,
            10,
        );
        let r1 = Route::new(
            1,
            vec![
                point(&problem, 0, 100, 0, 1),
                point(&problem, 2, 80, 10, 1),
            ],
            20,
            20,
        );
        Routing::new(problem, vec![r0, r1])
    }

    #[test]
    fn test_route_accessors() {
        let routing = sample_routing();
        let route = &routing.routes()[0];
        assert_eq!(route.vehicle_id(), 0);
        assert_eq!(route.len(), 2);
        assert!(route.serves_customers());
        assert_eq!(route.node_ids(), vec![0, 1]);
        assert_eq!(route.load(), 10);
        assert_eq!(route.distance(), 10);
    }

    #[test]
    fn test_position_at() {
        let routing = sample_routing();
        let route = &routing.routes()[0];
        assert_eq!(route.position_at(0).expect("point").node.id(), 0);
        assert_eq!(route.position_at(3).expect("point").node.id(), 1);
        assert_eq!(route.position_at(5).expect("point").node.id(), 1);
        // Past the end of the route: still at the last recorded point.
        assert_eq!(route.position_at(999).expect("point").node.id(), 1);
    }

    #[test]
    fn test_position_at_empty() {
        let route = Route::new(0, vec![], 0, 0);
        assert!(route.position_at(0).is_none());
        assert!(route.is_empty());
        assert!(!route.serves_customers());
    }

    #[test]
    fn test_route_servicing() {
        let routing = sample_routing();
        assert_eq!(routing.route_servicing(1).expect("route").vehicle_id(), 0);
        assert_eq!(routing.route_servicing(2).expect("route").vehicle_id(), 1);
        assert!(routing.route_servicing(99).is_none());
    }

    #[test]
    fn test_totals() {
        let routing = sample_routing();
        assert_eq!(routing.total_distance(), 30);
        assert_eq!(routing.total_load(), 30);
    }
}
