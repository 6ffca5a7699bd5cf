//! Materializes a solver's traversal into routes and the fleet working set.

use std::sync::Arc;

use crate::disruption::{FleetMap, FleetStop, VehicleRow};
use crate::error::Error;
use crate::models::{Problem, Route, RoutePoint, Routing};

use super::SolvedTraversal;

/// One visited node of a walked traversal, with the arc cost to whatever
/// follows it (the next node, or the depot return).
struct WalkedStop {
    node_id: usize,
    arc_to_next: i64,
}

/// Converts a solver's per-vehicle traversal into the two representations
/// the rest of the crate works with: a rich [`Routing`] for reporting and a
/// lightweight [`FleetMap`] for disruption simulation.
///
/// Each vehicle's traversal is walked exactly once; both outputs derive
/// from the same walk. The builder itself is a pure transformation.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use vrp_disruption::builder::{RouteBuilder, SequenceTraversal};
/// use vrp_disruption::models::{Node, Problem};
/// use vrp_disruption::distance::DistanceMatrix;
///
/// let nodes = vec![Node::depot(0, 0), Node::new(1, 3, 4, 10)];
/// let dm = DistanceMatrix::from_rows(vec![vec![0, 5], vec![5, 0]]).unwrap();
/// let problem = Arc::new(Problem::new("tiny", nodes, dm, vec![100]).unwrap());
/// let traversal = SequenceTraversal::new(Arc::clone(&problem), vec![vec![1]]);
///
/// let (routing, map) = RouteBuilder::new(&problem, &traversal).build().unwrap();
/// assert_eq!(routing.routes()[0].load(), 10);
/// assert_eq!(routing.routes()[0].distance(), 10);
/// assert_eq!(map.rows()[0].stops.len(), 2);
/// ```
pub struct RouteBuilder<'a, T: SolvedTraversal> {
    problem: &'a Arc<Problem>,
    traversal: &'a T,
}

impl<'a, T: SolvedTraversal> RouteBuilder<'a, T> {
    /// Creates a builder over the given problem and solved traversal.
    pub fn new(problem: &'a Arc<Problem>, traversal: &'a T) -> Self {
        Self { problem, traversal }
    }

    /// Walks the traversal of every vehicle in the problem's fleet and
    /// produces the rich routing plus the lightweight fleet map.
    ///
    /// Fails with [`Error::InvalidTraversal`] if any vehicle's walk does
    /// not reach its end state within `num_nodes + 1` steps.
    pub fn build(&self) -> Result<(Routing, FleetMap), Error> {
        let num_vehicles = self.problem.num_vehicles();
        let mut routes = Vec::with_capacity(num_vehicles);
        let mut map = FleetMap::new();
        for vehicle_id in 0..num_vehicles {
            let walked = self.walk(vehicle_id)?;
            routes.push(self.materialize_route(vehicle_id, &walked));
            map.push_row(self.materialize_row(vehicle_id, &walked));
        }
        Ok((Routing::new(Arc::clone(self.problem), routes), map))
    }

    /// Walks one vehicle from its start index to its end state, recording
    /// each visited node and the cost of the arc leaving it.
    fn walk(&self, vehicle_id: usize) -> Result<Vec<WalkedStop>, Error> {
        let max_steps = self.problem.num_nodes() + 1;
        let mut stops = Vec::new();
        let mut index = self.traversal.start(vehicle_id);
        while !self.traversal.is_end(index) {
            if stops.len() >= max_steps {
                return Err(Error::InvalidTraversal {
                    vehicle_id,
                    max_steps,
                });
            }
            let next = self.traversal.next(index);
            stops.push(WalkedStop {
                node_id: self.traversal.node_id(index),
                arc_to_next: self.traversal.arc_cost(index, next, vehicle_id),
            });
            index = next;
        }
        Ok(stops)
    }

    /// Builds the rich route: each point captures the vehicle's remaining
    /// capacity after servicing the node and the distance traveled to
    /// reach it. Aggregates cover the full loop, return arc included.
    fn materialize_route(&self, vehicle_id: usize, walked: &[WalkedStop]) -> Route {
        let capacity = self.problem.vehicle_capacity(vehicle_id);
        let mut points = Vec::with_capacity(walked.len());
        let mut load = 0;
        let mut traveled = 0;
        for stop in walked {
            let node = self.problem.node(stop.node_id);
            load += node.demand();
            points.push(RoutePoint {
                node: Arc::clone(node),
                remaining_capacity: capacity - load,
                traveled_distance: traveled,
                vehicle_id,
            });
            traveled += stop.arc_to_next;
        }
        Route::new(vehicle_id, points, load, traveled)
    }

    /// Builds the lightweight row: customer stops carrying the slack the
    /// vehicle has after each delivery, terminated by the synthetic depot
    /// return at full capacity.
    fn materialize_row(&self, vehicle_id: usize, walked: &[WalkedStop]) -> VehicleRow {
        let depot_id = self.problem.depot().id();
        let capacity = self.problem.vehicle_capacity(vehicle_id);
        let total_load: i32 = walked
            .iter()
            .map(|s| self.problem.node(s.node_id).demand())
            .sum();
        let base_slack = if capacity >= total_load {
            capacity - total_load
        } else {
            log::warn!(
                "vehicle {vehicle_id} overloaded by {} units; clamping slack to 0",
                total_load - capacity
            );
            0
        };

        let mut delivered = 0;
        let mut stops = Vec::with_capacity(walked.len() + 1);
        for stop in walked {
            if stop.node_id == depot_id {
                continue;
            }
            delivered += self.problem.node(stop.node_id).demand();
            stops.push(FleetStop::new(stop.node_id, base_slack + delivered));
        }
        stops.push(FleetStop::new(depot_id, capacity));
        VehicleRow::new(vehicle_id, stops)
    }
}
