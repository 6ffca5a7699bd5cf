//! Proximity ranking of route points around a target node.
//!
//! A primitive for reassignment policies: given candidate stops pulled
//! from materialized routes, order them by how attractive they are for
//! absorbing demand near a target. Not used by the simulator itself.

use crate::models::{Node, RoutePoint};

/// Ranks candidate points by ascending Euclidean distance from their node
/// to `target`, breaking ties by descending remaining capacity (among
/// equidistant candidates, the one with the most slack ranks first).
///
/// Pure: inputs are left untouched and the result is a fresh ordering.
/// Distances are compared as exact integer squares, so ties are exact.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use vrp_disruption::models::{Node, RoutePoint};
/// use vrp_disruption::proximity::rank_by_proximity;
///
/// let target = Node::new(9, 0, 0, 0);
/// let near = RoutePoint {
///     node: Arc::new(Node::new(1, 1, 0, 5)),
///     remaining_capacity: 10,
///     traveled_distance: 0,
///     vehicle_id: 0,
/// };
/// let far = RoutePoint {
///     node: Arc::new(Node::new(2, 5, 0, 5)),
///     remaining_capacity: 50,
///     traveled_distance: 0,
///     vehicle_id: 1,
/// };
///
/// let ranked = rank_by_proximity(&[far, near], &target);
/// assert_eq!(ranked[0].node.id(), 1);
/// ```
pub fn rank_by_proximity(points: &[RoutePoint], target: &Node) -> Vec<RoutePoint> {
    let mut ranked = points.to_vec();
    ranked.sort_by(|a, b| {
        a.node
            .squared_distance_to(target)
            .cmp(&b.node.squared_distance_to(target))
            .then_with(|| b.remaining_capacity.cmp(&a.remaining_capacity))
    });
    ranked
}
