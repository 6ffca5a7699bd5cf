//! Accident simulation over the lightweight fleet map.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::models::Problem;

use super::FleetMap;

/// A stop rendered unservable by an accident, with the demand that goes
/// undelivered there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrandedStop {
    /// Node left without service.
    pub node_id: usize,
    /// Undelivered demand. Zero for the accident stop itself, which the
    /// vehicle had already reached when the incident occurred.
    pub demand: i32,
}

/// The operational impact of one simulated accident.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisruptionReport {
    /// Node where the accident occurred.
    pub accident_node: usize,
    /// Total demand stranded by the accident (the forced-zero first stop
    /// excluded).
    pub accident_demand: i32,
    /// The unvisited tail of the affected vehicle's route, in visiting
    /// order, starting at the accident stop.
    pub stranded: Vec<StrandedStop>,
}

/// Simulates an accident at a uniformly chosen customer node.
///
/// The depot is never selected. Everything else is as
/// [`simulate_accident_at`]; supply a seeded `rng` to make a trial
/// reproducible.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use rand::{rngs::StdRng, SeedableRng};
/// use vrp_disruption::builder::{RouteBuilder, SequenceTraversal};
/// use vrp_disruption::disruption::simulate_accident;
/// use vrp_disruption::distance::DistanceMatrix;
/// use vrp_disruption::models::{Node, Problem};
///
/// let nodes = vec![Node::depot(0, 0), Node::new(1, 1, 0, 10), Node::new(2, 2, 0, 20)];
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0, 1, 2],
///     vec![1, 0, 1],
///     vec![2, 1, 0],
/// ]).unwrap();
/// let problem = Arc::new(Problem::new("demo", nodes, dm, vec![100]).unwrap());
/// let traversal = SequenceTraversal::new(Arc::clone(&problem), vec![vec![1, 2]]);
/// let (_, mut map) = RouteBuilder::new(&problem, &traversal).build().unwrap();
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let report = simulate_accident(&mut map, &problem, &mut rng).unwrap();
/// assert!(report.accident_node >= 1 && report.accident_node <= 2);
/// ```
pub fn simulate_accident<R: Rng>(
    map: &mut FleetMap,
    problem: &Problem,
    rng: &mut R,
) -> Result<DisruptionReport, Error> {
    let accident_node = rng.random_range(1..problem.num_nodes());
    simulate_accident_at(map, problem, accident_node)
}

/// Simulates an accident at the given customer node, mutating `map` into
/// the post-disruption fleet state.
///
/// The affected vehicle (the first row containing the node; feasible
/// assignments service each customer exactly once) is withdrawn entirely,
/// and its unvisited tail is reported as stranded. Every other vehicle is
/// then curtailed twice:
///
/// 1. by distance budget — each row loses stops from its front until it
///    has consumed as much travel as the affected vehicle had at the
///    moment of the accident (a deliberate approximation that does not
///    check whether the removed stops lie on the blocked path), and
/// 2. by proximity — stops at least as far from the accident as the depot
///    is are dropped, keeping only stops usefully close to the incident.
///
/// The simulation is not idempotent: it consumes `map`, and re-running it
/// on the mutated map compounds the curtailment. Callers wanting
/// independent trials must clone the pre-disruption map each time.
///
/// Fails with [`Error::NodeNotRouted`] if no row services the node.
pub fn simulate_accident_at(
    map: &mut FleetMap,
    problem: &Problem,
    accident_node: usize,
) -> Result<DisruptionReport, Error> {
    let depot_id = problem.depot().id();

    let mut located = None;
    for (row_index, row) in map.rows().iter().enumerate() {
        if let Some(position) = row.stops.iter().position(|s| s.node_id == accident_node) {
            located = Some((row_index, position));
            break;
        }
    }
    let (affected, hit) = located.ok_or(Error::NodeNotRouted(accident_node))?;

    // Travel the affected vehicle had already used when the incident
    // occurred: the arcs between successive stops up to the accident stop.
    // Zero when the accident hits the first stop.
    let row = map.remove_row(affected);
    let consumed_distance: i64 = row
        .stops
        .windows(2)
        .take(hit)
        .map(|pair| problem.distance(pair[0].node_id, pair[1].node_id))
        .sum();

    let mut stranded = Vec::new();
    let mut accident_demand = 0;
    for (offset, stop) in row.stops[hit..].iter().enumerate() {
        if stop.node_id == depot_id {
            continue;
        }
        let demand = if offset == 0 {
            0
        } else {
            problem.node(stop.node_id).demand()
        };
        accident_demand += demand;
        stranded.push(StrandedStop {
            node_id: stop.node_id,
            demand,
        });
    }

    curtail_by_distance(map, problem, consumed_distance);
    curtail_by_proximity(map, problem, accident_node);
    map.retain_rows(|row| !row.stops.is_empty());

    Ok(DisruptionReport {
        accident_node,
        accident_demand,
        stranded,
    })
}

/// Removes stops from the front of every row until the row has consumed
/// the same travel distance the affected vehicle had, always leaving at
/// least one stop. Bounded by row length, never by distance convergence.
fn curtail_by_distance(map: &mut FleetMap, problem: &Problem, consumed_distance: i64) {
    for row in map.rows_mut() {
        let mut running = 0;
        let mut removed = 0;
        while running < consumed_distance && row.stops.len() - removed > 1 {
            running += problem.distance(
                row.stops[removed].node_id,
                row.stops[removed + 1].node_id,
            );
            removed += 1;
        }
        row.stops.drain(..removed);
    }
}

/// Drops every stop at least as far from the accident as the depot is,
/// preserving visiting order. The synthetic depot return stop sits exactly
/// at the limit and is dropped with everything beyond it.
fn curtail_by_proximity(map: &mut FleetMap, problem: &Problem, accident_node: usize) {
    let depot_id = problem.depot().id();
    let limit = problem.distance(depot_id, accident_node);
    for row in map.rows_mut() {
        row.stops
            .retain(|stop| problem.distance(stop.node_id, accident_node) < limit);
    }
}
