//! Crate error type.

use thiserror::Error;

/// Errors raised while constructing problem data, materializing routes, or
/// simulating a disruption.
///
/// None of these conditions is retried internally; every failure propagates
/// to the caller, which decides whether to abort or re-derive fresh input.
#[derive(Error, Debug)]
pub enum Error {
    /// Instance data is internally inconsistent (matrix/node-count mismatch,
    /// missing or duplicate depot, node ids out of order).
    #[error("malformed instance: {0}")]
    MalformedInstance(String),

    /// A solver traversal failed to reach its end state within the step
    /// bound, indicating an infeasible or corrupted solver result.
    #[error("traversal for vehicle {vehicle_id} did not terminate within {max_steps} steps")]
    InvalidTraversal {
        /// Vehicle whose traversal was being walked.
        vehicle_id: usize,
        /// Step bound that was exhausted (node count + 1).
        max_steps: usize,
    },

    /// The chosen accident node does not appear in any vehicle's stop
    /// sequence; the underlying solution is incomplete or infeasible.
    #[error("node {0} is not serviced by any vehicle")]
    NodeNotRouted(usize),
}
