//! Domain model types for solved routing instances.
//!
//! Provides the immutable problem description (nodes, demands, arc costs,
//! fleet capacities) and the materialized route structures built from a
//! solver's assignment.

mod node;
mod problem;
mod route;

pub use node::{Node, RoutePoint};
pub use problem::Problem;
pub use route::{Route, Routing};
