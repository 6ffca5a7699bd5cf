//! Route materialization from an external solver's assignment.
//!
//! The solver is a black box; it exposes its solved assignment through the
//! [`SolvedTraversal`] capability set, and [`RouteBuilder`] walks that
//! traversal into the crate's route structures.

mod materialize;
mod traversal;

pub use materialize::RouteBuilder;
pub use traversal::{SequenceTraversal, SolvedTraversal};
