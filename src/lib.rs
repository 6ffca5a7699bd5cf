//! # vrp-disruption
//!
//! Turns a solved capacitated vehicle-routing assignment into domain-level
//! route structures and simulates the operational impact of an in-transit
//! disruption at a stop: which demand becomes unservable, and how the rest
//! of the fleet must curtail its remaining travel.
//!
//! The routing optimizer itself is an external collaborator consumed
//! through the [`builder::SolvedTraversal`] contract; instance loading and
//! presentation are likewise out of scope.
//!
//! ## Modules
//!
//! - [`models`] — Problem instance, nodes, materialized routes
//! - [`distance`] — Dense integer arc-cost matrix
//! - [`builder`] — Solver traversal contract and route materialization
//! - [`disruption`] — Fleet map and accident simulation
//! - [`proximity`] — Proximity ranking for reassignment policies

pub mod builder;
pub mod distance;
pub mod disruption;
pub mod error;
pub mod models;
pub mod proximity;

pub use error::Error;
