//! Distance data for routing instances.
//!
//! Provides the dense arc-cost matrix loaded with an instance.

mod matrix;

pub use matrix::DistanceMatrix;
