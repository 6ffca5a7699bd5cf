//! In-transit disruption simulation.
//!
//! Models an accident at a customer stop: the affected vehicle is
//! withdrawn, its unvisited tail becomes stranded demand, and the rest of
//! the fleet is curtailed by distance budget and proximity.

mod fleet;
mod simulator;

pub use fleet::{FleetMap, FleetStop, VehicleRow};
pub use simulator::{simulate_accident, simulate_accident_at, DisruptionReport, StrandedStop};
