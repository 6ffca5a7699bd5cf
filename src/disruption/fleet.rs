//! Lightweight per-vehicle stop sequences used by the accident simulator.

use serde::{Deserialize, Serialize};

/// One stop in a vehicle's lightweight sequence: the node and the slack
/// (free capacity) the vehicle has immediately after servicing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetStop {
    /// Node being serviced (depot id for the synthetic return stop).
    pub node_id: usize,
    /// Free capacity after this stop; non-negative by construction.
    pub slack: i32,
}

impl FleetStop {
    /// Creates a stop.
    pub fn new(node_id: usize, slack: i32) -> Self {
        Self { node_id, slack }
    }
}

/// A vehicle's customer stops in visiting order, terminated by a synthetic
/// depot return stop carrying the vehicle's full capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRow {
    /// Owning vehicle.
    pub vehicle_id: usize,
    /// Stops in visiting order.
    pub stops: Vec<FleetStop>,
}

impl VehicleRow {
    /// Creates a row for the given vehicle.
    pub fn new(vehicle_id: usize, stops: Vec<FleetStop>) -> Self {
        Self { vehicle_id, stops }
    }

    /// Returns `true` if this row contains a stop at the given node.
    pub fn contains(&self, node_id: usize) -> bool {
        self.stops.iter().any(|s| s.node_id == node_id)
    }
}

/// The fleet's working set for one disruption simulation.
///
/// A disposable, destructively-mutated structure: a single simulation run
/// consumes it, and repeated independent trials each need a fresh clone of
/// the pre-disruption map.
///
/// # Examples
///
/// ```
/// use vrp_disruption::disruption::{FleetMap, FleetStop, VehicleRow};
///
/// let mut map = FleetMap::new();
/// map.push_row(VehicleRow::new(0, vec![
///     FleetStop::new(1, 40),
///     FleetStop::new(0, 100),
/// ]));
///
/// let snapshot = map.clone();
/// assert_eq!(map, snapshot);
/// assert!(map.rows()[0].contains(1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetMap {
    rows: Vec<VehicleRow>,
}

impl FleetMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a vehicle's row; rows keep fleet order.
    pub fn push_row(&mut self, row: VehicleRow) {
        self.rows.push(row);
    }

    /// Rows in fleet order.
    pub fn rows(&self) -> &[VehicleRow] {
        &self.rows
    }

    /// Mutable access to the rows.
    pub fn rows_mut(&mut self) -> &mut [VehicleRow] {
        &mut self.rows
    }

    /// Removes and returns the row at the given position.
    pub fn remove_row(&mut self, index: usize) -> VehicleRow {
        self.rows.remove(index)
    }

    /// Keeps only rows satisfying the predicate, preserving fleet order.
    pub fn retain_rows<F: FnMut(&VehicleRow) -> bool>(&mut self, keep: F) {
        self.rows.retain(keep);
    }

    /// Returns the row for the given vehicle, if still present.
    pub fn row_for_vehicle(&self, vehicle_id: usize) -> Option<&VehicleRow> {
        self.rows.iter().find(|r| r.vehicle_id == vehicle_id)
    }

    /// Position of the first row containing the given node, scanning in
    /// fleet order. For a feasible assignment every customer appears in
    /// exactly one row, so the first match is the only match.
    pub fn row_containing(&self, node_id: usize) -> Option<usize> {
        self.rows.iter().position(|r| r.contains(node_id))
    }

    /// Number of rows still in service.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if no rows remain.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_map() -> FleetMap {
        let mut map = FleetMap::new();
        map.push_row(VehicleRow::new(
            0,
            vec![FleetStop::new(1, 30), FleetStop::new(2, 50), FleetStop::new(0, 100)],
        ));
        map.push_row(VehicleRow::new(
            1,
            vec![FleetStop::new(3, 80), FleetStop::new(0, 100)],
        ));
        map
    }

    #[test]
    fn test_row_containing() {
        let map = sample_map();
        assert_eq!(map.row_containing(2), Some(0));
        assert_eq!(map.row_containing(3), Some(1));
        assert_eq!(map.row_containing(9), None);
    }

    #[test]
    fn test_row_for_vehicle() {
        let mut map = sample_map();
        assert!(map.row_for_vehicle(1).is_some());
        map.remove_row(1);
        assert!(map.row_for_vehicle(1).is_none());
        assert_eq!(map.num_rows(), 1);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let map = sample_map();
        let mut copy = map.clone();
        copy.rows_mut()[0].stops.clear();
        assert_ne!(map, copy);
        assert_eq!(map.rows()[0].stops.len(), 3);
    }

    #[test]
    fn test_retain_rows() {
        let mut map = sample_map();
        map.retain_rows(|r| !r.stops.is_empty());
        assert_eq!(map.num_rows(), 2);
        map.rows_mut()[0].stops.clear();
        map.retain_rows(|r| !r.stops.is_empty());
        assert_eq!(map.num_rows(), 1);
        assert_eq!(map.rows()[0].vehicle_id, 1);
    }
}
