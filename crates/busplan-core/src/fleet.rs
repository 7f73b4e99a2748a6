//! Bus types and fleet limits

use serde::{Deserialize, Serialize};

/// A kind of bus that can be assigned to routes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusType {
    /// Display name, e.g. `"Type-1"`
    pub name: String,
    /// Passengers carried per trip
    pub capacity: f64,
    /// Buses of this type available in any one shift
    pub fleet_size: u32,
    /// Cost of one bus making one trip
    pub cost: f64,
}

impl BusType {
    pub fn new(name: impl Into<String>, capacity: f64, fleet_size: u32, cost: f64) -> Self {
        Self {
            name: name.into(),
            capacity,
            fleet_size,
            cost,
        }
    }

    /// Passengers one bus of this type carries over `trips` trips.
    pub fn seats_for_trips(&self, trips: f64) -> f64 {
        self.capacity * trips
    }
}

/// The set of bus types available to the planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fleet {
    types: Vec<BusType>,
}

impl Fleet {
    pub fn new(types: Vec<BusType>) -> Self {
        Self { types }
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn types(&self) -> &[BusType] {
        &self.types
    }

    /// Largest per-trip capacity of any type (0 for an empty fleet).
    pub fn max_capacity(&self) -> f64 {
        self.types.iter().map(|t| t.capacity).fold(0.0, f64::max)
    }

    /// Total buses available per shift across all types.
    pub fn total_fleet_size(&self) -> u64 {
        self.types.iter().map(|t| t.fleet_size as u64).sum()
    }

    /// Passengers the whole fleet carries in one shift at one trip per bus.
    pub fn single_trip_capacity(&self) -> f64 {
        self.types
            .iter()
            .map(|t| t.capacity * t.fleet_size as f64)
            .sum()
    }
}

impl Default for Fleet {
    /// Two bus types: 600 standard buses (60 seats, 100 per trip) and
    /// 90 large buses (90 seats, 150 per trip).
    fn default() -> Self {
        Self::new(vec![
            BusType::new("Type-1", 60.0, 600, 100.0),
            BusType::new("Type-2", 90.0, 90, 150.0),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fleet() {
        let fleet = Fleet::default();
        assert_eq!(fleet.len(), 2);
        assert_eq!(fleet.max_capacity(), 90.0);
        assert_eq!(fleet.total_fleet_size(), 690);
        assert_eq!(fleet.single_trip_capacity(), 600.0 * 60.0 + 90.0 * 90.0);
    }

    #[test]
    fn test_seats_for_trips() {
        let bus = BusType::new("Type-2", 90.0, 90, 150.0);
        assert_eq!(bus.seats_for_trips(2.5), 225.0);
    }
}
