//! Assignment problem data
//!
//! Defines the input of a fleet assignment: the routes to serve and the
//! fleet to serve them with.

use super::AssignmentError;
use busplan_core::{BusType, Fleet, Route, Shift};

/// Routes plus the fleet available to serve them.
#[derive(Debug, Clone)]
pub struct AssignmentProblem {
    pub routes: Vec<Route>,
    pub fleet: Fleet,
}

impl AssignmentProblem {
    pub fn new(routes: Vec<Route>, fleet: Fleet) -> Self {
        Self { routes, fleet }
    }

    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    pub fn num_bus_types(&self) -> usize {
        self.fleet.len()
    }

    /// Check that the inputs form a well-posed model.
    ///
    /// Rejects an empty route set or fleet, non-finite or negative demand and
    /// trip factors, non-positive capacities and negative costs.
    pub fn validate(&self) -> Result<(), AssignmentError> {
        if self.routes.is_empty() {
            return Err(AssignmentError::ModelInvalid("no routes to plan".into()));
        }
        if self.fleet.is_empty() {
            return Err(AssignmentError::ModelInvalid("fleet has no bus types".into()));
        }

        for bus in self.fleet.types() {
            if !bus.capacity.is_finite() || bus.capacity <= 0.0 {
                return Err(AssignmentError::ModelInvalid(format!(
                    "bus type '{}' has capacity {}; must be positive",
                    bus.name, bus.capacity
                )));
            }
            if !bus.cost.is_finite() || bus.cost < 0.0 {
                return Err(AssignmentError::ModelInvalid(format!(
                    "bus type '{}' has cost {}; must be non-negative",
                    bus.name, bus.cost
                )));
            }
        }

        for route in &self.routes {
            for shift in Shift::all() {
                let demand = route.demand(shift);
                let trips = route.trips(shift);
                if !demand.is_finite() || demand < 0.0 {
                    return Err(AssignmentError::ModelInvalid(format!(
                        "route {} {}: demand {} must be a non-negative number",
                        route.id, shift, demand
                    )));
                }
                if !trips.is_finite() || trips < 0.0 {
                    return Err(AssignmentError::ModelInvalid(format!(
                        "route {} {}: trip factor {} must be a non-negative number",
                        route.id, shift, trips
                    )));
                }
            }
        }

        Ok(())
    }

    /// First (route, shift) with positive demand but no trips. No bus can
    /// carry anyone there, so the model is infeasible whatever the fleet.
    pub fn unservable_demand(&self) -> Option<(&Route, Shift)> {
        self.routes.iter().find_map(|route| {
            Shift::all()
                .find(|&s| route.demand(s) > 0.0 && route.trips(s) == 0.0)
                .map(|s| (route, s))
        })
    }

    /// Total trip cost of an integer assignment, `counts[t]` buses of type `t`.
    pub fn assignment_cost(&self, route: &Route, shift: Shift, counts: &[u64]) -> f64 {
        self.fleet
            .types()
            .iter()
            .zip(counts)
            .map(|(bus, &n)| bus.cost * route.trips(shift) * n as f64)
            .sum()
    }
}

/// Builder for constructing assignment problems
pub struct AssignmentProblemBuilder {
    routes: Vec<Route>,
    bus_types: Vec<BusType>,
}

impl AssignmentProblemBuilder {
    /// Start with no routes and no bus types.
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            bus_types: Vec::new(),
        }
    }

    /// Start from the two-type default fleet.
    pub fn with_default_fleet() -> Self {
        Self {
            routes: Vec::new(),
            bus_types: Fleet::default().types().to_vec(),
        }
    }

    pub fn route(
        mut self,
        id: impl Into<String>,
        demand: [f64; busplan_core::SHIFT_COUNT],
        trips: [f64; busplan_core::SHIFT_COUNT],
    ) -> Self {
        self.routes.push(Route::new(id, demand, trips));
        self
    }

    pub fn bus_type(mut self, name: impl Into<String>, capacity: f64, fleet_size: u32, cost: f64) -> Self {
        self.bus_types
            .push(BusType::new(name, capacity, fleet_size, cost));
        self
    }

    pub fn build(self) -> AssignmentProblem {
        AssignmentProblem::new(self.routes, Fleet::new(self.bus_types))
    }
}

impl Default for AssignmentProblemBuilder {
    fn default() -> Self {
        Self::new()
    }
}
