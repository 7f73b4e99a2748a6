//! Solved fleet plans

use super::AssignmentProblem;
use busplan_core::{Diagnostics, RouteId, Shift};
use serde::Serialize;
use std::time::Duration;

/// Largest distance from an integer tolerated in solver output.
pub(super) const INTEGRALITY_TOLERANCE: f64 = 1e-6;

/// Buses allocated to one route in one shift, one count per bus type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentRow {
    pub route: RouteId,
    pub shift: Shift,
    pub buses: Vec<u64>,
}

/// Buses of each type in use across all routes during one shift.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShiftUsage {
    pub shift: Shift,
    pub buses: Vec<u64>,
}

/// Optimal assignment returned by the solver.
#[derive(Debug, Clone, Serialize)]
pub struct FleetPlan {
    /// Backend that produced the plan
    pub backend: String,
    /// Bus type names, in the order of every `buses` vector
    pub bus_types: Vec<String>,
    /// One row per (route, shift), route-major
    pub rows: Vec<AssignmentRow>,
    /// One entry per shift, from the usage variables
    pub shift_usage: Vec<ShiftUsage>,
    /// Total trip cost of the rounded assignment
    pub total_cost: f64,
    /// Largest distance of a raw solver value from its rounded count
    pub integrality_error: f64,
    #[serde(skip)]
    pub solve_time: Duration,
}

impl FleetPlan {
    /// Assemble a plan from raw solver values.
    ///
    /// `assign` is laid out `(route, shift, bus type)` and `usage`
    /// `(shift, bus type)`, as in [`super::AssignmentModel`].
    pub fn from_values(
        problem: &AssignmentProblem,
        assign: &[f64],
        usage: &[f64],
        backend: &str,
        solve_time: Duration,
    ) -> Self {
        let num_types = problem.num_bus_types();
        let mut integrality_error: f64 = 0.0;
        let mut to_count = |value: f64| -> u64 {
            let rounded = value.round();
            integrality_error = integrality_error.max((value - rounded).abs());
            rounded.max(0.0) as u64
        };

        let mut rows = Vec::with_capacity(problem.num_routes() * busplan_core::SHIFT_COUNT);
        let mut total_cost = 0.0;
        let mut chunks = assign.chunks(num_types);
        for route in &problem.routes {
            for shift in Shift::all() {
                let buses: Vec<u64> = chunks
                    .next()
                    .unwrap_or_default()
                    .iter()
                    .map(|&v| to_count(v))
                    .collect();
                total_cost += problem.assignment_cost(route, shift, &buses);
                rows.push(AssignmentRow {
                    route: route.id.clone(),
                    shift,
                    buses,
                });
            }
        }

        let shift_usage = Shift::all()
            .zip(usage.chunks(num_types))
            .map(|(shift, values)| ShiftUsage {
                shift,
                buses: values.iter().map(|&v| to_count(v)).collect(),
            })
            .collect();

        Self {
            backend: backend.to_string(),
            bus_types: problem.fleet.types().iter().map(|t| t.name.clone()).collect(),
            rows,
            shift_usage,
            total_cost,
            integrality_error,
            solve_time,
        }
    }

    /// Buses of each type summed over every (route, shift) row.
    pub fn total_by_type(&self) -> Vec<u64> {
        let mut totals = vec![0; self.bus_types.len()];
        for row in &self.rows {
            for (total, n) in totals.iter_mut().zip(&row.buses) {
                *total += n;
            }
        }
        totals
    }

    /// Buses of each type assigned in `shift`, summed from the rows.
    pub fn assigned_in_shift(&self, shift: Shift) -> Vec<u64> {
        let mut totals = vec![0; self.bus_types.len()];
        for row in self.rows.iter().filter(|r| r.shift == shift) {
            for (total, n) in totals.iter_mut().zip(&row.buses) {
                *total += n;
            }
        }
        totals
    }

    pub fn usage(&self, shift: Shift) -> Option<&ShiftUsage> {
        self.shift_usage.iter().find(|u| u.shift == shift)
    }

    /// Check the plan against the problem it was solved for.
    ///
    /// Reports uncovered demand, shift usage above a fleet cap, usage that
    /// disagrees with the assigned rows, and solver values that were not
    /// integral. A correct optimal plan yields no issues.
    pub fn verify(&self, problem: &AssignmentProblem) -> Diagnostics {
        let mut diag = Diagnostics::new();
        let bus_types = problem.fleet.types();

        for (route, rows) in problem
            .routes
            .iter()
            .zip(self.rows.chunks(busplan_core::SHIFT_COUNT))
        {
            for row in rows {
                let trips = route.trips(row.shift);
                let seats: f64 = bus_types
                    .iter()
                    .zip(&row.buses)
                    .map(|(bus, &n)| bus.seats_for_trips(trips) * n as f64)
                    .sum();
                let demand = route.demand(row.shift);
                if seats + 1e-9 * demand.max(1.0) < demand {
                    diag.add_error_with_route(
                        "demand",
                        &format!("{}: {} seats for demand {}", row.shift, seats, demand),
                        route.id.as_str(),
                    );
                }
            }
        }

        for usage in &self.shift_usage {
            let assigned = self.assigned_in_shift(usage.shift);
            for ((bus, &used), &rows_total) in bus_types.iter().zip(&usage.buses).zip(&assigned) {
                if used > u64::from(bus.fleet_size) {
                    diag.add_error(
                        "fleet",
                        &format!(
                            "{}: {} {} buses in use, fleet has {}",
                            usage.shift, used, bus.name, bus.fleet_size
                        ),
                    );
                }
                if used != rows_total {
                    diag.add_error(
                        "fleet",
                        &format!(
                            "{}: usage of {} is {} but rows assign {}",
                            usage.shift, bus.name, used, rows_total
                        ),
                    );
                }
            }
        }

        if self.integrality_error > INTEGRALITY_TOLERANCE {
            diag.add_warning(
                "integrality",
                &format!(
                    "solver values were up to {:.3e} away from integers",
                    self.integrality_error
                ),
            );
        }

        diag
    }

    /// Format a human-readable summary
    pub fn summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("Fleet Plan Summary\n{}\n", "=".repeat(40)));
        s.push_str(&format!("Backend: {}\n", self.backend));
        s.push_str(&format!("Total Cost: {:.2}\n", self.total_cost));
        for (name, total) in self.bus_types.iter().zip(self.total_by_type()) {
            s.push_str(&format!("Total {} buses used: {}\n", name, total));
        }
        for usage in &self.shift_usage {
            let parts: Vec<String> = self
                .bus_types
                .iter()
                .zip(&usage.buses)
                .map(|(name, n)| format!("{} buses used = {}", name, n))
                .collect();
            s.push_str(&format!("{}: {}\n", usage.shift, parts.join(", ")));
        }
        s.push_str(&format!("Solve Time: {:.2?}\n", self.solve_time));
        s
    }
}
