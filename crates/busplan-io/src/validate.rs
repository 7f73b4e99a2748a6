//! Data-quality checks on a loaded route dataset.
//!
//! These checks only look at the rows themselves. Checks against the fleet
//! (capacity, fleet caps) live in `busplan_algo::assignment::precheck`.

use busplan_core::{DiagnosticIssue, Diagnostics, Route, Severity, Shift};
use std::collections::HashMap;

/// Inspect routes as returned by [`crate::load_routes`].
///
/// Line numbers assume the routes are in file order with a single header
/// line.
pub fn inspect_routes(routes: &[Route]) -> Diagnostics {
    let mut diag = Diagnostics::new();
    let mut first_seen: HashMap<&str, usize> = HashMap::new();

    for (idx, route) in routes.iter().enumerate() {
        let line = idx + 2;
        let id = route.id.as_str();

        if let Some(first) = first_seen.insert(id, line) {
            diag.add(
                DiagnosticIssue::new(
                    Severity::Warning,
                    "data",
                    format!("duplicate route id (first seen at line {})", first),
                )
                .with_route(id)
                .with_line(line),
            );
        }

        for shift in Shift::all() {
            let demand = route.demand(shift);
            let trips = route.trips(shift);

            if !demand.is_finite() || demand < 0.0 {
                diag.add(
                    DiagnosticIssue::new(
                        Severity::Error,
                        "data",
                        format!("{}: demand {} is not a non-negative number", shift, demand),
                    )
                    .with_route(id)
                    .with_line(line),
                );
            }
            if !trips.is_finite() || trips < 0.0 {
                diag.add(
                    DiagnosticIssue::new(
                        Severity::Error,
                        "data",
                        format!("{}: trip factor {} is not a non-negative number", shift, trips),
                    )
                    .with_route(id)
                    .with_line(line),
                );
            } else if trips == 0.0 && demand > 0.0 {
                diag.add(
                    DiagnosticIssue::new(
                        Severity::Error,
                        "data",
                        format!("{}: demand {} with zero trips cannot be served", shift, demand),
                    )
                    .with_route(id)
                    .with_line(line),
                );
            }
        }

        if route.total_demand() == 0.0 {
            diag.add(
                DiagnosticIssue::new(Severity::Warning, "data", "zero demand in every shift")
                    .with_route(id)
                    .with_line(line),
            );
        }
    }

    diag
}
