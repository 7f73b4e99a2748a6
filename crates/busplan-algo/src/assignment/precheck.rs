//! Solver-free feasibility screening

use super::AssignmentProblem;
use busplan_core::{Diagnostics, Shift};

/// Share of the fleet above which a shift is reported as tight.
const TIGHT_FLEET_SHARE: f64 = 0.9;

/// Lower bound on the buses each shift needs, checked against the fleet.
///
/// Every route is served with the largest-capacity bus type, which gives
/// `ceil(demand / (max_capacity * trips))` buses per route. If the sum over
/// routes exceeds the total fleet the shift cannot be covered (error). Above
/// 90% of the fleet the shift is reported as tight (warning). Passing this
/// check does not guarantee feasibility: per-type caps may still bind.
pub fn feasibility_precheck(problem: &AssignmentProblem) -> Diagnostics {
    let mut diag = Diagnostics::new();
    let max_capacity = problem.fleet.max_capacity();
    let total_fleet = problem.fleet.total_fleet_size();

    if max_capacity <= 0.0 {
        diag.add_error("capacity", "no bus type has a positive capacity");
        return diag;
    }

    for shift in Shift::all() {
        let mut needed: u64 = 0;
        for route in &problem.routes {
            let demand = route.demand(shift);
            let trips = route.trips(shift);
            if demand <= 0.0 || trips <= 0.0 {
                continue;
            }
            let buses = (demand / (max_capacity * trips) - 1e-9).ceil().max(0.0);
            needed += buses as u64;
        }

        if needed > total_fleet {
            diag.add_error(
                "capacity",
                &format!(
                    "{} needs at least {} buses but the fleet has {}",
                    shift, needed, total_fleet
                ),
            );
        } else if needed as f64 > TIGHT_FLEET_SHARE * total_fleet as f64 {
            diag.add_warning(
                "capacity",
                &format!(
                    "{} needs at least {} of {} buses",
                    shift, needed, total_fleet
                ),
            );
        }
    }

    diag
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::AssignmentProblemBuilder;

    #[test]
    fn test_comfortable_fleet_passes() {
        let problem = AssignmentProblemBuilder::with_default_fleet()
            .route("1", [600.0, 300.0, 90.0, 0.0], [2.0, 1.0, 1.0, 1.0])
            .build();
        assert!(!feasibility_precheck(&problem).has_issues());
    }

    #[test]
    fn test_exact_multiples_do_not_round_up() {
        let problem = AssignmentProblemBuilder::new()
            .route("1", [180.0, 0.0, 0.0, 0.0], [1.0; 4])
            .bus_type("Large", 90.0, 2, 150.0)
            .build();
        // 180 / 90 = 2 buses, exactly the fleet
        let diag = feasibility_precheck(&problem);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_overloaded_shift_is_error() {
        let problem = AssignmentProblemBuilder::new()
            .route("1", [0.0, 0.0, 0.0, 500.0], [1.0; 4])
            .route("2", [0.0, 0.0, 0.0, 500.0], [1.0; 4])
            .bus_type("Small", 60.0, 5, 100.0)
            .build();
        let diag = feasibility_precheck(&problem);
        assert_eq!(diag.error_count(), 1);
        let message = &diag.errors().next().unwrap().message;
        assert!(message.contains("Shift 4"), "{message}");
        assert!(message.contains("18"), "{message}");
    }

    #[test]
    fn test_tight_shift_is_warning() {
        let problem = AssignmentProblemBuilder::new()
            .route("1", [570.0, 0.0, 0.0, 0.0], [1.0; 4])
            .bus_type("Small", 60.0, 10, 100.0)
            .build();
        let diag = feasibility_precheck(&problem);
        assert_eq!(diag.error_count(), 0);
        assert_eq!(diag.warning_count(), 1);
    }
}
