//! Fleet assignment solver tests

use busplan_algo::assignment::{
    solve_assignment, AssignmentError, AssignmentProblem, AssignmentProblemBuilder, FleetPlan,
    LpSolverKind, SolveStatus, SolverOptions,
};
use busplan_core::Shift;
#[cfg(feature = "solver-highs")]
use std::time::Duration;

fn solve(problem: &AssignmentProblem) -> Result<FleetPlan, AssignmentError> {
    solve_assignment(problem, &SolverOptions::default())
}

/// Six routes with mixed demand and trip factors, comfortably inside the
/// default fleet.
fn small_network() -> AssignmentProblem {
    AssignmentProblemBuilder::with_default_fleet()
        .route("1", [120.0, 340.0, 210.0, 90.0], [2.0, 3.0, 2.0, 1.0])
        .route("2", [60.0, 75.0, 0.0, 15.0], [1.0, 1.0, 1.0, 1.0])
        .route("3", [400.0, 520.0, 380.0, 200.0], [3.0, 4.0, 3.0, 2.0])
        .route("4A", [45.0, 0.0, 45.0, 0.0], [1.0, 0.0, 1.0, 0.0])
        .route("5", [250.0, 180.0, 95.0, 130.0], [2.0, 2.0, 1.5, 1.0])
        .route("6", [30.0, 30.0, 30.0, 30.0], [0.5, 0.5, 0.5, 0.5])
        .build()
}

/// `n` routes with demand in 50..=950 and whole trip factors in 1..=4,
/// spread deterministically so every run sees the same instance.
#[cfg(feature = "solver-highs")]
fn generated_network(n: usize) -> AssignmentProblem {
    let mut builder = AssignmentProblemBuilder::with_default_fleet();
    for k in 0..n {
        let mut demand = [0.0; 4];
        let mut trips = [0.0; 4];
        for j in 0..4 {
            demand[j] = (50 + (k * 37 + j * 113 + k * j * 11) % 901) as f64;
            trips[j] = (1 + (k * 7 + j * 3) % 4) as f64;
        }
        builder = builder.route(format!("R{}", k + 1), demand, trips);
    }
    builder.build()
}

fn assert_plan_respects_constraints(problem: &AssignmentProblem, plan: &FleetPlan) {
    let fleet = problem.fleet.types();
    assert_eq!(plan.rows.len(), problem.num_routes() * 4);

    for (route, rows) in problem.routes.iter().zip(plan.rows.chunks(4)) {
        for row in rows {
            assert_eq!(row.route, route.id);
            let trips = route.trips(row.shift);
            let seats: f64 = fleet
                .iter()
                .zip(&row.buses)
                .map(|(bus, &n)| bus.capacity * trips * n as f64)
                .sum();
            assert!(
                seats >= route.demand(row.shift) - 1e-9,
                "route {} {}: {} seats < demand {}",
                route.id,
                row.shift,
                seats,
                route.demand(row.shift)
            );
        }
    }

    for shift in Shift::all() {
        let usage = plan.usage(shift).expect("usage for every shift");
        assert_eq!(usage.buses, plan.assigned_in_shift(shift));
        for (bus, &used) in fleet.iter().zip(&usage.buses) {
            assert!(used <= u64::from(bus.fleet_size), "{} over cap in {}", bus.name, shift);
        }
    }

    assert!(!plan.verify(problem).has_issues(), "{}", plan.verify(problem));
}

#[test]
fn single_route_single_shift_uses_one_small_bus() {
    let problem = AssignmentProblemBuilder::with_default_fleet()
        .route("1", [60.0, 0.0, 0.0, 0.0], [1.0; 4])
        .build();
    let plan = solve(&problem).expect("feasible");

    assert_eq!(plan.rows[0].buses, vec![1, 0]);
    for row in &plan.rows[1..] {
        assert_eq!(row.buses, vec![0, 0]);
    }
    assert!((plan.total_cost - 100.0).abs() < 1e-6);
}

#[test]
fn trip_factor_scales_seats_and_cost() {
    // one 60-seat bus making two trips covers 120 passengers for 2 x 100
    let problem = AssignmentProblemBuilder::with_default_fleet()
        .route("1", [120.0, 0.0, 0.0, 0.0], [2.0, 1.0, 1.0, 1.0])
        .build();
    let plan = solve(&problem).expect("feasible");

    assert_eq!(plan.rows[0].buses, vec![1, 0]);
    assert!((plan.total_cost - 200.0).abs() < 1e-6);
}

#[test]
fn fleet_cap_forces_second_bus_type() {
    let problem = AssignmentProblemBuilder::new()
        .route("1", [60.0, 0.0, 0.0, 0.0], [1.0; 4])
        .route("2", [60.0, 0.0, 0.0, 0.0], [1.0; 4])
        .bus_type("Type-1", 60.0, 1, 100.0)
        .bus_type("Type-2", 90.0, 90, 150.0)
        .build();
    let plan = solve(&problem).expect("feasible");

    assert!((plan.total_cost - 250.0).abs() < 1e-6);
    let first = Shift::new(0).unwrap();
    assert_eq!(plan.usage(first).unwrap().buses, vec![1, 1]);
    assert_plan_respects_constraints(&problem, &plan);
}

#[test]
fn capped_mix_reaches_exact_cover() {
    // 2x + 3y >= 10 with x <= 2: the only cost-500 cover is two of each
    let problem = AssignmentProblemBuilder::new()
        .route("1", [300.0, 0.0, 0.0, 0.0], [1.0; 4])
        .bus_type("Type-1", 60.0, 2, 100.0)
        .bus_type("Type-2", 90.0, 10, 150.0)
        .build();
    let plan = solve(&problem).expect("feasible");

    assert_eq!(plan.rows[0].buses, vec![2, 2]);
    assert!((plan.total_cost - 500.0).abs() < 1e-6);
}

#[test]
fn small_network_plan_satisfies_every_constraint() {
    let problem = small_network();
    let plan = solve(&problem).expect("feasible");
    assert_plan_respects_constraints(&problem, &plan);
    assert_eq!(plan.backend, LpSolverKind::default().as_str());
}

#[test]
fn resolving_gives_identical_objective() {
    let problem = small_network();
    let first = solve(&problem).expect("feasible");
    let second = solve(&problem).expect("feasible");
    assert!((first.total_cost - second.total_cost).abs() < 1e-6);
}

#[test]
fn demand_above_fleet_capacity_is_infeasible() {
    // 600 x 60 + 90 x 90 = 44100 seats at one trip per bus
    let problem = AssignmentProblemBuilder::with_default_fleet()
        .route("1", [0.0, 44_101.0, 0.0, 0.0], [1.0; 4])
        .build();
    let err = solve(&problem).unwrap_err();

    assert!(matches!(err, AssignmentError::Infeasible(_)), "{err}");
    assert_eq!(err.status(), Some(SolveStatus::Infeasible));
}

#[test]
fn demand_without_trips_is_infeasible_before_solving() {
    let problem = AssignmentProblemBuilder::with_default_fleet()
        .route("1", [10.0, 0.0, 0.0, 0.0], [0.0, 1.0, 1.0, 1.0])
        .build();
    let err = solve(&problem).unwrap_err();
    assert_eq!(err.status(), Some(SolveStatus::Infeasible));
    assert!(err.to_string().contains("no trips"));
}

#[test]
fn invalid_inputs_are_model_invalid() {
    let empty = AssignmentProblemBuilder::with_default_fleet().build();
    assert_eq!(solve(&empty).unwrap_err().status(), Some(SolveStatus::ModelInvalid));

    let nan_trips = AssignmentProblemBuilder::with_default_fleet()
        .route("1", [10.0; 4], [1.0, f64::NAN, 1.0, 1.0])
        .build();
    assert_eq!(
        solve(&nan_trips).unwrap_err().status(),
        Some(SolveStatus::ModelInvalid)
    );
}

#[test]
fn zero_demand_needs_no_buses() {
    let problem = AssignmentProblemBuilder::with_default_fleet()
        .route("1", [0.0; 4], [1.0; 4])
        .build();
    let plan = solve(&problem).expect("feasible");
    assert_eq!(plan.total_by_type(), vec![0, 0]);
    assert_eq!(plan.total_cost, 0.0);
}

#[cfg(feature = "solver-highs")]
#[test]
fn full_size_network_solves_within_limit() {
    // the dataset's default route limit
    let problem = generated_network(93);
    let options =
        SolverOptions::new(LpSolverKind::Highs).with_time_limit(Duration::from_secs(120));
    let plan = solve_assignment(&problem, &options).expect("optimal within the limit");

    assert_plan_respects_constraints(&problem, &plan);
    let demand: f64 = problem.routes.iter().map(|r| r.total_demand()).sum();
    // every seat costs 100/60 with the default fleet
    assert!(plan.total_cost >= demand * 100.0 / 60.0 - 1e-6);
}

#[cfg(feature = "solver-highs")]
#[test]
fn time_limited_solve_reports_abnormal() {
    let problem = generated_network(1500);
    let options =
        SolverOptions::new(LpSolverKind::Highs).with_time_limit(Duration::from_millis(1));
    let err = solve_assignment(&problem, &options).unwrap_err();

    assert!(matches!(err, AssignmentError::NotSolved(_)), "{err}");
    assert_eq!(err.status(), Some(SolveStatus::Abnormal));
}
