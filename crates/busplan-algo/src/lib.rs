//! # busplan-algo: Fleet Assignment Optimization
//!
//! Builds the bus fleet shift-assignment MILP and solves it through
//! `good_lp`.
//!
//! | Backend | Feature | Notes |
//! |---------|---------|-------|
//! | `highs` | `solver-highs` (default) | HiGHS, the default backend |
//! | `microlp` | always on | pure Rust branch and bound, small instances only |
//! | `cbc` | `solver-coin_cbc` | COIN-OR CBC, needs the native library |
//!
//! ## Example
//!
//! ```
//! use busplan_algo::assignment::{solve_assignment, AssignmentProblemBuilder, SolverOptions};
//!
//! let problem = AssignmentProblemBuilder::with_default_fleet()
//!     .route("1", [60.0, 120.0, 90.0, 30.0], [1.0, 2.0, 1.0, 1.0])
//!     .build();
//!
//! let plan = solve_assignment(&problem, &SolverOptions::default()).unwrap();
//! println!("{}", plan.summary());
//! ```

pub mod assignment;

pub use assignment::{
    feasibility_precheck, solve_assignment, AssignmentError, AssignmentProblem,
    AssignmentProblemBuilder, FleetPlan, LpSolverKind, SolveStatus, SolverOptions,
};
