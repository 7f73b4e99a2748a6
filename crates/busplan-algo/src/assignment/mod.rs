//! Bus fleet shift assignment
//!
//! Chooses how many buses of each type serve each route in each shift so
//! that every route's demand is carried at minimum trip cost, without using
//! more buses of a type in any shift than the fleet holds.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  FLEET SHIFT ASSIGNMENT                                                  │
//! │  ──────────────────────                                                  │
//! │                                                                          │
//! │  Given:                                                                  │
//! │    • Routes with passenger demand per shift                             │
//! │    • Trips one bus makes on each route per shift                        │
//! │    • Bus types with capacity, fleet size and cost per trip              │
//! │                                                                          │
//! │  Decide:                                                                 │
//! │    • Buses of each type on each route in each shift (integer)           │
//! │                                                                          │
//! │  Minimize:                                                               │
//! │    Total trip cost                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## MILP Formulation
//!
//! ```text
//! minimize    Σ_i Σ_j Σ_t cost_t · trips_ij · x_ijt
//!
//! subject to:
//!   Σ_t cap_t · trips_ij · x_ijt ≥ demand_ij     Demand (every route i, shift j)
//!   u_jt = Σ_i x_ijt                             Shift usage (every shift j, type t)
//!   u_jt ≤ fleet_t                               Fleet cap
//!   x_ijt, u_jt ∈ ℤ≥0
//! ```
//!
//! Building the model ([`AssignmentModel::build`]) is separate from solving
//! it ([`solve_assignment`]). The model is handed to a `good_lp` backend
//! chosen by [`LpSolverKind`]; every outcome other than an optimal plan is an
//! [`AssignmentError`] that maps to one [`SolveStatus`].

mod model;
mod precheck;
mod problem;
mod solution;
mod solver;
mod status;

pub use model::AssignmentModel;
pub use precheck::feasibility_precheck;
pub use problem::{AssignmentProblem, AssignmentProblemBuilder};
pub use solution::{AssignmentRow, FleetPlan, ShiftUsage};
pub use solver::{solve_assignment, LpSolverKind, SolverOptions};
pub use status::{AssignmentError, SolveStatus};
