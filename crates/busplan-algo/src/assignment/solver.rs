//! Solver dispatch
//!
//! Hands an [`AssignmentModel`] to one of the `good_lp` MILP backends and
//! turns the outcome into a [`FleetPlan`] or an [`AssignmentError`].

use super::{AssignmentError, AssignmentModel, AssignmentProblem, FleetPlan};
use good_lp::solvers::microlp::microlp;
#[cfg(feature = "solver-coin_cbc")]
use good_lp::solvers::coin_cbc::coin_cbc;
#[cfg(feature = "solver-highs")]
use good_lp::solvers::highs::highs;
use good_lp::solvers::{SolutionStatus, WithTimeLimit};
use good_lp::{Constraint, ResolutionError, Solution, SolverModel, Variable};
use std::str::FromStr;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// MILP backend used to solve the assignment model.
///
/// HiGHS is the default when compiled in. microlp is always available but
/// only suits small instances: with equal cost per seat across bus types its
/// branch and bound grows quickly with the route count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LpSolverKind {
    /// Pure-Rust branch and bound, always available
    Microlp,
    #[cfg(feature = "solver-highs")]
    Highs,
    #[cfg(feature = "solver-coin_cbc")]
    CoinCbc,
}

const AVAILABLE_LP_SOLVERS: &[&str] = &[
    "microlp",
    #[cfg(feature = "solver-highs")]
    "highs",
    #[cfg(feature = "solver-coin_cbc")]
    "cbc",
];

impl Default for LpSolverKind {
    fn default() -> Self {
        #[cfg(feature = "solver-highs")]
        {
            LpSolverKind::Highs
        }
        #[cfg(not(feature = "solver-highs"))]
        {
            LpSolverKind::Microlp
        }
    }
}

impl LpSolverKind {
    /// Names of the backends compiled into this build.
    pub fn available() -> &'static [&'static str] {
        AVAILABLE_LP_SOLVERS
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LpSolverKind::Microlp => "microlp",
            #[cfg(feature = "solver-highs")]
            LpSolverKind::Highs => "highs",
            #[cfg(feature = "solver-coin_cbc")]
            LpSolverKind::CoinCbc => "cbc",
        }
    }
}

fn unavailable(requested: &str) -> AssignmentError {
    AssignmentError::SolverUnavailable {
        requested: requested.to_string(),
        available: LpSolverKind::available().join(", "),
    }
}

impl FromStr for LpSolverKind {
    type Err = AssignmentError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "default" => Ok(LpSolverKind::default()),
            "microlp" => Ok(LpSolverKind::Microlp),
            "highs" => {
                #[cfg(feature = "solver-highs")]
                {
                    Ok(LpSolverKind::Highs)
                }
                #[cfg(not(feature = "solver-highs"))]
                {
                    Err(unavailable(&normalized))
                }
            }
            "cbc" | "coin_cbc" => {
                #[cfg(feature = "solver-coin_cbc")]
                {
                    Ok(LpSolverKind::CoinCbc)
                }
                #[cfg(not(feature = "solver-coin_cbc"))]
                {
                    Err(unavailable(&normalized))
                }
            }
            other => Err(unavailable(other)),
        }
    }
}

/// Solver configuration
#[derive(Debug, Clone, Default)]
pub struct SolverOptions {
    pub kind: LpSolverKind,
    /// Wall-clock limit; a solve stopped by it has no plan
    pub time_limit: Option<Duration>,
    /// Let the backend print its own log
    pub verbose: bool,
}

impl SolverOptions {
    pub fn new(kind: LpSolverKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Build and solve the assignment MILP for `problem`.
///
/// Returns the optimal plan, or the [`AssignmentError`] describing why there
/// is none. Invalid input is rejected before the solver is called.
///
/// # Example
///
/// ```
/// use busplan_algo::assignment::{solve_assignment, AssignmentProblemBuilder, SolverOptions};
///
/// let problem = AssignmentProblemBuilder::with_default_fleet()
///     .route("1", [60.0, 0.0, 0.0, 0.0], [1.0; 4])
///     .build();
/// let plan = solve_assignment(&problem, &SolverOptions::default())?;
/// assert_eq!(plan.rows[0].buses, vec![1, 0]);
/// # Ok::<(), busplan_algo::assignment::AssignmentError>(())
/// ```
pub fn solve_assignment(
    problem: &AssignmentProblem,
    options: &SolverOptions,
) -> Result<FleetPlan, AssignmentError> {
    let start = Instant::now();

    let model = AssignmentModel::build(problem)?;
    info!(
        routes = model.num_routes(),
        bus_types = model.num_bus_types(),
        variables = model.num_variables(),
        constraints = model.num_constraints(),
        backend = options.kind.as_str(),
        "solving fleet assignment"
    );

    let num_assign = model.assign.len();
    let values = solve_model(model, options)?;
    let (assign, usage) = values.split_at(num_assign);

    let plan = FleetPlan::from_values(
        problem,
        assign,
        usage,
        options.kind.as_str(),
        start.elapsed(),
    );
    debug!(total_cost = plan.total_cost, elapsed = ?plan.solve_time, "solver finished");

    let issues = plan.verify(problem);
    for issue in &issues.issues {
        warn!("plan check: {}", issue);
    }

    Ok(plan)
}

/// Solve with the selected backend, returning the assignment values followed
/// by the usage values.
fn solve_model(model: AssignmentModel, options: &SolverOptions) -> Result<Vec<f64>, AssignmentError> {
    let AssignmentModel {
        vars,
        objective,
        constraints,
        assign,
        usage,
        ..
    } = model;
    let watched: Vec<Variable> = assign.into_iter().chain(usage).collect();

    match options.kind {
        LpSolverKind::Microlp => {
            if options.verbose {
                debug!("microlp has no solver log");
            }
            let mut problem = vars.minimise(objective).using(microlp);
            if let Some(limit) = options.time_limit {
                problem = problem.with_time_limit(limit.as_secs_f64());
            }
            run_backend(problem, constraints, &watched)
        }
        #[cfg(feature = "solver-highs")]
        LpSolverKind::Highs => {
            let mut problem = vars
                .minimise(objective)
                .using(highs)
                .set_verbose(options.verbose);
            if let Some(limit) = options.time_limit {
                problem = problem.with_time_limit(limit.as_secs_f64());
            }
            run_backend(problem, constraints, &watched)
        }
        #[cfg(feature = "solver-coin_cbc")]
        LpSolverKind::CoinCbc => {
            let mut problem = vars.minimise(objective).using(coin_cbc);
            if !options.verbose {
                problem.set_parameter("log", "0");
            }
            if let Some(limit) = options.time_limit {
                problem.set_parameter("seconds", &limit.as_secs().to_string());
            }
            run_backend(problem, constraints, &watched)
        }
    }
}

/// Add the constraints, solve, and read `watched` from an optimal solution.
///
/// A solve that stops on a time or gap limit is reported as not solved; its
/// incumbent is discarded.
fn run_backend<M>(
    mut problem: M,
    constraints: Vec<Constraint>,
    watched: &[Variable],
) -> Result<Vec<f64>, AssignmentError>
where
    M: SolverModel<Error = ResolutionError>,
{
    for c in constraints {
        problem.add_constraint(c);
    }
    let solution = problem.solve()?;
    check_solution_status(solution.status())?;
    Ok(watched.iter().map(|v| solution.value(*v)).collect())
}

fn check_solution_status(status: SolutionStatus) -> Result<(), AssignmentError> {
    match status {
        SolutionStatus::Optimal => Ok(()),
        SolutionStatus::TimeLimit => Err(AssignmentError::NotSolved(
            "time limit reached before optimality was proven".to_string(),
        )),
        SolutionStatus::GapLimit => Err(AssignmentError::NotSolved(
            "stopped at the MIP gap limit".to_string(),
        )),
    }
}
