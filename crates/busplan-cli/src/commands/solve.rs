//! `busplan solve`

use anyhow::{Context, Result};
use busplan_algo::{
    solve_assignment, AssignmentProblem, FleetPlan, LpSolverKind, SolveStatus, SolverOptions,
};
use busplan_cli::cli::OutputFormat;
use busplan_cli::report::write_plan_report;
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

use super::{load_config, load_dataset, RunOutcome};

pub struct SolveArgs<'a> {
    pub data: &'a Path,
    pub config: Option<&'a Path>,
    pub routes: Option<usize>,
    pub solver: Option<&'a str>,
    pub time_limit: Option<u64>,
    pub out: Option<&'a Path>,
    pub format: OutputFormat,
}

/// JSON plan output
#[derive(Debug, Serialize)]
struct PlanOutput<'a> {
    status: SolveStatus,
    solve_time_ms: u64,
    #[serde(flatten)]
    plan: &'a FleetPlan,
}

/// JSON output when no plan was produced
#[derive(Debug, Serialize)]
struct FailureOutput {
    status: SolveStatus,
    message: &'static str,
}

impl<'a> PlanOutput<'a> {
    fn new(plan: &'a FleetPlan) -> Self {
        Self {
            status: SolveStatus::Optimal,
            solve_time_ms: plan.solve_time.as_millis() as u64,
            plan,
        }
    }
}

pub fn handle(args: &SolveArgs<'_>) -> Result<RunOutcome> {
    let config = load_config(args.config)?;

    // An unusable backend ends the run before any data is read.
    let backend = args.solver.unwrap_or(config.solver.backend.as_str());
    let kind: LpSolverKind = backend.parse()?;

    let mut options = SolverOptions::new(kind).with_verbose(config.solver.verbose);
    let limit_secs = args.time_limit.unwrap_or(config.solver.time_limit_seconds);
    if limit_secs > 0 {
        options = options.with_time_limit(Duration::from_secs(limit_secs));
    }

    let routes = load_dataset(args.data, args.routes, &config)?;
    let problem = AssignmentProblem::new(routes, config.fleet());

    let plan = match solve_assignment(&problem, &options) {
        Ok(plan) => plan,
        Err(e) => match e.status() {
            Some(status) => {
                warn!("{}", e);
                report_failure(status, args.format)?;
                return Ok(RunOutcome::SolveFailed(status));
            }
            None => return Err(e.into()),
        },
    };
    info!(
        total_cost = plan.total_cost,
        elapsed = ?plan.solve_time,
        "optimal plan found"
    );

    let output = PlanOutput::new(&plan);
    match args.format {
        OutputFormat::Plain => {
            println!("{}", SolveStatus::Optimal.diagnostic());
            write_plan_report(io::stdout().lock(), &plan).context("writing report")?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&output).context("serializing plan")?;
            println!("{}", json);
        }
    }

    if let Some(path) = args.out {
        let json = serde_json::to_string_pretty(&output).context("serializing plan")?;
        let mut file = File::create(path)
            .with_context(|| format!("creating output file {}", path.display()))?;
        file.write_all(json.as_bytes()).context("writing output")?;
        info!("plan written to {}", path.display());
    }

    Ok(RunOutcome::Success)
}

fn report_failure(status: SolveStatus, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Plain => println!("{}", status.diagnostic()),
        OutputFormat::Json => {
            let output = FailureOutput {
                status,
                message: status.diagnostic(),
            };
            let json = serde_json::to_string_pretty(&output).context("serializing status")?;
            println!("{}", json);
        }
    }
    Ok(())
}
