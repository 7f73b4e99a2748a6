//! `busplan validate`

use anyhow::Result;
use busplan_algo::{feasibility_precheck, AssignmentProblem};
use busplan_io::inspect_routes;
use std::path::Path;
use tracing::info;

use super::{load_config, load_dataset, RunOutcome};

pub fn handle(data: &Path, config: Option<&Path>, routes: Option<usize>) -> Result<RunOutcome> {
    let config = load_config(config)?;
    let routes = load_dataset(data, routes, &config)?;
    let fleet = config.fleet();

    println!("Dataset {} is readable", data.display());
    println!("  {} routes", routes.len());
    println!(
        "  {} bus types, {} buses in total, {} seats per shift at one trip each",
        fleet.len(),
        fleet.total_fleet_size(),
        fleet.single_trip_capacity()
    );

    let mut diag = inspect_routes(&routes);
    let problem = AssignmentProblem::new(routes, fleet);
    if !diag.has_errors() {
        if let Err(e) = problem.validate() {
            diag.add_error("model", &e.to_string());
        }
    }
    diag.merge(feasibility_precheck(&problem));

    print!("{}", diag);
    info!(
        warnings = diag.warning_count(),
        errors = diag.error_count(),
        "validation finished"
    );

    if diag.has_errors() {
        Ok(RunOutcome::InvalidData)
    } else {
        Ok(RunOutcome::Success)
    }
}
