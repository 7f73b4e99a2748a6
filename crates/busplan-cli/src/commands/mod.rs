//! Subcommand handlers

use anyhow::{Context, Result};
use busplan_algo::SolveStatus;
use busplan_cli::cli::{Commands, ConfigCommands};
use busplan_core::Route;
use busplan_io::{load_config_or_default, load_routes, PlanConfig};
use std::path::Path;
use tracing::info;

mod config;
mod solve;
mod solvers;
mod validate;

/// How a command ended, when it ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Success,
    /// The solver ran (or was ruled out) without an optimal plan
    SolveFailed(SolveStatus),
    /// Validation found errors in the dataset
    InvalidData,
}

impl RunOutcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            RunOutcome::Success => 0,
            RunOutcome::SolveFailed(_) | RunOutcome::InvalidData => 2,
        }
    }
}

pub fn run(command: &Commands) -> Result<RunOutcome> {
    match command {
        Commands::Solve {
            data,
            config,
            routes,
            solver,
            time_limit,
            out,
            format,
        } => solve::handle(&solve::SolveArgs {
            data,
            config: config.as_deref(),
            routes: *routes,
            solver: solver.as_deref(),
            time_limit: *time_limit,
            out: out.as_deref(),
            format: *format,
        }),
        Commands::Validate {
            data,
            config,
            routes,
        } => validate::handle(data, config.as_deref(), *routes),
        Commands::Config { command } => match command {
            ConfigCommands::Init { out, force } => config::handle_init(out, *force),
            ConfigCommands::Show { config } => config::handle_show(config.as_deref()),
        },
        Commands::Solvers => solvers::handle(),
    }
}

fn load_config(path: Option<&Path>) -> Result<PlanConfig> {
    let config = load_config_or_default(path).with_context(|| match path {
        Some(p) => format!("loading config from {}", p.display()),
        None => "building default config".to_string(),
    })?;
    Ok(config)
}

/// Load the dataset, keeping the first `routes` rows (`Some(0)` keeps all)
/// or the config's route limit when no override is given.
fn load_dataset(data: &Path, routes: Option<usize>, config: &PlanConfig) -> Result<Vec<Route>> {
    let limit = match routes {
        Some(0) => None,
        Some(n) => Some(n),
        None => config.run.route_limit(),
    };
    let routes = load_routes(data, limit)
        .with_context(|| format!("loading routes from {}", data.display()))?;
    info!(routes = routes.len(), limit = ?limit, "dataset loaded");
    Ok(routes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(RunOutcome::Success.exit_code(), 0);
        assert_eq!(RunOutcome::SolveFailed(SolveStatus::Infeasible).exit_code(), 2);
        assert_eq!(RunOutcome::InvalidData.exit_code(), 2);
    }
}
