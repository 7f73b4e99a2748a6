use clap::{CommandFactory, Parser, Subcommand, ValueEnum, ValueHint};
use std::path::PathBuf;

/// Minimum-cost bus fleet assignment across the four daily shifts
#[derive(Parser, Debug)]
#[command(name = "busplan", author, version, long_about = None)]
pub struct Cli {
    /// Set the logging level (logs go to stderr)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: tracing::Level,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Solve the fleet assignment for a route dataset
    Solve {
        /// Route dataset (CSV)
        #[arg(value_hint = ValueHint::FilePath)]
        data: PathBuf,
        /// Planner config (TOML); defaults are used when omitted
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        config: Option<PathBuf>,
        /// Plan only the first N routes of the dataset (0 = all)
        #[arg(long)]
        routes: Option<usize>,
        /// MILP backend (highs, microlp, cbc)
        #[arg(long)]
        solver: Option<String>,
        /// Solver time limit in seconds; a stopped solve exits with status 2
        #[arg(long)]
        time_limit: Option<u64>,
        /// Also write the plan as JSON to this file
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        out: Option<PathBuf>,
        /// Console output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
        format: OutputFormat,
    },
    /// Check a route dataset against the fleet without solving
    Validate {
        /// Route dataset (CSV)
        #[arg(value_hint = ValueHint::FilePath)]
        data: PathBuf,
        /// Planner config (TOML)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        config: Option<PathBuf>,
        /// Check only the first N routes of the dataset (0 = all)
        #[arg(long)]
        routes: Option<usize>,
    },
    /// Planner configuration helpers
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// List the MILP backends compiled into this build
    Solvers,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write the default config template
    Init {
        /// Destination file
        #[arg(short, long, default_value = "busplan.toml")]
        out: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective config as TOML
    Show {
        /// Config file to load; defaults are shown when omitted
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        config: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Table and totals
    Plain,
    /// Plan as pretty-printed JSON
    Json,
}

pub fn build_cli_command() -> clap::Command {
    Cli::command()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        build_cli_command().debug_assert();
    }

    #[test]
    fn test_parse_solve_overrides() {
        let cli = Cli::try_parse_from([
            "busplan",
            "--log-level",
            "debug",
            "solve",
            "routes.csv",
            "--routes",
            "10",
            "--solver",
            "microlp",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.log_level, tracing::Level::DEBUG);
        match cli.command {
            Commands::Solve {
                data,
                routes,
                solver,
                format,
                ..
            } => {
                assert_eq!(data, PathBuf::from("routes.csv"));
                assert_eq!(routes, Some(10));
                assert_eq!(solver.as_deref(), Some("microlp"));
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_config_init_default_path() {
        let cli = Cli::try_parse_from(["busplan", "config", "init"]).unwrap();
        match cli.command {
            Commands::Config {
                command: ConfigCommands::Init { out, force },
            } => {
                assert_eq!(out, PathBuf::from("busplan.toml"));
                assert!(!force);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
