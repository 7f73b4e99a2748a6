//! Planner configuration (TOML)
//!
//! Every field has a default, so an empty file (or no file at all) gives the
//! stock two-type fleet, the first 93 routes and the HiGHS backend.

use busplan_core::{BusType, BusplanError, BusplanResult, Fleet};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Commented config written by `busplan config init`.
pub const CONFIG_TEMPLATE: &str = "\
# busplan configuration

[run]
# Number of dataset rows to plan for, in file order (0 = all rows)
route_limit = 93

[solver]
# MILP backend: highs, microlp or cbc (cbc needs the solver-coin_cbc build feature;
# microlp is pure Rust but only practical for a handful of routes)
backend = \"highs\"
# Wall-clock limit in seconds (0 = no limit); a solve stopped by it reports no plan
time_limit_seconds = 0
# Let the backend print its own log
verbose = false

[[bus_types]]
name = \"Type-1\"
capacity = 60.0
fleet_size = 600
cost = 100.0

[[bus_types]]
name = \"Type-2\"
capacity = 90.0
fleet_size = 90
cost = 150.0
";

/// Top-level planner configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanConfig {
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub solver: SolverConfig,
    #[serde(default = "default_bus_types")]
    pub bus_types: Vec<BusType>,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            run: RunConfig::default(),
            solver: SolverConfig::default(),
            bus_types: default_bus_types(),
        }
    }
}

impl PlanConfig {
    /// Fleet described by the `[[bus_types]]` tables.
    pub fn fleet(&self) -> Fleet {
        Fleet::new(self.bus_types.clone())
    }

    pub fn to_toml_string(&self) -> BusplanResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| BusplanError::Config(format!("serializing config: {}", e)))
    }
}

fn default_bus_types() -> Vec<BusType> {
    Fleet::default().types().to_vec()
}

/// Dataset selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Rows to keep from the dataset (0 = all)
    #[serde(default = "default_route_limit")]
    pub route_limit: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            route_limit: default_route_limit(),
        }
    }
}

impl RunConfig {
    /// The limit to pass to the loader; `None` keeps every row.
    pub fn route_limit(&self) -> Option<usize> {
        (self.route_limit > 0).then_some(self.route_limit)
    }
}

fn default_route_limit() -> usize {
    93
}

/// MILP backend settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    #[serde(default = "default_backend")]
    pub backend: String,
    /// Seconds, 0 = no limit
    #[serde(default)]
    pub time_limit_seconds: u64,
    #[serde(default)]
    pub verbose: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            time_limit_seconds: 0,
            verbose: false,
        }
    }
}

fn default_backend() -> String {
    "highs".to_string()
}

/// Parse a config from TOML text.
pub fn parse_config(contents: &str) -> BusplanResult<PlanConfig> {
    toml::from_str(contents).map_err(|e| BusplanError::Config(e.to_string()))
}

/// Load a config file.
pub fn load_config(path: impl AsRef<Path>) -> BusplanResult<PlanConfig> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
        .map_err(|e| BusplanError::Config(format!("{}: {}", path.display(), e)))
}

/// Load `path` when given, otherwise fall back to the defaults.
pub fn load_config_or_default(path: Option<&Path>) -> BusplanResult<PlanConfig> {
    match path {
        Some(path) => load_config(path),
        None => Ok(PlanConfig::default()),
    }
}

/// Write the commented default template to `path`, creating parent directories.
pub fn write_config_template(path: impl AsRef<Path>) -> BusplanResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, CONFIG_TEMPLATE)?;
    Ok(())
}
