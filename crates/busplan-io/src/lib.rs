//! # busplan-io: Dataset and Configuration I/O
//!
//! - [`demand`] - CSV route dataset loader
//! - [`config`] - TOML planner configuration with defaults
//! - [`validate`] - data-quality diagnostics for loaded routes

pub mod config;
pub mod demand;
pub mod validate;

pub use config::{
    load_config, load_config_or_default, parse_config, write_config_template, PlanConfig,
    RunConfig, SolverConfig, CONFIG_TEMPLATE,
};
pub use demand::{load_routes, read_routes};
pub use validate::inspect_routes;
