//! `busplan solvers`

use anyhow::Result;
use busplan_algo::LpSolverKind;

use super::RunOutcome;

pub fn handle() -> Result<RunOutcome> {
    let default = LpSolverKind::default();
    println!("Available MILP backends:");
    for name in LpSolverKind::available() {
        if *name == default.as_str() {
            println!("  {} (default)", name);
        } else {
            println!("  {}", name);
        }
    }
    Ok(RunOutcome::Success)
}
