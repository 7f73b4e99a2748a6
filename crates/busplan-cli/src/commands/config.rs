//! `busplan config`

use anyhow::{bail, Context, Result};
use busplan_io::write_config_template;
use std::path::Path;

use super::{load_config, RunOutcome};

pub fn handle_init(out: &Path, force: bool) -> Result<RunOutcome> {
    if out.exists() && !force {
        bail!(
            "{} already exists (pass --force to overwrite)",
            out.display()
        );
    }
    write_config_template(out)
        .with_context(|| format!("writing config template to {}", out.display()))?;
    println!("Config template written to {}", out.display());
    Ok(RunOutcome::Success)
}

pub fn handle_show(config: Option<&Path>) -> Result<RunOutcome> {
    let config = load_config(config)?;
    print!("{}", config.to_toml_string()?);
    Ok(RunOutcome::Success)
}
