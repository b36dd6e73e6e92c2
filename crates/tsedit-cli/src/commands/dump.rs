//! Dump command implementation

use std::path::Path;

use colored::Colorize;
use tsedit_config::GameConfigLoader;

use crate::context;
use crate::error::Result;

/// Print a file in canonical form, or write it to `out`.
pub fn run_dump(loader: &GameConfigLoader, file: &str, out: Option<&Path>) -> Result<()> {
    let file = context::config_file(file)?;
    let config = loader.load()?;
    let parsed = config.get(file);

    match out {
        Some(path) => {
            parsed.save(path)?;
            println!(
                "{} Wrote {} ({} sections) to {}",
                "OK".green().bold(),
                file,
                parsed.len(),
                path.display()
            );
        }
        None => print!("{}", parsed),
    }
    Ok(())
}
