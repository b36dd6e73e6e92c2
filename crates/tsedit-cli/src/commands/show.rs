//! Section listing and lookup commands

use colored::Colorize;
use tsedit_config::GameConfigLoader;

use crate::context;
use crate::error::{CliError, Result};

/// Print the section names of a file, one per line.
pub fn run_sections(loader: &GameConfigLoader, file: &str) -> Result<()> {
    let file = context::config_file(file)?;
    let config = loader.load()?;

    for name in config.get(file).section_names() {
        println!("{}", name);
    }
    Ok(())
}

/// Print all entries of a section, or the value of one key.
pub fn run_show(
    loader: &GameConfigLoader,
    file: &str,
    section: &str,
    key: Option<&str>,
) -> Result<()> {
    let file = context::config_file(file)?;
    let config = loader.load()?;

    let found = config.get(file).section(section).ok_or_else(|| {
        CliError::user(format!("Section [{}] not found in {}", section, file))
    })?;

    match key {
        Some(key) => {
            let value = found.get(key).ok_or_else(|| {
                CliError::user(format!("Key {} not found in [{}]", key, found.name()))
            })?;
            println!("{}", value);
        }
        None => {
            println!("{}", format!("[{}]", found.name()).bold());
            for (k, v) in found.iter() {
                println!("{}={}", k.cyan(), v);
            }
        }
    }
    Ok(())
}
