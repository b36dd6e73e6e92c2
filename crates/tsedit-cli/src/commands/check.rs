//! Check command implementation

use colored::Colorize;
use tsedit_config::{ConfigFile, GameConfigLoader};

use crate::error::Result;

/// Load every configuration file and print a per-file summary.
pub fn run_check(loader: &GameConfigLoader) -> Result<()> {
    let config = loader.load()?;

    println!("{}", "Game Configuration".bold());
    println!();
    println!("{}:   {}", "Game".dimmed(), loader.resolver().game_dir().display());
    println!("{}: {}", "Editor".dimmed(), loader.config_dir().display());
    println!();

    for file in ConfigFile::ALL {
        let parsed = config.get(file);
        if parsed.is_empty() {
            println!("  {} {:<13} {}", "-".yellow(), file.to_string(), "empty".dimmed());
        } else {
            let keys: usize = parsed.iter().map(|s| s.len()).sum();
            println!(
                "  {} {:<13} {} sections, {} keys",
                "+".green(),
                file.to_string().cyan(),
                parsed.len(),
                keys
            );
        }
    }

    println!();
    println!(
        "{}: {} sections applied to {}",
        "Art overrides".dimmed(),
        config.art_overrides_applied(),
        ConfigFile::FirestormArt
    );

    Ok(())
}
