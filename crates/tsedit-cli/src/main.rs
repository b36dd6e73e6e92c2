//! tsedit CLI
//!
//! Command-line inspection of the game configuration the map editor loads.

mod cli;
mod commands;
mod context;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to initialise logging: {}", "warning".yellow(), e);
    }

    let Some(command) = cli.command.clone() else {
        println!("{} Game configuration inspector", "tsedit".green().bold());
        println!();
        println!("Run {} for available commands.", "tsedit --help".cyan());
        return Ok(());
    };

    let loader = context::loader(&cli)?;
    match command {
        Commands::Check => commands::run_check(&loader),
        Commands::Sections { file } => commands::run_sections(&loader, &file),
        Commands::Show { file, section, key } => {
            commands::run_show(&loader, &file, &section, key.as_deref())
        }
        Commands::Events { all } => commands::run_events(&loader, all),
        Commands::Dump { file, out } => commands::run_dump(&loader, &file, out.as_deref()),
    }
}
