//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// tsedit - Inspect the game configuration the map editor works with
#[derive(Parser, Debug)]
#[command(name = "tsedit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file (defaults to the platform config directory)
    #[arg(long, global = true, env = "TSEDIT_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Game installation directory, overrides the settings file
    #[arg(long, global = true, env = "TSEDIT_GAME_DIR")]
    pub game_dir: Option<PathBuf>,

    /// Editor config directory, overrides the settings file
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Skip lines without '=' instead of failing
    #[arg(long, global = true)]
    pub lenient: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Load every configuration file and report what was found
    Check,

    /// List the sections of a configuration file
    ///
    /// Examples:
    ///   tsedit sections rules.ini
    ///   tsedit sections artfs.ini
    Sections {
        /// Logical file name (rules.ini, firestrm.ini, art.ini, artfs.ini, ai.ini, aifs.ini)
        file: String,
    },

    /// Print the entries of a section, or a single value
    Show {
        /// Logical file name
        file: String,

        /// Section name (case-insensitive)
        section: String,

        /// Only print this key
        key: Option<String>,
    },

    /// List trigger event types from the editor's event catalog
    Events {
        /// Include event types hidden from the editor
        #[arg(long)]
        all: bool,
    },

    /// Print a configuration file in canonical form, or save it
    Dump {
        /// Logical file name
        file: String,

        /// Write to this path instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}
