//! CLI argument definitions using clap
//!
//! Commands:
//! - phonedb init --config <path>
//! - phonedb start --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// phonedb - a self-documenting catalog of phones, manufacturers, and carriers
#[derive(Parser, Debug)]
#[command(name = "phonedb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default configuration file
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./phonedb.json")]
        config: PathBuf,
    },

    /// Start the catalog HTTP server
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./phonedb.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
