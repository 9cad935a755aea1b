//! Command-line interface for Razzberry
//!
//! Running `razzberry` without a subcommand sorts the configured dataset. The
//! sort flags are global, so they also shape what `config show` reports.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;
mod output;

pub use commands::sort::SortArgs;
pub use output::Output;

/// Razzberry - sort IRRUT100 output into per-profile reports
#[derive(Parser)]
#[command(name = "razzberry", author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<String>,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(flatten)]
    pub sort: SortArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
    /// List the active report categories
    Categories,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the merged configuration and the effective settings
    Show {
        /// Output format: toml or json
        #[arg(short, long, default_value = "toml")]
        format: String,
    },
    /// Validate the configuration file
    Validate,
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);
        let output = Output::new(self.verbose > 0, self.quiet);
        let config = self.config.as_deref();

        match self.command {
            None => commands::sort::execute(&self.sort, config, &output),
            Some(Commands::Config(cmd)) => {
                commands::config::execute(cmd, &self.sort, config, &output)
            }
            Some(Commands::Categories) => commands::categories::execute(config, &output),
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
