//! # Razzberry
//!
//! Sorts the output of the RACF IRRUT100 utility into reports.
//!
//! IRRUT100 lists, for every profile, each place a user or group ID occurs:
//! access lists, standard access lists, ownership and group creation. This
//! crate splits that listing into per-profile sections, classifies every line
//! into a relationship category, and writes one CSV and/or text report per
//! profile and category.
//!
//! ```bash
//! # sort the dataset named in razz.toml
//! razzberry
//!
//! # minimalist reports with obfuscated file names
//! razzberry -m -o -i SYS1.IRRUT100.OUTPUT -d ./reports/
//! ```

pub mod cli;
pub mod config;
pub mod dataset;
pub mod report;

pub use cli::{Cli, Output};
pub use config::RazzConfig;

/// Result type alias for Razzberry operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
