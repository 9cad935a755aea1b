//! Configuration management for Razzberry
//!
//! Settings come from a TOML file (`razz.toml` by default) with four required
//! tables: `data`, `formats`, `reports` and `sorting`. Command-line flags are
//! applied on top by [`overrides`].

use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::report::{Category, ReportFormat};

pub mod load;
pub mod overrides;

pub use overrides::{CliOverrides, Settings, effective};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RazzConfig {
    pub data: DataConfig,
    pub formats: FormatsConfig,
    pub reports: ReportsConfig,
    pub sorting: SortingConfig,

    /// Categories added after the built-in ones
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<Category>,
}

/// Input and output locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Dataset holding the IRRUT100 listing
    pub input_dataset: String,

    /// Prefix for every report path, empty for the working directory
    pub destination: String,

    /// Replace profile names in report file names
    pub obfuscate_file_names: bool,

    /// Keep a copy of the fetched listing at `<destination>input.txt`
    #[serde(default = "default_stage_input")]
    pub stage_input: bool,

    /// Directory dataset names are resolved against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset_root: Option<PathBuf>,
}

fn default_stage_input() -> bool {
    true
}

/// Which report formats to write
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatsConfig {
    pub csv: bool,
    pub txt: bool,
    pub json: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportsConfig {
    pub use_header: bool,

    /// Strip boilerplate phrasing from report lines
    pub minimalist_mode: bool,

    /// Phrases stripped in minimalist mode after the built-in ones
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_redactions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortingConfig {
    pub sort_alphabetically: bool,
}

impl FormatsConfig {
    pub fn enabled(&self) -> BTreeSet<ReportFormat> {
        [
            (ReportFormat::Csv, self.csv),
            (ReportFormat::Txt, self.txt),
            (ReportFormat::Json, self.json),
        ]
        .into_iter()
        .filter_map(|(format, on)| on.then_some(format))
        .collect()
    }
}

impl RazzConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        for category in &self.categories {
            if category.suffix.is_empty() {
                anyhow::bail!("Category for {:?} needs a suffix", category.identifier);
            }
            if category.identifier.is_empty() {
                anyhow::bail!("Category {} needs an identifier", category.suffix);
            }
        }

        if !self.formats.enabled().iter().any(|f| f.is_rendered()) {
            tracing::warn!("No csv or txt output enabled, no reports will be written");
        }

        Ok(())
    }
}
