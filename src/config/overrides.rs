//! Command-line overrides and the effective settings of a run

use std::path::PathBuf;

use serde::Serialize;

use super::RazzConfig;
use crate::report::{CategoryRegistry, RedactionRules, RenderConfig, ReportFormat, RunTag};

/// A flag that was given wins, otherwise the configured value is used
pub fn effective<T>(flag: Option<T>, config: T) -> T {
    flag.unwrap_or(config)
}

/// Values set on the command line; `None` means the flag was not given
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CliOverrides {
    pub input: Option<String>,
    pub destination: Option<String>,
    pub obfuscate: Option<bool>,
    pub minimalist: Option<bool>,
    pub use_header: Option<bool>,
}

/// Everything a sort needs, resolved once before any input is read
#[derive(Debug, Clone)]
pub struct Settings {
    pub input_dataset: String,
    pub stage_input: bool,
    pub dataset_root: PathBuf,
    pub render: RenderConfig,
    pub registry: CategoryRegistry,
    pub redaction: RedactionRules,
}

impl Settings {
    pub fn resolve(config: &RazzConfig, overrides: &CliOverrides, run_tag: RunTag) -> Self {
        let formats = config.formats.enabled();
        if formats.contains(&ReportFormat::Json) {
            tracing::warn!("JSON reports are not supported yet, formats.json is ignored");
        }

        let render = RenderConfig {
            formats,
            use_header: effective(overrides.use_header, config.reports.use_header),
            sort_alphabetically: config.sorting.sort_alphabetically,
            obfuscate_file_names: effective(overrides.obfuscate, config.data.obfuscate_file_names),
            minimalist_mode: effective(overrides.minimalist, config.reports.minimalist_mode),
            destination: effective(overrides.destination.clone(), config.data.destination.clone()),
            run_tag,
        };

        let mut registry = CategoryRegistry::irrut100();
        registry.extend(config.categories.iter().cloned());

        let mut redaction = RedactionRules::irrut100();
        redaction.extend(config.reports.extra_redactions.iter().cloned());

        Self {
            input_dataset: effective(overrides.input.clone(), config.data.input_dataset.clone()),
            stage_input: config.data.stage_input,
            dataset_root: config
                .data
                .dataset_root
                .clone()
                .unwrap_or_else(|| PathBuf::from(".")),
            render,
            registry,
            redaction,
        }
    }
}
