//! Configuration command implementations

use anyhow::Result;

use super::sort::SortArgs;
use crate::cli::{ConfigCommands, Output};
use crate::config::{RazzConfig, Settings};
use crate::report::RunTag;

/// Execute config commands
pub fn execute(
    cmd: ConfigCommands,
    args: &SortArgs,
    custom_config: Option<&str>,
    output: &Output,
) -> Result<()> {
    match cmd {
        ConfigCommands::Show { format } => show(&format, args, custom_config, output),
        ConfigCommands::Validate => validate(custom_config, output),
    }
}

fn show(format: &str, args: &SortArgs, custom_config: Option<&str>, output: &Output) -> Result<()> {
    let config = RazzConfig::load(custom_config)?;

    let rendered = match format.to_lowercase().as_str() {
        "toml" => config.to_toml()?,
        "json" => config.to_json()?,
        _ => anyhow::bail!("Unsupported format: {}. Use toml or json", format),
    };
    println!("{}", rendered.trim_end());

    let settings = Settings::resolve(&config, &args.overrides(), RunTag::now());
    let render = &settings.render;
    let formats: Vec<String> = render.formats.iter().map(|f| f.to_string()).collect();

    output.section_header("Effective settings");
    output.key_value("input", &settings.input_dataset);
    output.key_value("destination", &render.destination);
    output.key_value("formats", &formats.join(", "));
    output.key_value("use_header", &render.use_header.to_string());
    output.key_value("minimalist", &render.minimalist_mode.to_string());
    output.key_value("obfuscate", &render.obfuscate_file_names.to_string());
    output.key_value("sort", &render.sort_alphabetically.to_string());
    output.key_value("categories", &settings.registry.len().to_string());

    Ok(())
}

fn validate(custom_config: Option<&str>, output: &Output) -> Result<()> {
    let config = RazzConfig::load(custom_config)?;
    config.validate()?;
    output.success("Configuration is valid");
    Ok(())
}
