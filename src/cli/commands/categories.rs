use anyhow::Result;

use crate::cli::Output;
use crate::config::{CliOverrides, RazzConfig, Settings};
use crate::report::RunTag;

/// List the categories lines are classified into, in report order
pub fn execute(custom_config: Option<&str>, output: &Output) -> Result<()> {
    let config = RazzConfig::load(custom_config)?;
    let settings = Settings::resolve(&config, &CliOverrides::default(), RunTag::now());

    output.section_header("Report categories");
    for category in settings.registry.categories() {
        output.key_value(&category.suffix, &format!("{:?}", category.identifier));
        output.verbose(&format!("  header: {}", category.header_template));
    }
    output.summary_stats("Redaction rules:", settings.redaction.rules().len());

    Ok(())
}
