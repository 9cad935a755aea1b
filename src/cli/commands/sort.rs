use anyhow::Result;
use clap::Args;

use crate::cli::Output;
use crate::config::{CliOverrides, RazzConfig, Settings};
use crate::dataset::{self, DatasetStore, FileDatasetStore};
use crate::report::{Category, Engine, RenderOutcome, ReportRenderer, RunTag, SectionSink};

#[derive(Args, Debug, Default, Clone)]
pub struct SortArgs {
    /// Use "redacted" instead of the profile name in report file names
    #[arg(short, long, global = true)]
    pub obfuscate: bool,

    /// Strip boilerplate phrasing from report lines
    #[arg(short, long, global = true)]
    pub minimalist: bool,

    /// Leave the header line out of every report
    #[arg(short = 'n', long, global = true, conflicts_with = "header")]
    pub noheader: bool,

    /// Write the header line even if the configuration turns it off
    #[arg(long, global = true)]
    pub header: bool,

    /// Dataset holding the IRRUT100 listing
    #[arg(short, long, value_name = "DATASET", global = true)]
    pub input: Option<String>,

    /// Prefix for report file paths
    #[arg(short, long, value_name = "PATH", global = true)]
    pub destination: Option<String>,
}

impl SortArgs {
    /// Flags that were actually given
    pub fn overrides(&self) -> CliOverrides {
        let use_header = if self.noheader {
            Some(false)
        } else if self.header {
            Some(true)
        } else {
            None
        };

        CliOverrides {
            input: self.input.clone(),
            destination: self.destination.clone(),
            obfuscate: self.obfuscate.then_some(true),
            minimalist: self.minimalist.then_some(true),
            use_header,
        }
    }
}

/// How a sort ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortStatus {
    /// No dataset name was configured or given
    NoDataset,
    /// The named dataset does not exist
    Missing,
    Completed {
        sections: usize,
        classified: usize,
        written: usize,
        skipped: usize,
    },
}

pub fn execute(args: &SortArgs, custom_config: Option<&str>, output: &Output) -> Result<()> {
    let config = RazzConfig::load(custom_config)?;
    config.validate()?;

    let settings = Settings::resolve(&config, &args.overrides(), RunTag::now());
    let store = FileDatasetStore::new(settings.dataset_root.clone());
    sort_dataset(&settings, &store, output)?;
    Ok(())
}

/// Fetch the listing and write every report for it
pub fn sort_dataset(
    settings: &Settings,
    store: &dyn DatasetStore,
    output: &Output,
) -> Result<SortStatus> {
    let name = settings.input_dataset.as_str();
    if name.is_empty() {
        output.warning("No dataset was supplied, sort cancelled");
        return Ok(SortStatus::NoDataset);
    }
    if !store.exists(name)? {
        output.warning("Target dataset doesn't exist, sort cancelled");
        return Ok(SortStatus::Missing);
    }

    output.info("Target dataset exists, beginning sort...");
    let contents = store.read(name)?;

    if settings.stage_input {
        let staged = dataset::stage_input(&settings.render.destination, &contents)?;
        output.verbose(&format!("Staged input at {}", staged.display()));
    }

    let lines: Vec<&str> = contents.lines().collect();
    output.info(&format!("Sorting {} instance(s)", dataset::count_sections(&contents)));

    let mut sink = ConsoleSink {
        renderer: ReportRenderer::new(settings.render.clone(), settings.redaction.clone()),
        output,
        written: 0,
        skipped: 0,
    };
    let summary = Engine::new(&settings.registry).process(&lines, &mut sink)?;

    output.success(&format!("Sorted {} section(s)", summary.sections.len()));
    output.summary_stats("Lines classified:", summary.classified);
    output.summary_stats("Reports written:", sink.written);
    output.summary_stats("Reports skipped:", sink.skipped);

    Ok(SortStatus::Completed {
        sections: summary.sections.len(),
        classified: summary.classified,
        written: sink.written,
        skipped: sink.skipped,
    })
}

/// Renders reports and reports progress on the console
struct ConsoleSink<'a> {
    renderer: ReportRenderer,
    output: &'a Output,
    written: usize,
    skipped: usize,
}

impl SectionSink for ConsoleSink<'_> {
    fn begin_section(&mut self, section: &str) {
        self.output.step(&format!("Writing for {section}"));
    }

    fn render(&mut self, section: &str, category: &Category, lines: &[String]) -> Result<()> {
        match self.renderer.render(section, category, lines)? {
            RenderOutcome::Skipped { stem } => {
                self.skipped += 1;
                self.output.info(&format!(
                    "Skipped report {stem}, because there was nothing to report on"
                ));
            }
            RenderOutcome::Written(reports) => {
                for report in reports {
                    self.written += 1;
                    self.output.success(&format!(
                        "Created {} report: {}",
                        report.format,
                        report.path.display()
                    ));
                }
            }
        }
        Ok(())
    }
}
