//! Writes classified sections out as CSV and plain-text reports

use std::collections::BTreeSet;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::engine::SectionSink;
use super::redact::RedactionRules;

/// File name component used instead of the section name when obfuscating
pub const OBFUSCATED_SECTION: &str = "redacted";

/// Output formats a report can be requested in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Csv,
    Txt,
    Json,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Txt => "txt",
            ReportFormat::Json => "json",
        }
    }

    /// Formats that actually produce a file
    pub fn is_rendered(self) -> bool {
        !matches!(self, ReportFormat::Json)
    }

    fn terminator(self) -> &'static str {
        match self {
            ReportFormat::Csv => ";\n",
            _ => "\n",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Prefix shared by every file written during one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunTag(String);

impl RunTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Tag derived from the current local time
    pub fn now() -> Self {
        let stamp = chrono::Local::now().format("d-%m-%d-%Y-t-%H-%M-%S");
        Self(format!("razzberry_{stamp}_"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RunTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Effective rendering settings for one run
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub formats: BTreeSet<ReportFormat>,
    pub use_header: bool,
    pub sort_alphabetically: bool,
    pub obfuscate_file_names: bool,
    pub minimalist_mode: bool,
    /// Literal prefix of every output path
    pub destination: String,
    pub run_tag: RunTag,
}

/// A file produced by the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenReport {
    pub path: PathBuf,
    pub format: ReportFormat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Nothing was accumulated for the category
    Skipped { stem: String },
    Written(Vec<WrittenReport>),
}

/// Renders one category of one section into report files
#[derive(Debug, Clone)]
pub struct ReportRenderer {
    config: RenderConfig,
    redaction: RedactionRules,
}

impl ReportRenderer {
    pub fn new(config: RenderConfig, redaction: RedactionRules) -> Self {
        Self { config, redaction }
    }

    /// Path of the report without its extension
    pub fn file_stem(&self, section: &str, category: &Category) -> String {
        let section = if self.config.obfuscate_file_names {
            OBFUSCATED_SECTION
        } else {
            section
        };
        format!(
            "{}{}{}{}",
            self.config.destination, self.config.run_tag, section, category.suffix
        )
    }

    /// Lines in output order, before redaction
    pub fn order_lines<'l>(&self, lines: &'l [String]) -> Vec<&'l str> {
        let mut ordered: Vec<&str> = lines.iter().map(String::as_str).collect();
        if self.config.sort_alphabetically {
            tracing::debug!("Sorting alphabetically");
            ordered.sort_unstable();
        }
        ordered
    }

    /// Lines exactly as they will be written
    pub fn report_lines(&self, lines: &[String]) -> Vec<String> {
        self.order_lines(lines)
            .into_iter()
            .map(|line| {
                if self.config.minimalist_mode {
                    self.redaction.redact(line)
                } else {
                    line.to_string()
                }
            })
            .collect()
    }

    pub fn render(
        &self,
        section: &str,
        category: &Category,
        lines: &[String],
    ) -> Result<RenderOutcome> {
        let stem = self.file_stem(section, category);

        if lines.is_empty() {
            tracing::info!(
                "Skipped report {}, because there was nothing to report on",
                stem
            );
            return Ok(RenderOutcome::Skipped { stem });
        }

        let header = self
            .config
            .use_header
            .then(|| category.header_for(section));
        let body = self.report_lines(lines);

        let mut written = Vec::new();
        for format in self.config.formats.iter().copied().filter(|f| f.is_rendered()) {
            let path = PathBuf::from(format!("{}.{}", stem, format.extension()));
            write_report(&path, format, header.as_deref(), &body)?;
            tracing::info!("Created {} report: {}", format, path.display());
            written.push(WrittenReport { path, format });
        }

        Ok(RenderOutcome::Written(written))
    }
}

impl SectionSink for ReportRenderer {
    fn render(&mut self, section: &str, category: &Category, lines: &[String]) -> Result<()> {
        ReportRenderer::render(self, section, category, lines).map(|_| ())
    }
}

fn write_report(
    path: &Path,
    format: ReportFormat,
    header: Option<&str>,
    lines: &[String],
) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {} report: {}", format, path.display()))?;
    let mut out = BufWriter::new(file);
    let terminator = format.terminator();

    if let Some(header) = header {
        write!(out, "{header}{terminator}")
            .with_context(|| format!("Failed to write report: {}", path.display()))?;
    }
    for line in lines {
        write!(out, "{line}{terminator}")
            .with_context(|| format!("Failed to write report: {}", path.display()))?;
    }

    out.flush()
        .with_context(|| format!("Failed to write report: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::CategoryRegistry;
    use std::fs;
    use tempfile::TempDir;

    fn config(dir: &TempDir) -> RenderConfig {
        RenderConfig {
            formats: [ReportFormat::Csv, ReportFormat::Txt].into_iter().collect(),
            use_header: true,
            sort_alphabetically: false,
            obfuscate_file_names: false,
            minimalist_mode: false,
            destination: format!("{}/", dir.path().display()),
            run_tag: RunTag::new("run_"),
        }
    }

    fn access_list() -> Category {
        CategoryRegistry::irrut100().categories()[0].clone()
    }

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_csv_and_txt_written() {
        let dir = TempDir::new().unwrap();
        let renderer = ReportRenderer::new(config(&dir), RedactionRules::irrut100());

        let outcome = renderer
            .render("PROFILE1", &access_list(), &lines(&["In access list of PROFILE1: USERA"]))
            .unwrap();

        let RenderOutcome::Written(written) = outcome else {
            panic!("expected reports to be written");
        };
        assert_eq!(written.len(), 2);
        assert_eq!(written[0].format, ReportFormat::Csv);

        let csv = fs::read_to_string(dir.path().join("run_PROFILE1_AL_report.csv")).unwrap();
        assert_eq!(csv, "Access list for PROFILE1;\nIn access list of PROFILE1: USERA;\n");

        let txt = fs::read_to_string(dir.path().join("run_PROFILE1_AL_report.txt")).unwrap();
        assert_eq!(txt, "Access list for PROFILE1\nIn access list of PROFILE1: USERA\n");
    }

    #[test]
    fn test_empty_lines_skipped() {
        let dir = TempDir::new().unwrap();
        let renderer = ReportRenderer::new(config(&dir), RedactionRules::irrut100());

        let outcome = renderer.render("PROFILE1", &access_list(), &[]).unwrap();

        assert!(matches!(outcome, RenderOutcome::Skipped { .. }));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_sorted_output() {
        let dir = TempDir::new().unwrap();
        let mut cfg = config(&dir);
        cfg.sort_alphabetically = true;
        let renderer = ReportRenderer::new(cfg, RedactionRules::irrut100());

        assert_eq!(renderer.order_lines(&lines(&["Zebra", "Alpha"])), vec!["Alpha", "Zebra"]);
    }

    #[test]
    fn test_unsorted_keeps_input_order() {
        let dir = TempDir::new().unwrap();
        let renderer = ReportRenderer::new(config(&dir), RedactionRules::irrut100());

        assert_eq!(renderer.order_lines(&lines(&["Zebra", "Alpha"])), vec!["Zebra", "Alpha"]);
    }

    #[test]
    fn test_sort_uses_raw_lines_before_redaction() {
        let dir = TempDir::new().unwrap();
        let mut cfg = config(&dir);
        cfg.sort_alphabetically = true;
        cfg.minimalist_mode = true;
        let renderer = ReportRenderer::new(cfg, RedactionRules::irrut100());

        // raw order: "In access..." < "Owner of..." even though "ZED" > "AAA"
        let body = renderer.report_lines(&lines(&["Owner of AAA", "In access list of ZED"]));
        assert_eq!(body, vec!["ZED", "AAA"]);
    }

    #[test]
    fn test_minimalist_strips_boilerplate() {
        let dir = TempDir::new().unwrap();
        let mut cfg = config(&dir);
        cfg.minimalist_mode = true;
        let renderer = ReportRenderer::new(cfg, RedactionRules::irrut100());

        renderer
            .render("PROFILE1", &access_list(), &lines(&["In access list of PROFILE1: USERA"]))
            .unwrap();

        let txt = fs::read_to_string(dir.path().join("run_PROFILE1_AL_report.txt")).unwrap();
        assert_eq!(txt, "Access list for PROFILE1\nPROFILE1: USERA\n");
    }

    #[test]
    fn test_obfuscation_only_touches_file_name() {
        let dir = TempDir::new().unwrap();
        let mut cfg = config(&dir);
        cfg.obfuscate_file_names = true;
        let renderer = ReportRenderer::new(cfg, RedactionRules::irrut100());

        renderer
            .render("SECRET.PROFILE", &access_list(), &lines(&["In access list of SECRET.PROFILE"]))
            .unwrap();

        assert!(!dir.path().join("run_SECRET.PROFILE_AL_report.csv").exists());
        let csv = fs::read_to_string(dir.path().join("run_redacted_AL_report.csv")).unwrap();
        assert_eq!(csv, "Access list for SECRET.PROFILE;\nIn access list of SECRET.PROFILE;\n");
    }

    #[test]
    fn test_header_disabled() {
        let dir = TempDir::new().unwrap();
        let mut cfg = config(&dir);
        cfg.use_header = false;
        cfg.formats = [ReportFormat::Txt].into_iter().collect();
        let renderer = ReportRenderer::new(cfg, RedactionRules::irrut100());

        renderer
            .render("P", &access_list(), &lines(&["In access list of P"]))
            .unwrap();

        assert!(!dir.path().join("run_P_AL_report.csv").exists());
        let txt = fs::read_to_string(dir.path().join("run_P_AL_report.txt")).unwrap();
        assert_eq!(txt, "In access list of P\n");
    }

    #[test]
    fn test_json_only_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let mut cfg = config(&dir);
        cfg.formats = [ReportFormat::Json].into_iter().collect();
        let renderer = ReportRenderer::new(cfg, RedactionRules::irrut100());

        let outcome = renderer
            .render("P", &access_list(), &lines(&["In access list of P"]))
            .unwrap();

        assert_eq!(outcome, RenderOutcome::Written(Vec::new()));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_existing_report_truncated() {
        let dir = TempDir::new().unwrap();
        let mut cfg = config(&dir);
        cfg.use_header = false;
        let renderer = ReportRenderer::new(cfg, RedactionRules::irrut100());
        let target = dir.path().join("run_P_AL_report.txt");
        fs::write(&target, "stale\nstale\nstale\n").unwrap();

        renderer
            .render("P", &access_list(), &lines(&["In access list of P"]))
            .unwrap();

        assert_eq!(fs::read_to_string(target).unwrap(), "In access list of P\n");
    }

    #[test]
    fn test_unwritable_destination_is_error() {
        let dir = TempDir::new().unwrap();
        let mut cfg = config(&dir);
        cfg.destination = format!("{}/missing/dir/", dir.path().display());
        let renderer = ReportRenderer::new(cfg, RedactionRules::irrut100());

        let err = renderer
            .render("P", &access_list(), &lines(&["In access list of P"]))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to create csv report"));
    }

    #[test]
    fn test_engine_renders_directly() {
        use crate::report::Engine;

        let dir = TempDir::new().unwrap();
        let registry = CategoryRegistry::irrut100();
        let mut renderer = ReportRenderer::new(config(&dir), RedactionRules::irrut100());
        let listing = ["Occurrences of SYS1", "", "", "Create group of SYS1: GRP1"];

        let summary = Engine::new(&registry).process(&listing, &mut renderer).unwrap();

        assert_eq!(summary.sections.len(), 1);
        let txt = fs::read_to_string(dir.path().join("run_SYS1_create_report.txt")).unwrap();
        assert_eq!(txt, "SYS1 is creator of\nCreate group of SYS1: GRP1\n");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
    }

    #[test]
    fn test_run_tag_format() {
        let tag = RunTag::now();
        assert!(tag.as_str().starts_with("razzberry_d-"));
        assert!(tag.as_str().contains("-t-"));
        assert!(tag.as_str().ends_with('_'));
    }
}
