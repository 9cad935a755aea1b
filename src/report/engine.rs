//! Segmentation and classification of IRRUT100 listings
//!
//! The listing is one long run of lines where every profile starts with an
//! `Occurrences of <PROFILE>` line. The engine walks the lines once, files each
//! line under every category whose identifier it contains, and hands the
//! collected lines to a [`SectionSink`] whenever a profile ends.

use std::ops::Range;

use anyhow::Result;

use super::category::{Category, CategoryRegistry};

/// Phrase that opens every profile section
pub const SECTION_MARKER: &str = "Occurrences of";

/// A marker among the first lines names the first section instead of closing one
const LEADING_LINES: usize = 3;

/// Receives the lines collected for each category when a section ends
pub trait SectionSink {
    /// Called once per category for every finished section, in registry order
    fn render(&mut self, section: &str, category: &Category, lines: &[String]) -> Result<()>;

    /// Called before the categories of a finished section are rendered
    fn begin_section(&mut self, _section: &str) {}
}

impl<F> SectionSink for F
where
    F: FnMut(&str, &Category, &[String]) -> Result<()>,
{
    fn render(&mut self, section: &str, category: &Category, lines: &[String]) -> Result<()> {
        self(section, category, lines)
    }
}

/// One finished section and the input lines that were classified into it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSpan {
    pub name: String,
    pub lines: Range<usize>,
}

/// What a single pass over the input produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessSummary {
    pub sections: Vec<SectionSpan>,
    /// Number of (line, category) matches
    pub classified: usize,
}

/// Splits a listing into sections and classifies their lines
#[derive(Debug, Clone)]
pub struct Engine<'a> {
    registry: &'a CategoryRegistry,
}

impl<'a> Engine<'a> {
    pub fn new(registry: &'a CategoryRegistry) -> Self {
        Self { registry }
    }

    pub fn is_boundary(&self, line: &str) -> bool {
        line.contains(SECTION_MARKER)
    }

    /// Section name carried by a marker line
    pub fn section_name(&self, line: &str) -> String {
        line.replace(SECTION_MARKER, "").trim().to_string()
    }

    /// Run the whole listing through the engine
    ///
    /// A section ends at every marker line past the leading lines, and at the
    /// last line of input. The marker line itself is classified into the
    /// section it closes. Accumulators live only for this call and are cleared
    /// after each flush, so exactly one section is ever open.
    pub fn process<S, K>(&self, lines: &[S], sink: &mut K) -> Result<ProcessSummary>
    where
        S: AsRef<str>,
        K: SectionSink + ?Sized,
    {
        let categories = self.registry.categories();
        let mut accumulators: Vec<Vec<String>> = vec![Vec::new(); categories.len()];
        let mut summary = ProcessSummary::default();
        let mut section_name = String::new();
        let mut section_start = 0;
        let last = lines.len().checked_sub(1);

        for (index, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            let marker = self.is_boundary(line);

            if marker && index < LEADING_LINES {
                section_name = self.section_name(line);
                tracing::debug!("Leading section {:?} at line {}", section_name, index);
            }

            for (category, accumulator) in categories.iter().zip(accumulators.iter_mut()) {
                if category.matches(line) {
                    accumulator.push(line.trim().to_string());
                    summary.classified += 1;
                }
            }

            let boundary = marker && index >= LEADING_LINES;
            if boundary || Some(index) == last {
                tracing::info!("Writing for {}", section_name);
                sink.begin_section(&section_name);
                for (category, accumulator) in categories.iter().zip(accumulators.iter_mut()) {
                    sink.render(&section_name, category, accumulator)?;
                    accumulator.clear();
                }

                summary.sections.push(SectionSpan {
                    name: section_name.clone(),
                    lines: section_start..index + 1,
                });
                section_start = index + 1;

                if boundary {
                    section_name = self.section_name(line);
                }
            }
        }

        Ok(summary)
    }
}
