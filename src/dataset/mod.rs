//! Access to the dataset holding the IRRUT100 listing
//!
//! On the mainframe the listing lives in a cataloged dataset. Off-host the
//! dataset name is resolved against a local directory, so a listing
//! downloaded as `SYS1.IRRUT100.OUTPUT` can be sorted as-is.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::report::SECTION_MARKER;

/// Name of the staged copy written next to the reports
pub const STAGED_INPUT_FILE: &str = "input.txt";

/// Where listings are read from
pub trait DatasetStore {
    fn exists(&self, name: &str) -> Result<bool>;

    /// Full contents of the dataset as text
    fn read(&self, name: &str) -> Result<String>;
}

/// Resolves dataset names to files under a root directory
#[derive(Debug, Clone)]
pub struct FileDatasetStore {
    root: PathBuf,
}

impl FileDatasetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl DatasetStore for FileDatasetStore {
    fn exists(&self, name: &str) -> Result<bool> {
        Ok(self.path_for(name).is_file())
    }

    fn read(&self, name: &str) -> Result<String> {
        let path = self.path_for(name);
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read dataset {}: {}", name, path.display()))
    }
}

/// Datasets held in memory, keyed by name
#[derive(Debug, Clone, Default)]
pub struct MemoryDatasetStore {
    datasets: HashMap<String, String>,
}

impl MemoryDatasetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, contents: impl Into<String>) {
        self.datasets.insert(name.into(), contents.into());
    }
}

impl DatasetStore for MemoryDatasetStore {
    fn exists(&self, name: &str) -> Result<bool> {
        Ok(self.datasets.contains_key(name))
    }

    fn read(&self, name: &str) -> Result<String> {
        self.datasets
            .get(name)
            .cloned()
            .with_context(|| format!("Dataset not found: {name}"))
    }
}

/// Write the fetched listing to `<destination>input.txt`, replacing any earlier copy
pub fn stage_input(destination: &str, contents: &str) -> Result<PathBuf> {
    let path = PathBuf::from(format!("{destination}{STAGED_INPUT_FILE}"));
    remove_stale(&path)?;
    fs::write(&path, contents)
        .with_context(|| format!("Failed to stage input: {}", path.display()))?;
    tracing::debug!("Staged input at {}", path.display());
    Ok(path)
}

fn remove_stale(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path)
            .with_context(|| format!("Failed to remove previous input: {}", path.display()))?;
    }
    Ok(())
}

/// Number of profile sections announced in a listing
pub fn count_sections(contents: &str) -> usize {
    contents.matches(SECTION_MARKER).count()
}
