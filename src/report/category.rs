use serde::{Deserialize, Serialize};

/// Placeholder replaced with the section name when a header is rendered
pub const HEADER_PLACEHOLDER: &str = "<header>";

/// One relationship type a report line can be classified into
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Appended to the report file stem (e.g. `_AL_report`)
    pub suffix: String,
    /// Literal substring marking membership
    pub identifier: String,
    /// Header line, with `<header>` standing in for the section name
    #[serde(rename = "header")]
    pub header_template: String,
}

impl Category {
    pub fn new(
        suffix: impl Into<String>,
        identifier: impl Into<String>,
        header_template: impl Into<String>,
    ) -> Self {
        Self {
            suffix: suffix.into(),
            identifier: identifier.into(),
            header_template: header_template.into(),
        }
    }

    /// Whether `line` belongs to this category
    pub fn matches(&self, line: &str) -> bool {
        line.contains(&self.identifier)
    }

    /// Header text for the given section
    pub fn header_for(&self, section: &str) -> String {
        self.header_template.replace(HEADER_PLACEHOLDER, section)
    }
}

/// Ordered set of report categories
///
/// Populated once at startup and handed to the engine by reference. Order only
/// decides the order reports are produced in.
#[derive(Debug, Clone, Default)]
pub struct CategoryRegistry {
    categories: Vec<Category>,
}

impl CategoryRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The four IRRUT100 relationship categories
    pub fn irrut100() -> Self {
        let mut registry = Self::new();
        registry.register("_AL_report", "In access list of", "Access list for <header>");
        registry.register(
            "_SAL_report",
            "In standard access list of",
            "Standard access list for <header>",
        );
        registry.register("_owner_report", "Owner of", "<header> is owner of");
        registry.register("_create_report", "Create group of", "<header> is creator of");
        registry
    }

    pub fn register(
        &mut self,
        suffix: impl Into<String>,
        identifier: impl Into<String>,
        header_template: impl Into<String>,
    ) {
        self.push(Category::new(suffix, identifier, header_template));
    }

    pub fn push(&mut self, category: Category) {
        tracing::debug!(
            "Registered category {} for lines containing {:?}",
            category.suffix,
            category.identifier
        );
        self.categories.push(category);
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Extend<Category> for CategoryRegistry {
    fn extend<I: IntoIterator<Item = Category>>(&mut self, iter: I) {
        for category in iter {
            self.push(category);
        }
    }
}
