//! Minimalist-mode cleanup of report lines
//!
//! IRRUT100 repeats the same relationship phrasing on every line ("In access
//! list of", "Owner of group", ...). Minimalist reports drop that phrasing so
//! only the profile and the user or group remain, which is easier to feed into
//! another utility.

/// Boilerplate removed in minimalist mode, longest phrasings first
const DEFAULT_RULES: &[&str] = &[
    "Owner of group",
    "Owner of",
    "In access list of group",
    "In access list of",
    "Standard access list for",
    "In standard access list of dataset profile",
    "In standard access list of general resource profile",
    "In standard access list of",
    "Create group of profile",
    "Create group of",
    "(G)",
];

/// Ordered list of boilerplate substrings
#[derive(Debug, Clone, Default)]
pub struct RedactionRules {
    rules: Vec<String>,
}

impl RedactionRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rules for IRRUT100 phrasing
    pub fn irrut100() -> Self {
        let mut rules = Self::new();
        for rule in DEFAULT_RULES {
            rules.register(*rule);
        }
        rules
    }

    /// Append a rule; empty rules are ignored
    pub fn register(&mut self, rule: impl Into<String>) {
        let rule = rule.into();
        if rule.is_empty() {
            tracing::debug!("Ignoring empty redaction rule");
            return;
        }
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[String] {
        &self.rules
    }

    /// Strip every registered phrase from `line`
    ///
    /// Each matching rule is removed in registration order and the remainder
    /// trimmed. Passes repeat until nothing changes, so the result is a fixed
    /// point: redacting it again returns it unchanged. A line no rule matches
    /// comes back exactly as given.
    pub fn redact(&self, line: &str) -> String {
        let mut cleaned = line.to_string();
        loop {
            let mut changed = false;
            for rule in &self.rules {
                if cleaned.contains(rule.as_str()) {
                    cleaned = cleaned.replace(rule.as_str(), "").trim().to_string();
                    changed = true;
                }
            }
            if !changed {
                return cleaned;
            }
        }
    }
}

impl<S: Into<String>> Extend<S> for RedactionRules {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for rule in iter {
            self.register(rule);
        }
    }
}
