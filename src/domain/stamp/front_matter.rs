//! Front-matter template value object

/// Placeholder replaced with the ISO8601 timestamp when rendering.
pub const DATE_PLACEHOLDER: &str = "{date}";

/// Template shipped when no custom one is configured.
pub const DEFAULT_TEMPLATE: &str = "---\ntitle:\ndate: {date}\ntags:\n---\n";

/// A front-matter block template with a `{date}` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatterTemplate {
    template: String,
}

impl FrontMatterTemplate {
    /// Create a template from the given text.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Render the block with `date` substituted for every `{date}` placeholder.
    pub fn render(&self, date: &str) -> String {
        self.template.replace(DATE_PLACEHOLDER, date)
    }

    /// The raw template text.
    pub fn as_str(&self) -> &str {
        &self.template
    }
}

impl Default for FrontMatterTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE)
    }
}
