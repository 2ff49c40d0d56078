//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::stamp::{DEFAULT_FRONT_MATTER_TEMPLATE, DEFAULT_JOURNAL_SUFFIX};

/// Front-matter section of the configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrontMatterConfig {
    pub template: Option<String>,
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub notify: Option<bool>,
    pub journal_suffix: Option<String>,
    pub front_matter: Option<FrontMatterConfig>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            notify: Some(false),
            journal_suffix: Some(DEFAULT_JOURNAL_SUFFIX.to_string()),
            front_matter: Some(FrontMatterConfig {
                template: Some(DEFAULT_FRONT_MATTER_TEMPLATE.to_string()),
            }),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            notify: other.notify.or(self.notify),
            journal_suffix: other.journal_suffix.or(self.journal_suffix),
            front_matter: Self::merge_front_matter(self.front_matter, other.front_matter),
        }
    }

    /// Merge front-matter sections
    fn merge_front_matter(
        base: Option<FrontMatterConfig>,
        other: Option<FrontMatterConfig>,
    ) -> Option<FrontMatterConfig> {
        match (base, other) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(b), Some(o)) => Some(FrontMatterConfig {
                template: o.template.or(b.template),
            }),
        }
    }

    /// Get notify setting, or false if not set
    pub fn notify_or_default(&self) -> bool {
        self.notify.unwrap_or(false)
    }

    /// Get the journal suffix, or the built-in "... " if not set
    pub fn journal_suffix_or_default(&self) -> &str {
        self.journal_suffix
            .as_deref()
            .unwrap_or(DEFAULT_JOURNAL_SUFFIX)
    }

    /// Get the front-matter template, or the built-in one if not set
    pub fn front_matter_template_or_default(&self) -> &str {
        self.front_matter
            .as_ref()
            .and_then(|f| f.template.as_deref())
            .unwrap_or(DEFAULT_FRONT_MATTER_TEMPLATE)
    }
}
