//! Pure timestamp-to-string formatting
//!
//! Every menu copy action is a function of the current timestamp; all of those
//! functions live here so they can be pinned to a fixed instant in tests.

use chrono::{DateTime, FixedOffset, SecondsFormat};

use crate::domain::config::AppConfig;

use super::front_matter::FrontMatterTemplate;
use super::kind::StampKind;

/// Suffix appended to the journal prefix when none is configured.
pub const DEFAULT_JOURNAL_SUFFIX: &str = "... ";

/// Formats any [`StampKind`] for a given instant.
///
/// The journal suffix and front-matter template are the only configurable
/// pieces; everything else is a fixed chrono pattern.
#[derive(Debug, Clone)]
pub struct StampFormatter {
    journal_suffix: String,
    front_matter: FrontMatterTemplate,
}

impl StampFormatter {
    /// Create a formatter with an explicit journal suffix and template.
    pub fn new(journal_suffix: impl Into<String>, front_matter: FrontMatterTemplate) -> Self {
        Self {
            journal_suffix: journal_suffix.into(),
            front_matter,
        }
    }

    /// Create a formatter from the merged application config.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.journal_suffix_or_default(),
            FrontMatterTemplate::new(config.front_matter_template_or_default()),
        )
    }

    /// Format the stamp of the given kind for the given instant.
    pub fn format(&self, kind: StampKind, now: DateTime<FixedOffset>) -> String {
        match kind {
            StampKind::JournalPrefix => self.journal_prefix(now),
            StampKind::DatePrefix => date_prefix(now),
            StampKind::TimeSuffix => time_suffix(now),
            StampKind::Iso8601 => iso8601(now),
            StampKind::YearWeek => year_week(now),
            StampKind::FrontMatter => self.front_matter.render(&iso8601(now)),
        }
    }

    fn journal_prefix(&self, now: DateTime<FixedOffset>) -> String {
        format!("{}{}", now.format("%Y-%m-%d: %A"), self.journal_suffix)
    }
}

impl Default for StampFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_JOURNAL_SUFFIX, FrontMatterTemplate::default())
    }
}

/// `YYYY-MM-DD`
pub fn date_prefix(now: DateTime<FixedOffset>) -> String {
    now.format("%Y-%m-%d").to_string()
}

/// `YYYY_MM_DD__HH_mm_ss`, safe for filenames
pub fn time_suffix(now: DateTime<FixedOffset>) -> String {
    now.format("%Y_%m_%d__%H_%M_%S").to_string()
}

/// RFC3339 with seconds precision and a numeric UTC offset
pub fn iso8601(now: DateTime<FixedOffset>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// ISO week-year and zero-padded ISO week, e.g. `2023-W15`.
///
/// `%G` (week-based year) is deliberate: around New Year the ISO week belongs
/// to a different year than `%Y` reports.
pub fn year_week(now: DateTime<FixedOffset>) -> String {
    now.format("%G-W%V").to_string()
}
