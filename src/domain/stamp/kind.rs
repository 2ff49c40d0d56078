//! Stamp kind value object

use std::fmt;

/// The date/time stamps this tool can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StampKind {
    /// Journal entry prefix, e.g. `2023-04-16: Sunday... `
    JournalPrefix,
    /// Plain date, e.g. `2023-04-16`
    DatePrefix,
    /// Filename-safe timestamp, e.g. `2023_04_16__14_05_09`
    TimeSuffix,
    /// RFC3339 timestamp, e.g. `2023-04-16T14:05:09-05:00`
    Iso8601,
    /// ISO year and week, e.g. `2023-W15`
    YearWeek,
    /// Templated front-matter block with the date filled in
    FrontMatter,
}

impl StampKind {
    /// All kinds, in menu order.
    pub const ALL: [StampKind; 6] = [
        Self::JournalPrefix,
        Self::DatePrefix,
        Self::TimeSuffix,
        Self::Iso8601,
        Self::YearWeek,
        Self::FrontMatter,
    ];

    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::JournalPrefix => "journal",
            Self::DatePrefix => "date",
            Self::TimeSuffix => "time",
            Self::Iso8601 => "iso8601",
            Self::YearWeek => "week",
            Self::FrontMatter => "front-matter",
        }
    }

    /// Human-readable noun for status lines and notifications
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::JournalPrefix => "journal prefix",
            Self::DatePrefix => "date prefix",
            Self::TimeSuffix => "time suffix",
            Self::Iso8601 => "ISO 8601 timestamp",
            Self::YearWeek => "year-week",
            Self::FrontMatter => "front matter",
        }
    }
}

impl fmt::Display for StampKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
