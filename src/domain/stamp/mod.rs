//! Stamp domain module

mod formatter;
mod front_matter;
mod kind;

pub use formatter::{StampFormatter, DEFAULT_JOURNAL_SUFFIX};
pub use front_matter::{
    FrontMatterTemplate, DATE_PLACEHOLDER, DEFAULT_TEMPLATE as DEFAULT_FRONT_MATTER_TEMPLATE,
};
pub use kind::StampKind;
