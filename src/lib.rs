//! Stampbar - date and time stamps for the clipboard
//!
//! This crate formats a small set of date/time stamps (journal prefix, date,
//! time suffix, ISO 8601, year-week, front matter) and copies them to the
//! system clipboard, holding a one-level snapshot of whatever the copy
//! overwrote so it can be restored.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Stamp formats, the snapshot slot, menu actions, config, and errors
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (arboard, crossterm, notify-rust, TOML config)
//! - **CLI**: Command-line interface, argument parsing, and the menu runner

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
