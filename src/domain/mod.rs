//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod menu;
pub mod snapshot;
pub mod stamp;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use menu::{MenuAction, MENU_ORDER};
pub use snapshot::{ClipboardSnapshot, Representation, SnapshotSlot};
pub use stamp::{FrontMatterTemplate, StampFormatter, StampKind};
