//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod controller;
pub mod ports;
pub mod snapshot_manager;

// Re-export use cases
pub use controller::{ActionOutcome, MenuController};
pub use snapshot_manager::SnapshotManager;
