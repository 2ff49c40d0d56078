//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod clipboard;
pub mod clock;
pub mod config;
pub mod menu;
pub mod notifier;

// Re-export common types
pub use clipboard::{ClipboardAccess, ClipboardError};
pub use clock::Clock;
pub use config::ConfigStore;
pub use menu::{MenuError, MenuEvent, MenuHost};
pub use notifier::{NotificationError, NotificationIcon, Notifier};
