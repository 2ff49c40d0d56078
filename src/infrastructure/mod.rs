//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the system clipboard, terminal, and desktop
//! notification services.

pub mod clipboard;
pub mod clock;
pub mod config;
pub mod menu;
pub mod notification;

// Re-export adapters
pub use clipboard::{create_clipboard, ArboardClipboard, InMemoryClipboard};
pub use clock::{FixedClock, SystemClock};
pub use config::XdgConfigStore;
pub use menu::TerminalMenuHost;
pub use notification::{create_notifier, NoOpNotifier, NotifyRustNotifier};
