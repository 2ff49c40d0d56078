//! Notification infrastructure module
//!
//! Provides cross-platform notification support using notify-rust
//! (primary) or a no-op fallback when notifications are disabled.

mod noop;
mod notify_rust;

pub use noop::NoOpNotifier;
pub use notify_rust::NotifyRustNotifier;

use crate::application::ports::Notifier;

/// Create the notifier matching the notify setting
///
/// Uses notify-rust (cross-platform) when enabled, a no-op otherwise.
pub fn create_notifier(enabled: bool) -> Box<dyn Notifier> {
    if enabled {
        Box::new(NotifyRustNotifier::new())
    } else {
        Box::new(NoOpNotifier::new())
    }
}
