//! Clipboard infrastructure module
//!
//! Provides cross-platform clipboard support using arboard, plus an
//! in-memory adapter for tests and headless use.

mod arboard;
mod memory;

pub use arboard::ArboardClipboard;
pub use memory::InMemoryClipboard;

use crate::application::ports::ClipboardAccess;

/// Create the default clipboard adapter for the current platform
///
/// Uses arboard (cross-platform) as the primary option.
pub fn create_clipboard() -> Box<dyn ClipboardAccess> {
    Box::new(ArboardClipboard::new())
}
