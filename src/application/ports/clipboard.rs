//! Clipboard port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::snapshot::ClipboardSnapshot;

/// Clipboard errors
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to write to clipboard: {0}")]
    WriteFailed(String),
}

/// Port for clipboard operations.
///
/// Reading never fails: a clipboard that cannot be reached is reported
/// the same way as an empty one, by returning `None`. Only writes can
/// fail, and those failures surface to the caller.
#[async_trait]
pub trait ClipboardAccess: Send + Sync {
    /// Read every representation of the item currently on the clipboard.
    ///
    /// # Returns
    /// `Some(snapshot)` with all representations, or `None` when the
    /// clipboard is empty or unreadable
    async fn read_all(&self) -> Option<ClipboardSnapshot>;

    /// Clear the clipboard.
    async fn clear(&self) -> Result<(), ClipboardError>;

    /// Write `text` as the plain-text representation.
    ///
    /// # Arguments
    /// * `text` - The text to place on the clipboard
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;

    /// Write back every representation of a snapshot.
    ///
    /// # Arguments
    /// * `snapshot` - The snapshot to write back
    async fn write_representations(
        &self,
        snapshot: &ClipboardSnapshot,
    ) -> Result<(), ClipboardError>;
}

/// Blanket implementation for boxed clipboard types
#[async_trait]
impl ClipboardAccess for Box<dyn ClipboardAccess> {
    async fn read_all(&self) -> Option<ClipboardSnapshot> {
        self.as_ref().read_all().await
    }

    async fn clear(&self) -> Result<(), ClipboardError> {
        self.as_ref().clear().await
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.as_ref().write_text(text).await
    }

    async fn write_representations(
        &self,
        snapshot: &ClipboardSnapshot,
    ) -> Result<(), ClipboardError> {
        self.as_ref().write_representations(snapshot).await
    }
}
