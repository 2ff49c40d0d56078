//! In-memory clipboard adapter
//!
//! A process-local stand-in for the system clipboard. Clones share the
//! same store, mirroring how every real clipboard handle points at the
//! one global slot. Used by tests and available for headless runs.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::application::ports::{ClipboardAccess, ClipboardError};
use crate::domain::snapshot::ClipboardSnapshot;

/// Clipboard adapter backed by process memory
#[derive(Clone, Default)]
pub struct InMemoryClipboard {
    store: Arc<Mutex<Option<ClipboardSnapshot>>>,
}

impl InMemoryClipboard {
    /// Create an empty in-memory clipboard
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an in-memory clipboard already holding `text`
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            store: Arc::new(Mutex::new(Some(ClipboardSnapshot::from_text(text)))),
        }
    }
}

#[async_trait]
impl ClipboardAccess for InMemoryClipboard {
    async fn read_all(&self) -> Option<ClipboardSnapshot> {
        self.store.lock().await.clone()
    }

    async fn clear(&self) -> Result<(), ClipboardError> {
        *self.store.lock().await = None;
        Ok(())
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        *self.store.lock().await = Some(ClipboardSnapshot::from_text(text));
        Ok(())
    }

    async fn write_representations(
        &self,
        snapshot: &ClipboardSnapshot,
    ) -> Result<(), ClipboardError> {
        *self.store.lock().await = Some(snapshot.clone());
        Ok(())
    }
}
