//! Clipboard save/restore use case

use tracing::debug;

use crate::domain::snapshot::{ClipboardSnapshot, SnapshotSlot};

use super::ports::{ClipboardAccess, ClipboardError};

/// Guards every clipboard overwrite with a one-level restore.
///
/// Before a copy replaces the clipboard, the current contents are
/// captured into a single slot. Restore writes the slot back and
/// empties it. There is no history: a second copy replaces the held
/// snapshot unless the clipboard still contains our own previous write.
pub struct SnapshotManager<C>
where
    C: ClipboardAccess,
{
    clipboard: C,
    slot: SnapshotSlot,
}

impl<C> SnapshotManager<C>
where
    C: ClipboardAccess,
{
    /// Create a manager with an empty slot
    pub fn new(clipboard: C) -> Self {
        Self {
            clipboard,
            slot: SnapshotSlot::new(),
        }
    }

    /// True when a restore would write something back
    pub fn can_restore(&self) -> bool {
        self.slot.can_restore()
    }

    /// Read the clipboard without touching the slot.
    ///
    /// # Returns
    /// `Some(snapshot)` of every representation, `None` when empty
    pub async fn capture_current(&self) -> Option<ClipboardSnapshot> {
        self.clipboard.read_all().await
    }

    /// Capture the clipboard into the slot, replacing any held snapshot.
    ///
    /// An empty clipboard empties the slot and disables restore.
    pub async fn save_before_overwrite(&mut self) {
        let capture = self.capture_current().await;
        let replaced = self.slot.record_capture(capture);
        debug!(replaced, can_restore = self.slot.can_restore(), "captured clipboard");
    }

    /// Save the current clipboard, then overwrite it with `value` as
    /// plain text. This is the only path that puts new content on the
    /// clipboard.
    pub async fn write_string(&mut self, value: &str) -> Result<(), ClipboardError> {
        self.save_before_overwrite().await;
        self.clipboard.clear().await?;
        self.clipboard.write_text(value).await?;
        self.slot.record_write(value);
        debug!(len = value.len(), "wrote text to clipboard");
        Ok(())
    }

    /// Write the held snapshot back and empty the slot.
    ///
    /// # Returns
    /// `true` when a snapshot was restored, `false` when the slot was
    /// empty and the clipboard was left untouched
    pub async fn restore(&mut self) -> Result<bool, ClipboardError> {
        let Some(snapshot) = self.slot.take() else {
            debug!("restore requested with an empty slot");
            return Ok(false);
        };
        self.clipboard.clear().await?;
        self.clipboard.write_representations(&snapshot).await?;
        debug!(
            representations = snapshot.representations().len(),
            "restored clipboard"
        );
        Ok(true)
    }
}
