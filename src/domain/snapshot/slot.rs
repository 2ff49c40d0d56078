//! Single-slot snapshot store with the restore state machine

use super::representation::ClipboardSnapshot;

/// Holds at most one clipboard snapshot, captured immediately before a
/// copy action overwrites the clipboard.
///
/// State machine:
///   EMPTY   -> HOLDING (record_capture with content)
///   HOLDING -> HOLDING (record_capture with content)
///   HOLDING -> EMPTY   (record_capture of an empty clipboard, or take)
///   EMPTY   -> EMPTY   (record_capture of an empty clipboard, or take)
///
/// Restore is possible exactly while the slot is HOLDING.
///
/// The slot also remembers the last text this process wrote to the
/// clipboard. When a capture finds exactly that text still on the
/// clipboard, the capture is dropped instead of replacing the held
/// snapshot: copying twice in a row must not turn our own first stamp
/// into the thing restore brings back.
#[derive(Debug, Default)]
pub struct SnapshotSlot {
    held: Option<ClipboardSnapshot>,
    last_written: Option<String>,
}

impl SnapshotSlot {
    /// Create an empty slot
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the slot holds a snapshot that restore could write back
    pub fn can_restore(&self) -> bool {
        self.held.is_some()
    }

    /// Record what the clipboard held just before a copy action.
    ///
    /// `None` means the clipboard was empty; the slot empties too, so a
    /// later restore cannot resurrect older content the user already
    /// clobbered themselves.
    ///
    /// Returns true when the capture replaced the slot's contents.
    pub fn record_capture(&mut self, capture: Option<ClipboardSnapshot>) -> bool {
        if let (Some(snapshot), Some(last)) = (&capture, &self.last_written) {
            if snapshot.is_single_text(last) {
                return false;
            }
        }
        self.held = capture;
        true
    }

    /// Record the text a copy action just wrote to the clipboard
    pub fn record_write(&mut self, text: impl Into<String>) {
        self.last_written = Some(text.into());
    }

    /// Take the held snapshot for writing back to the clipboard.
    ///
    /// Empties the slot; a restored clipboard is no longer something we
    /// wrote, so the last-written marker is cleared as well.
    pub fn take(&mut self) -> Option<ClipboardSnapshot> {
        self.last_written = None;
        self.held.take()
    }

    /// The held snapshot, if any
    pub fn peek(&self) -> Option<&ClipboardSnapshot> {
        self.held.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::snapshot::Representation;

    #[test]
    fn new_slot_cannot_restore() {
        let slot = SnapshotSlot::new();
        assert!(!slot.can_restore());
    }

    #[test]
    fn capture_with_content_enables_restore() {
        let mut slot = SnapshotSlot::new();
        assert!(slot.record_capture(Some(ClipboardSnapshot::from_text("before"))));
        assert!(slot.can_restore());
        assert_eq!(slot.peek().unwrap().text(), Some("before"));
    }

    #[test]
    fn capture_of_empty_clipboard_disables_restore() {
        let mut slot = SnapshotSlot::new();
        slot.record_capture(Some(ClipboardSnapshot::from_text("before")));

        assert!(slot.record_capture(None));
        assert!(!slot.can_restore());
    }

    #[test]
    fn take_empties_the_slot() {
        let mut slot = SnapshotSlot::new();
        slot.record_capture(Some(ClipboardSnapshot::from_text("before")));

        let taken = slot.take().unwrap();
        assert_eq!(taken.text(), Some("before"));
        assert!(!slot.can_restore());
        assert!(slot.take().is_none());
    }

    #[test]
    fn later_capture_replaces_earlier_one() {
        let mut slot = SnapshotSlot::new();
        slot.record_capture(Some(ClipboardSnapshot::from_text("first")));
        slot.record_capture(Some(ClipboardSnapshot::from_text("second")));

        assert_eq!(slot.take().unwrap().text(), Some("second"));
    }

    #[test]
    fn capture_of_own_write_keeps_the_older_snapshot() {
        let mut slot = SnapshotSlot::new();

        // First copy: clipboard held "user text", we wrote "stamp-a".
        slot.record_capture(Some(ClipboardSnapshot::from_text("user text")));
        slot.record_write("stamp-a");

        // Second copy: clipboard still holds our own "stamp-a".
        assert!(!slot.record_capture(Some(ClipboardSnapshot::from_text("stamp-a"))));
        slot.record_write("stamp-b");

        // Restore brings back the user's text, not our first stamp.
        assert_eq!(slot.take().unwrap().text(), Some("user text"));
    }

    #[test]
    fn own_write_rule_needs_exact_single_text_match() {
        let mut slot = SnapshotSlot::new();
        slot.record_capture(Some(ClipboardSnapshot::from_text("user text")));
        slot.record_write("stamp-a");

        // The user copied something else between our two copies.
        assert!(slot.record_capture(Some(ClipboardSnapshot::from_text("stamp-a extra"))));
        assert_eq!(slot.peek().unwrap().text(), Some("stamp-a extra"));
    }

    #[test]
    fn own_write_rule_ignores_multi_representation_captures() {
        let mut slot = SnapshotSlot::new();
        slot.record_capture(Some(ClipboardSnapshot::from_text("user text")));
        slot.record_write("stamp-a");

        // Same text, but an image rode along, so someone else produced it.
        let mixed = ClipboardSnapshot::from_representations(vec![
            Representation::image(1, 1, vec![0, 0, 0, 255]),
            Representation::text("stamp-a"),
        ])
        .unwrap();
        assert!(slot.record_capture(Some(mixed.clone())));
        assert_eq!(slot.peek(), Some(&mixed));
    }

    #[test]
    fn take_clears_the_last_written_marker() {
        let mut slot = SnapshotSlot::new();
        slot.record_capture(Some(ClipboardSnapshot::from_text("user text")));
        slot.record_write("stamp-a");
        slot.take();

        // After a restore the clipboard no longer holds our write, so a
        // capture of the same text must be treated as user content.
        assert!(slot.record_capture(Some(ClipboardSnapshot::from_text("stamp-a"))));
        assert!(slot.can_restore());
    }
}
