//! Menu action dispatch use case

use tracing::info;

use crate::domain::menu::{MenuAction, MENU_ORDER};
use crate::domain::stamp::{StampFormatter, StampKind};

use super::ports::{ClipboardAccess, ClipboardError, Clock, NotificationIcon, Notifier};
use super::snapshot_manager::SnapshotManager;

/// What an action did, for status lines and notifications
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// A stamp was formatted and placed on the clipboard
    Copied { kind: StampKind, text: String },
    /// The held snapshot was written back
    Restored,
    /// Restore ran with nothing held; the clipboard was not touched
    NothingToRestore,
    /// The user asked to quit
    Quit,
}

impl ActionOutcome {
    /// One-line human-readable description
    pub fn describe(&self) -> String {
        match self {
            Self::Copied { kind, .. } => format!("Copied {}", kind.describe()),
            Self::Restored => "Restored previous clipboard".to_string(),
            Self::NothingToRestore => "Nothing to restore".to_string(),
            Self::Quit => "Quitting".to_string(),
        }
    }
}

/// Dispatches menu actions and keeps labels in sync with "now".
///
/// Copy actions format a stamp for the current instant and push it
/// through the snapshot manager, so the pre-copy clipboard is always
/// recoverable until the next copy.
pub struct MenuController<C, K, N>
where
    C: ClipboardAccess,
    K: Clock,
    N: Notifier,
{
    snapshots: SnapshotManager<C>,
    clock: K,
    notifier: N,
    formatter: StampFormatter,
    notify: bool,
}

impl<C, K, N> MenuController<C, K, N>
where
    C: ClipboardAccess,
    K: Clock,
    N: Notifier,
{
    /// Create a controller over the given ports
    pub fn new(clipboard: C, clock: K, notifier: N, formatter: StampFormatter, notify: bool) -> Self {
        Self {
            snapshots: SnapshotManager::new(clipboard),
            clock,
            notifier,
            formatter,
            notify,
        }
    }

    /// True when the restore action should be selectable
    pub fn can_restore(&self) -> bool {
        self.snapshots.can_restore()
    }

    /// Current label for an action, with today's value filled in for
    /// dynamic labels
    pub fn label_for(&self, action: MenuAction) -> String {
        match action {
            MenuAction::Copy(kind) if action.has_dynamic_label() => {
                let value = self.formatter.format(kind, self.clock.now());
                format!("{} ({})", action.base_label(), value)
            }
            _ => action.base_label().to_string(),
        }
    }

    /// Labels that embed "now", recomputed for the current instant
    pub fn dynamic_labels(&self) -> Vec<(MenuAction, String)> {
        MENU_ORDER
            .iter()
            .copied()
            .filter(|action| action.has_dynamic_label())
            .map(|action| (action, self.label_for(action)))
            .collect()
    }

    /// Run one action to completion
    pub async fn handle(&mut self, action: MenuAction) -> Result<ActionOutcome, ClipboardError> {
        let outcome = match action {
            MenuAction::Copy(kind) => {
                let text = self.formatter.format(kind, self.clock.now());
                self.snapshots.write_string(&text).await?;
                info!(kind = %kind, "copied stamp");
                ActionOutcome::Copied { kind, text }
            }
            MenuAction::Restore => {
                if self.snapshots.restore().await? {
                    info!("restored clipboard");
                    ActionOutcome::Restored
                } else {
                    ActionOutcome::NothingToRestore
                }
            }
            MenuAction::Quit => ActionOutcome::Quit,
        };

        if self.notify {
            let icon = match &outcome {
                ActionOutcome::Copied { .. } => NotificationIcon::Success,
                ActionOutcome::Restored => NotificationIcon::Info,
                ActionOutcome::NothingToRestore => NotificationIcon::Warning,
                ActionOutcome::Quit => return Ok(outcome),
            };
            let _ = self
                .notifier
                .notify("Stampbar", &outcome.describe(), icon)
                .await;
        }

        Ok(outcome)
    }
}
