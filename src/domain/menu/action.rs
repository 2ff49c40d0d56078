//! Menu actions and their fixed ordering

use std::fmt;

use crate::domain::stamp::StampKind;

/// One selectable entry in the menu.
///
/// Actions are presentational: they carry a label and a hotkey but no
/// state of their own. Whether restore is currently selectable lives in
/// the snapshot slot, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    /// Write the held snapshot back to the clipboard
    Restore,
    /// Copy a stamp of the given kind
    Copy(StampKind),
    /// Terminate the process
    Quit,
}

/// Every action in display order: restore first, one copy per stamp
/// kind, quit last.
pub const MENU_ORDER: [MenuAction; 8] = [
    MenuAction::Restore,
    MenuAction::Copy(StampKind::JournalPrefix),
    MenuAction::Copy(StampKind::DatePrefix),
    MenuAction::Copy(StampKind::TimeSuffix),
    MenuAction::Copy(StampKind::Iso8601),
    MenuAction::Copy(StampKind::YearWeek),
    MenuAction::Copy(StampKind::FrontMatter),
    MenuAction::Quit,
];

impl MenuAction {
    /// Label shown when no dynamic value is available
    pub const fn base_label(&self) -> &'static str {
        match self {
            Self::Restore => "Restore clipboard",
            Self::Copy(StampKind::JournalPrefix) => "Copy journal prefix",
            Self::Copy(StampKind::DatePrefix) => "Copy date prefix",
            Self::Copy(StampKind::TimeSuffix) => "Copy time suffix",
            Self::Copy(StampKind::Iso8601) => "Copy ISO 8601",
            Self::Copy(StampKind::YearWeek) => "Copy year-week",
            Self::Copy(StampKind::FrontMatter) => "Copy front matter",
            Self::Quit => "Quit",
        }
    }

    /// Single-character accelerator
    pub const fn hotkey(&self) -> char {
        match self {
            Self::Restore => 'r',
            Self::Copy(StampKind::JournalPrefix) => 'j',
            Self::Copy(StampKind::DatePrefix) => 'd',
            Self::Copy(StampKind::TimeSuffix) => 't',
            Self::Copy(StampKind::Iso8601) => 'i',
            Self::Copy(StampKind::YearWeek) => 'w',
            Self::Copy(StampKind::FrontMatter) => 'f',
            Self::Quit => 'q',
        }
    }

    /// True for labels that embed "now" and must be refreshed every time
    /// the menu is about to be shown
    pub const fn has_dynamic_label(&self) -> bool {
        matches!(
            self,
            Self::Copy(StampKind::DatePrefix) | Self::Copy(StampKind::YearWeek)
        )
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn order_starts_with_restore_and_ends_with_quit() {
        assert_eq!(MENU_ORDER[0], MenuAction::Restore);
        assert_eq!(MENU_ORDER[MENU_ORDER.len() - 1], MenuAction::Quit);
    }

    #[test]
    fn order_contains_every_stamp_kind_once() {
        let copied: Vec<StampKind> = MENU_ORDER
            .iter()
            .filter_map(|action| match action {
                MenuAction::Copy(kind) => Some(*kind),
                _ => None,
            })
            .collect();
        assert_eq!(copied, StampKind::ALL.to_vec());
    }

    #[test]
    fn hotkeys_are_unique() {
        let keys: HashSet<char> = MENU_ORDER.iter().map(MenuAction::hotkey).collect();
        assert_eq!(keys.len(), MENU_ORDER.len());
    }

    #[test]
    fn only_date_and_week_labels_are_dynamic() {
        let dynamic: Vec<MenuAction> = MENU_ORDER
            .iter()
            .copied()
            .filter(MenuAction::has_dynamic_label)
            .collect();
        assert_eq!(
            dynamic,
            vec![
                MenuAction::Copy(StampKind::DatePrefix),
                MenuAction::Copy(StampKind::YearWeek),
            ]
        );
    }

    #[test]
    fn display_uses_the_base_label() {
        assert_eq!(MenuAction::Restore.to_string(), "Restore clipboard");
        assert_eq!(
            MenuAction::Copy(StampKind::Iso8601).to_string(),
            "Copy ISO 8601"
        );
    }
}
