//! Menu host port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::menu::MenuAction;

/// Menu host errors
#[derive(Debug, Clone, Error)]
pub enum MenuError {
    #[error("Failed to initialize menu host: {0}")]
    InitFailed(String),

    #[error("Menu host I/O error: {0}")]
    Io(String),
}

/// Events delivered by a menu host, one at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// The menu is about to be (re)shown; dynamic labels should be
    /// refreshed before the host renders
    WillShow,

    /// The user selected an enabled action
    Selected(MenuAction),

    /// The user dismissed the host without selecting anything
    Closed,
}

/// Port for the surface that displays the menu and reports selections.
///
/// Hosts are single-threaded: events are pulled one at a time and no
/// action handler runs while another is in flight. Every render is
/// preceded by a [`MenuEvent::WillShow`] so labels always reflect "now".
#[async_trait]
pub trait MenuHost: Send {
    /// Register an action at the next position in the menu
    fn add_item(&mut self, action: MenuAction, label: &str, enabled: bool);

    /// Register a visual separator at the next position
    fn add_separator(&mut self);

    /// Replace the label of a registered action
    fn set_label(&mut self, action: MenuAction, label: &str);

    /// Enable or disable a registered action
    fn set_enabled(&mut self, action: MenuAction, enabled: bool);

    /// Show a transient status message alongside the menu
    fn set_status(&mut self, _message: &str) {}

    /// Take over the display surface
    async fn open(&mut self) -> Result<(), MenuError>;

    /// Release the display surface
    async fn close(&mut self) -> Result<(), MenuError>;

    /// Wait for the next event
    async fn next_event(&mut self) -> Result<MenuEvent, MenuError>;
}

/// Blanket implementation for boxed menu hosts
#[async_trait]
impl MenuHost for Box<dyn MenuHost> {
    fn add_item(&mut self, action: MenuAction, label: &str, enabled: bool) {
        self.as_mut().add_item(action, label, enabled)
    }

    fn add_separator(&mut self) {
        self.as_mut().add_separator()
    }

    fn set_label(&mut self, action: MenuAction, label: &str) {
        self.as_mut().set_label(action, label)
    }

    fn set_enabled(&mut self, action: MenuAction, enabled: bool) {
        self.as_mut().set_enabled(action, enabled)
    }

    fn set_status(&mut self, message: &str) {
        self.as_mut().set_status(message)
    }

    async fn open(&mut self) -> Result<(), MenuError> {
        self.as_mut().open().await
    }

    async fn close(&mut self) -> Result<(), MenuError> {
        self.as_mut().close().await
    }

    async fn next_event(&mut self) -> Result<MenuEvent, MenuError> {
        self.as_mut().next_event().await
    }
}
