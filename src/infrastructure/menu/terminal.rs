//! Terminal menu host using crossterm
//!
//! Renders the action list in the alternate screen and maps single
//! keypresses to selections. Stands in for a platform status-bar menu
//! on systems without one.

use async_trait::async_trait;
use colored::*;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute, queue,
    terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};
use std::time::Duration;

use crate::application::ports::{MenuError, MenuEvent, MenuHost};
use crate::domain::menu::MenuAction;

const POLL_INTERVAL: Duration = Duration::from_millis(100);
const SEPARATOR: &str = "------------------------------";

/// One row of the rendered menu
enum Entry {
    Item {
        action: MenuAction,
        label: String,
        enabled: bool,
    },
    Separator,
}

/// Menu host that draws into a terminal
pub struct TerminalMenuHost<W>
where
    W: Write + Send,
{
    out: W,
    entries: Vec<Entry>,
    status: Option<String>,
    pending_show: bool,
    raw_mode: bool,
}

impl TerminalMenuHost<io::Stdout> {
    /// Create a host that draws to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W> TerminalMenuHost<W>
where
    W: Write + Send,
{
    /// Create a host over an arbitrary writer
    pub fn new(out: W) -> Self {
        Self {
            out,
            entries: Vec::new(),
            status: None,
            pending_show: true,
            raw_mode: false,
        }
    }

    fn draw(&mut self) -> io::Result<()> {
        if self.raw_mode {
            queue!(self.out, MoveTo(0, 0), Clear(ClearType::All))?;
        }
        write!(self.out, "{}\r\n\r\n", "Stampbar".bold())?;

        for entry in &self.entries {
            match entry {
                Entry::Separator => {
                    write!(self.out, "      {}\r\n", SEPARATOR.dimmed())?;
                }
                Entry::Item {
                    action,
                    label,
                    enabled,
                } => {
                    let key = format!("[{}]", action.hotkey());
                    if *enabled {
                        write!(self.out, "  {} {}\r\n", key.cyan(), label)?;
                    } else {
                        write!(self.out, "  {} {}\r\n", key.dimmed(), label.as_str().dimmed())?;
                    }
                }
            }
        }

        write!(self.out, "\r\n")?;
        if let Some(status) = &self.status {
            write!(self.out, "  {}\r\n", status.as_str().green())?;
        }
        write!(
            self.out,
            "  {}\r\n",
            "Press a key to choose, Esc to quit".dimmed()
        )?;
        self.out.flush()
    }

    fn map_key(&self, key: KeyEvent) -> Option<MenuEvent> {
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(MenuEvent::Closed),
            (_, KeyCode::Esc) => Some(MenuEvent::Closed),
            (_, KeyCode::Char(c)) => self.entries.iter().find_map(|entry| match entry {
                Entry::Item {
                    action, enabled, ..
                } if action.hotkey() == c && *enabled => Some(MenuEvent::Selected(*action)),
                _ => None,
            }),
            _ => None,
        }
    }
}

#[async_trait]
impl<W> MenuHost for TerminalMenuHost<W>
where
    W: Write + Send,
{
    fn add_item(&mut self, action: MenuAction, label: &str, enabled: bool) {
        self.entries.push(Entry::Item {
            action,
            label: label.to_string(),
            enabled,
        });
    }

    fn add_separator(&mut self) {
        self.entries.push(Entry::Separator);
    }

    fn set_label(&mut self, action: MenuAction, label: &str) {
        for entry in &mut self.entries {
            if let Entry::Item {
                action: registered,
                label: current,
                ..
            } = entry
            {
                if *registered == action {
                    *current = label.to_string();
                }
            }
        }
    }

    fn set_enabled(&mut self, action: MenuAction, enabled: bool) {
        for entry in &mut self.entries {
            if let Entry::Item {
                action: registered,
                enabled: current,
                ..
            } = entry
            {
                if *registered == action {
                    *current = enabled;
                }
            }
        }
    }

    fn set_status(&mut self, message: &str) {
        self.status = Some(message.to_string());
    }

    async fn open(&mut self) -> Result<(), MenuError> {
        enable_raw_mode().map_err(|e| MenuError::InitFailed(e.to_string()))?;
        execute!(self.out, EnterAlternateScreen, Hide)
            .map_err(|e| MenuError::InitFailed(e.to_string()))?;
        self.raw_mode = true;
        self.pending_show = true;
        Ok(())
    }

    async fn close(&mut self) -> Result<(), MenuError> {
        if !self.raw_mode {
            return Ok(());
        }
        self.raw_mode = false;
        disable_raw_mode().map_err(|e| MenuError::Io(e.to_string()))?;
        execute!(self.out, LeaveAlternateScreen, Show).map_err(|e| MenuError::Io(e.to_string()))?;
        Ok(())
    }

    async fn next_event(&mut self) -> Result<MenuEvent, MenuError> {
        if self.pending_show {
            self.pending_show = false;
            return Ok(MenuEvent::WillShow);
        }

        self.draw().map_err(|e| MenuError::Io(e.to_string()))?;

        // Poll with a short timeout so the task stays responsive to
        // shutdown without a dedicated input thread.
        loop {
            let ready =
                event::poll(POLL_INTERVAL).map_err(|e| MenuError::Io(e.to_string()))?;
            if !ready {
                tokio::task::yield_now().await;
                continue;
            }
            if let Event::Key(key) = event::read().map_err(|e| MenuError::Io(e.to_string()))? {
                if let Some(menu_event) = self.map_key(key) {
                    if matches!(menu_event, MenuEvent::Selected(_)) {
                        // The menu is redrawn after the action runs, so
                        // labels get a refresh pass first.
                        self.pending_show = true;
                    }
                    return Ok(menu_event);
                }
            }
        }
    }
}

impl<W> Drop for TerminalMenuHost<W>
where
    W: Write + Send,
{
    fn drop(&mut self) {
        if self.raw_mode {
            let _ = disable_raw_mode();
            let _ = execute!(self.out, LeaveAlternateScreen, Show);
        }
    }
}
