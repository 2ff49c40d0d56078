//! App runners for the one-shot subcommands

use std::process::ExitCode;

use crate::application::ports::{Clock, ConfigStore};
use crate::application::{ActionOutcome, MenuController};
use crate::domain::config::AppConfig;
use crate::domain::menu::MenuAction;
use crate::domain::stamp::{StampFormatter, StampKind};
use crate::infrastructure::{create_clipboard, create_notifier, SystemClock, XdgConfigStore};

use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Copy a single stamp to the clipboard and exit
pub async fn run_copy(kind: StampKind, config: AppConfig) -> ExitCode {
    let presenter = Presenter::new();
    let notify = config.notify_or_default();

    let mut controller = MenuController::new(
        create_clipboard(),
        SystemClock::new(),
        create_notifier(notify),
        StampFormatter::from_config(&config),
        notify,
    );

    match controller.handle(MenuAction::Copy(kind)).await {
        Ok(outcome) => {
            if let ActionOutcome::Copied { text, .. } = outcome {
                presenter.output(&text);
                presenter.info("Copied to clipboard");
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Print one stamp (or all of them) without touching the clipboard
pub fn run_show(kind: Option<StampKind>, config: AppConfig) -> ExitCode {
    let presenter = Presenter::new();
    let formatter = StampFormatter::from_config(&config);
    let now = SystemClock::new().now();

    match kind {
        Some(kind) => presenter.output(&formatter.format(kind, now)),
        None => {
            for kind in StampKind::ALL {
                presenter.key_value(kind.as_str(), &formatter.format(kind, now));
            }
        }
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Load and merge configuration from file and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    // Merge: defaults < file < cli
    AppConfig::defaults().merge(file_config).merge(cli_config)
}
