//! Interactive menu runner

use std::process::ExitCode;

use tracing::warn;

use crate::application::ports::{ClipboardAccess, Clock, MenuError, MenuEvent, MenuHost, Notifier};
use crate::application::{ActionOutcome, MenuController};
use crate::domain::config::AppConfig;
use crate::domain::menu::{MenuAction, MENU_ORDER};
use crate::domain::stamp::StampFormatter;
use crate::infrastructure::{create_clipboard, create_notifier, SystemClock, TerminalMenuHost};

use super::app::{EXIT_ERROR, EXIT_SUCCESS};
use super::presenter::Presenter;

/// Run the interactive menu until the user quits
pub async fn run_menu(config: AppConfig) -> ExitCode {
    let presenter = Presenter::new();
    let notify = config.notify_or_default();

    let mut controller = MenuController::new(
        create_clipboard(),
        SystemClock::new(),
        create_notifier(notify),
        StampFormatter::from_config(&config),
        notify,
    );

    let mut host = TerminalMenuHost::stdout();
    populate(&mut host, &controller);

    if let Err(e) = host.open().await {
        presenter.error(&format!("Failed to open menu: {}", e));
        return ExitCode::from(EXIT_ERROR);
    }

    let result = menu_loop(&mut host, &mut controller).await;

    if let Err(e) = host.close().await {
        warn!(error = %e, "failed to release terminal");
    }

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Register the fixed menu layout: restore on top, one item per stamp,
/// quit at the bottom
fn populate<H, C, K, N>(host: &mut H, controller: &MenuController<C, K, N>)
where
    H: MenuHost,
    C: ClipboardAccess,
    K: Clock,
    N: Notifier,
{
    for action in MENU_ORDER {
        if action == MenuAction::Quit {
            host.add_separator();
        }

        let enabled = match action {
            MenuAction::Restore => controller.can_restore(),
            _ => true,
        };
        host.add_item(action, &controller.label_for(action), enabled);

        if action == MenuAction::Restore {
            host.add_separator();
        }
    }
}

/// Drive the host's event stream against the controller.
///
/// Clipboard failures show up on the status line and the menu stays
/// open; only host failures end the loop early.
async fn menu_loop<H, C, K, N>(
    host: &mut H,
    controller: &mut MenuController<C, K, N>,
) -> Result<(), MenuError>
where
    H: MenuHost,
    C: ClipboardAccess,
    K: Clock,
    N: Notifier,
{
    loop {
        match host.next_event().await? {
            MenuEvent::WillShow => {
                for (action, label) in controller.dynamic_labels() {
                    host.set_label(action, &label);
                }
                host.set_enabled(MenuAction::Restore, controller.can_restore());
            }
            MenuEvent::Selected(action) => match controller.handle(action).await {
                Ok(ActionOutcome::Quit) => break,
                Ok(outcome) => host.set_status(&outcome.describe()),
                Err(e) => {
                    warn!(error = %e, "clipboard action failed");
                    host.set_status(&format!("Error: {}", e));
                }
            },
            MenuEvent::Closed => break,
        }
    }

    Ok(())
}
