//! Stampbar CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stampbar::cli::{
    app::{load_merged_config, run_copy, run_show, EXIT_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    menu_app::run_menu,
    presenter::Presenter,
};
use stampbar::domain::config::AppConfig;
use stampbar::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Set up logging
    let filter = if cli.debug {
        "stampbar=debug,info"
    } else {
        "stampbar=info,warn"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Build CLI config from args
    let cli_config = AppConfig {
        notify: if cli.notify { Some(true) } else { None },
        ..Default::default()
    };

    match cli.command {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        Some(Commands::Copy { stamp }) => {
            let config = load_merged_config(cli_config).await;
            run_copy(stamp.into(), config).await
        }
        Some(Commands::Show { stamp }) => {
            let config = load_merged_config(cli_config).await;
            run_show(stamp.map(Into::into), config)
        }
        None => {
            let config = load_merged_config(cli_config).await;
            run_menu(config).await
        }
    }
}
