//! Tic-Tac-Toe
//!
//! Opens the game window, or runs the headless REPL with `tictactoe repl`.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tictactoe::cli::{Cli, Command};
use tictactoe::ui::{theme, TicTacToeApp};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_filter.as_deref());

    match cli.front_end() {
        Command::Gui => run_gui(),
        Command::Repl => run_repl(),
    }
}

/// Install the subscriber; `--log-filter` wins over RUST_LOG, default `warn`.
/// Logs go to stderr so REPL output stays clean.
fn init_tracing(filter: Option<&str>) {
    let filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_gui() -> Result<()> {
    info!("opening window");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(theme::WINDOW_SIZE)
            .with_min_inner_size(theme::WINDOW_SIZE)
            .with_max_inner_size(theme::WINDOW_SIZE)
            .with_resizable(false)
            .with_title(theme::WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        theme::WINDOW_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(TicTacToeApp::new(cc)))),
    )
    .map_err(|err| anyhow!("failed to run window: {err}"))
}

fn run_repl() -> Result<()> {
    info!("starting repl");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    tictactoe::repl::run(stdin.lock(), stdout.lock()).context("repl i/o failed")
}
