use anyhow::Result;
use async_std::task;
use clap::Parser;
use reversi_console::cli::Cli;
use reversi_console::connectors::StdinSource;
use reversi_console::view::ConsoleView;
use reversi_console::Driver;
use reversi_engine::Game;
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // stdout carries the board; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    info!(?cli, "starting console game");

    let mut driver = Driver::new(
        Game::new(cli.first),
        StdinSource::new(),
        io::stdout(),
        ConsoleView::new(cli.symbols),
    );
    let outcome = task::block_on(driver.run())?;

    info!(?outcome, "session ended");
    Ok(())
}
