mod app;
mod bootstrap;
mod cli;
mod config;
mod logging;
mod login;
mod runtime;
mod session_store;
mod ui;

use anyhow::{Context, Result};
use app::{App, Workspace};
use clap::Parser;
use cli::{Cli, Commands};
use config::FocusConfig;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use goal_focus::{AuthState, FocusWorkspace};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::from_filename(".env.focus").ok();

    let cli = Cli::parse();
    let config = FocusConfig::load()?;

    match cli.command {
        Commands::Run => run(config, false).await,
        Commands::Dev => run(config, true).await,
        Commands::Login => {
            logging::init_logging(&config)?;
            login::run_login(config.api_url()).await?;
            Ok(())
        }
        Commands::Logout => {
            session_store::clear_token()?;
            println!("Logged out. Session token removed.");
            Ok(())
        }
        Commands::ConfigPath => {
            let path = FocusConfig::config_path()?;
            if !path.exists() {
                FocusConfig::default().save()?;
                println!("Created default config.");
            }
            println!("{}", path.display());
            Ok(())
        }
    }
}

async fn run(config: FocusConfig, dev: bool) -> Result<()> {
    logging::init_logging(&config)?;
    tracing::info!(
        dev,
        ai_provider = %config.ai_provider,
        matcher = %config.matcher,
        "Starting goal-focus"
    );

    let client = Arc::new(bootstrap::build_client(&config, dev)?);
    let generator = bootstrap::build_generator(&config, client.clone())?;
    let matcher = bootstrap::build_matcher(config.matcher, generator);

    // Resolve the user before taking over the terminal so auth errors print normally.
    let auth = AuthState::new();
    bootstrap::sign_in(&client, &auth).await?;

    let mut workspace: Workspace = FocusWorkspace::with_matcher(client, matcher);
    let mut app = App::new(dev);

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, &mut app, &mut workspace, &auth).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = ?err, "goal-focus exited with error");
    }
    res
}
