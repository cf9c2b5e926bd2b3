use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "goal-focus")]
#[command(about = "Terminal client for Goal Focus goals and tasks")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run against the hosted Goal Focus backend
    Run,
    /// Run in dev mode with local in-memory data
    Dev,
    /// Authenticate via browser login
    Login,
    /// Remove the locally stored session token
    Logout,
    /// Print config path and create default file if missing
    ConfigPath,
}
