pub mod calendar;
pub mod dashboard;
pub mod init;
pub mod login;
pub mod logout;
pub mod stats;
pub mod subject;
pub mod todo;

use crate::api::Tracker;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Sign in to the dashboard server")]
    Login,
    #[command(about = "Drop the cached session and stored password")]
    Logout,
    #[command(about = "Show the dashboard: subjects, progress chart and todo list")]
    Dashboard,
    #[command(about = "Edit or delete a subject")]
    Subject(subject::SubjectArgs),
    #[command(about = "Open the todo panel or manage tasks")]
    Todo(todo::TodoArgs),
    #[command(about = "Show goal progress stats")]
    Stats,
    #[command(about = "Open the reminder calendar")]
    Calendar(calendar::CalendarArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Login => login::cmd().await,
            Commands::Logout => logout::cmd(),
            Commands::Dashboard => dashboard::cmd().await,
            Commands::Subject(args) => subject::cmd(args).await,
            Commands::Todo(args) => todo::cmd(args).await,
            Commands::Stats => stats::cmd().await,
            Commands::Calendar(args) => calendar::cmd(args).await,
        }
    }
}

/// Builds a server client from the saved configuration. Commands that
/// talk to the server all start here.
fn connect() -> Result<Tracker> {
    let config = Config::read()?;
    match config.tracker {
        Some(ref tracker_config) => Tracker::new(tracker_config),
        None => Err(msg_error_anyhow!(Message::TrackerNotConfigured)),
    }
}
