use crate::api::ApiError;
use crate::libs::calendar::{can_add_reminder, CalendarState};
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_error, msg_print, msg_success};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct CalendarArgs {
    #[command(subcommand)]
    command: Option<CalendarCommands>,

    /// Month to display (YYYY-MM), defaults to the current month
    #[arg(short, long)]
    month: Option<String>,
}

#[derive(Debug, Subcommand)]
enum CalendarCommands {
    #[command(about = "Add a reminder for a date")]
    Add(AddArgs),
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Reminder date (YYYY-MM-DD), defaults to today
    date: Option<String>,
}

pub async fn cmd(calendar_args: CalendarArgs) -> Result<()> {
    match calendar_args.command {
        None => show(calendar_args.month).await,
        Some(CalendarCommands::Add(args)) => add(args).await,
    }
}

/// Renders the month grid with the reminder feed attached.
async fn show(month: Option<String>) -> Result<()> {
    let today = Local::now().date_naive();
    let mut calendar = CalendarState::new();
    calendar.initialize(today);

    if let Some(raw) = month {
        match NaiveDate::parse_from_str(&format!("{}-01", raw), "%Y-%m-%d") {
            Ok(date) => calendar.show_month(date),
            Err(_) => {
                msg_error!(Message::InvalidDate(raw));
                return Ok(());
            }
        }
    }

    let mut tracker = super::connect()?;
    match tracker.reminders().await {
        Ok(feed) => calendar.load_events(feed),
        Err(err) => {
            msg_error!(Message::ReminderLoadError(err.to_string()));
            return Ok(());
        }
    }

    View::calendar(&calendar, today);

    Ok(())
}

/// Creates a reminder. Past dates are rejected before the text prompt is
/// ever shown; on success the feed is refetched so the grid reflects the
/// new entry.
async fn add(args: AddArgs) -> Result<()> {
    let today = Local::now().date_naive();
    let date = match args.date {
        Some(raw) => match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => {
                msg_error!(Message::InvalidDate(raw));
                return Ok(());
            }
        },
        None => today,
    };

    if !can_add_reminder(date, today) {
        msg_error!(Message::PastDateReminder);
        return Ok(());
    }

    let title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptReminderText.to_string())
        .allow_empty(true)
        .interact_text()?;
    let title = title.trim().to_string();
    if title.is_empty() {
        msg_print!(Message::Canceled);
        return Ok(());
    }

    let mut tracker = super::connect()?;
    match tracker.add_reminder(&title, &date.format("%Y-%m-%d").to_string()).await {
        Ok(()) => {
            msg_success!(Message::ReminderAdded);
            let mut calendar = CalendarState::new();
            calendar.initialize(today);
            calendar.show_month(date);
            if let Ok(feed) = tracker.reminders().await {
                calendar.load_events(feed);
                View::calendar(&calendar, today);
            }
        }
        Err(ApiError::Network(err)) => {
            msg_error!(Message::NetworkError);
            tracing::debug!("reminder request failed: {}", err);
        }
        Err(_) => msg_error!(Message::ReminderAddFailed),
    }

    Ok(())
}
