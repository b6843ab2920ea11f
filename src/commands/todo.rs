use crate::api::{ApiError, Tracker};
use crate::libs::messages::Message;
use crate::libs::todo::{validate_new_todo, TodoPanel, GOAL_PERIODS};
use crate::libs::view::View;
use crate::{msg_debug, msg_error, msg_print, msg_success, msg_warning};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct TodoArgs {
    #[command(subcommand)]
    command: Option<TodoCommands>,
}

#[derive(Debug, Subcommand)]
enum TodoCommands {
    #[command(about = "Add a task to a goal period")]
    Add(AddArgs),
    #[command(about = "Toggle a task's completion state")]
    Done(DoneArgs),
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(required = true)]
    task: String,
    /// Goal period: daily, weekly or monthly
    #[arg(short, long, default_value = "")]
    period: String,
}

#[derive(Debug, Args)]
pub struct DoneArgs {
    #[arg(required = true)]
    id: String,
}

pub async fn cmd(todo_args: TodoArgs) -> Result<()> {
    match todo_args.command {
        None => panel().await,
        Some(TodoCommands::Add(args)) => add(args).await,
        Some(TodoCommands::Done(args)) => done(args).await,
    }
}

/// The interactive todo panel. Opening loads the list and runs the
/// deadline check; closing refreshes the progress chart so it reflects
/// whatever changed while the panel was open.
async fn panel() -> Result<()> {
    let mut tracker = super::connect()?;
    let mut panel = TodoPanel::new();

    match tracker.todos().await {
        Ok(todos) => panel.open(todos),
        Err(err) => {
            msg_error!(Message::TodoLoadError(err.to_string()));
            return Ok(());
        }
    }
    deadline_check(&mut tracker, &mut panel).await?;

    while panel.is_open() {
        println!();
        msg_print!(Message::TodoPanelTitle);
        View::todos(panel.items());
        println!();

        let actions = ["Add task", "Toggle task", "Refresh", "Close"];
        let action = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptPanelAction.to_string())
            .items(&actions)
            .default(0)
            .interact()?;

        match action {
            0 => add_interactive(&mut tracker, &mut panel).await?,
            1 => toggle_interactive(&mut tracker, &mut panel).await?,
            2 => {
                match tracker.todos().await {
                    Ok(todos) => panel.replace(todos),
                    Err(err) => msg_error!(Message::TodoLoadError(err.to_string())),
                }
                deadline_check(&mut tracker, &mut panel).await?;
            }
            _ => panel.close(),
        }
    }

    // The chart reload on close keeps progress in step with the edits.
    match tracker.todo_stats().await {
        Ok(stats) => {
            println!();
            View::stats(&stats);
        }
        Err(err) => msg_error!(Message::StatsLoadError(err.to_string())),
    }

    Ok(())
}

/// Non-interactive add with the same client-side validation as the panel.
async fn add(args: AddArgs) -> Result<()> {
    let new_todo = match validate_new_todo(&args.task, &args.period) {
        Ok(new_todo) => new_todo,
        Err(message) => {
            msg_error!(message);
            return Ok(());
        }
    };

    let mut tracker = super::connect()?;
    match tracker.add_todo(&new_todo).await {
        Ok(()) => {
            msg_success!(Message::TaskAdded);
            match tracker.todos().await {
                Ok(todos) => View::todos(&todos),
                Err(err) => msg_error!(Message::TodoLoadError(err.to_string())),
            }
        }
        Err(ApiError::Rejected(reason)) => msg_error!(Message::TodoAddFailed(reason)),
        Err(err) => msg_error!(Message::TodoAddError(err.to_string())),
    }

    Ok(())
}

/// Non-interactive toggle. The rendered state flips immediately and is
/// rolled back if the server rejects the change.
async fn done(args: DoneArgs) -> Result<()> {
    let mut tracker = super::connect()?;
    let mut panel = TodoPanel::new();

    match tracker.todos().await {
        Ok(todos) => panel.open(todos),
        Err(err) => {
            msg_error!(Message::TodoLoadError(err.to_string()));
            return Ok(());
        }
    }

    let prior = match panel.toggle(&args.id) {
        Some(prior) => prior,
        None => {
            msg_error!(Message::TodoNotFoundWithId(args.id));
            return Ok(());
        }
    };

    resolve_toggle(&mut tracker, &mut panel, &args.id, prior).await;
    View::todos(panel.items());

    Ok(())
}

async fn add_interactive(tracker: &mut Tracker, panel: &mut TodoPanel) -> Result<()> {
    let task: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptNewTask.to_string())
        .allow_empty(true)
        .interact_text()?;
    let period_index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptGoalPeriod.to_string())
        .items(&GOAL_PERIODS)
        .default(0)
        .interact()?;

    // Validation blocks the request before it exists, same as the form.
    let new_todo = match validate_new_todo(&task, GOAL_PERIODS[period_index]) {
        Ok(new_todo) => new_todo,
        Err(message) => {
            msg_error!(message);
            return Ok(());
        }
    };

    match tracker.add_todo(&new_todo).await {
        Ok(()) => {
            msg_success!(Message::TaskAdded);
            match tracker.todos().await {
                Ok(todos) => panel.replace(todos),
                Err(err) => msg_error!(Message::TodoLoadError(err.to_string())),
            }
        }
        Err(ApiError::Rejected(reason)) => msg_error!(Message::TodoAddFailed(reason)),
        Err(err) => msg_error!(Message::TodoAddError(err.to_string())),
    }

    Ok(())
}

async fn toggle_interactive(tracker: &mut Tracker, panel: &mut TodoPanel) -> Result<()> {
    if panel.items().is_empty() {
        msg_print!(Message::TodoListEmpty);
        return Ok(());
    }

    let labels: Vec<String> = panel
        .items()
        .iter()
        .map(|todo| format!("{} {}", if todo.completion_status { "[x]" } else { "[ ]" }, todo.task))
        .collect();
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectTodo.to_string())
        .items(&labels)
        .default(0)
        .interact()?;

    let id = panel.items()[index].id.clone();
    if let Some(prior) = panel.toggle(&id) {
        resolve_toggle(tracker, panel, &id, prior).await;
    }

    Ok(())
}

/// Completes an optimistic toggle: reload the list on success, revert the
/// flip on failure.
async fn resolve_toggle(tracker: &mut Tracker, panel: &mut TodoPanel, id: &str, prior: bool) {
    match tracker.mark_todo_done(id).await {
        Ok(()) => match tracker.todos().await {
            Ok(todos) => panel.replace(todos),
            Err(err) => msg_error!(Message::TodoLoadError(err.to_string())),
        },
        Err(err) => {
            panel.rollback(id, prior);
            msg_error!(Message::TodoMarkDoneFailed(err.to_string()));
        }
    }
}

/// Asks the server for expired tasks and blocks on an acknowledgment when
/// there are any. Expired tasks are removed server-side; the client only
/// warns and refreshes.
async fn deadline_check(tracker: &mut Tracker, panel: &mut TodoPanel) -> Result<()> {
    let expired = match tracker.check_deadlines().await {
        Ok(expired) => expired,
        Err(err) => {
            msg_debug!(format!("deadline check failed: {}", err));
            return Ok(());
        }
    };
    if expired.is_empty() {
        return Ok(());
    }

    let names = expired.iter().map(|task| format!("• {}", task.task)).collect::<Vec<_>>().join("\n");
    msg_warning!(Message::ExpiredTasksWarning(names));

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ExpiredTasksAcknowledge.to_string())
        .default(true)
        .interact()?;
    if confirmed {
        match tracker.todos().await {
            Ok(todos) => panel.replace(todos),
            Err(err) => msg_error!(Message::TodoLoadError(err.to_string())),
        }
    }

    Ok(())
}
