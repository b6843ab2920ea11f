use crate::api::Tracker;
use crate::libs::dashboard::DashboardTable;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_debug, msg_error, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

/// Priority choices offered by the edit form, highest first.
const PRIORITIES: [&str; 3] = ["High", "Medium", "Low"];

/// The delete target held between the request and the confirmation,
/// so the confirm step operates on exactly what was asked for.
struct PendingDelete {
    subject: String,
    index: usize,
}

#[derive(Debug, Args)]
pub struct SubjectArgs {
    #[command(subcommand)]
    command: SubjectCommands,
}

#[derive(Debug, Subcommand)]
enum SubjectCommands {
    #[command(about = "Edit a subject's marks, priority and category")]
    Edit(EditArgs),
    #[command(about = "Delete a subject after confirmation")]
    Delete(DeleteArgs),
}

#[derive(Debug, Args)]
pub struct EditArgs {
    #[arg(required = true)]
    name: String,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    #[arg(required = true)]
    name: String,
}

pub async fn cmd(subject_args: SubjectArgs) -> Result<()> {
    match subject_args.command {
        SubjectCommands::Edit(args) => edit(args).await,
        SubjectCommands::Delete(args) => delete(args).await,
    }
}

/// The inline edit form: three fields pre-filled with the displayed
/// values. On success the displayed row is patched in place; on failure
/// the form stays open for another attempt.
async fn edit(args: EditArgs) -> Result<()> {
    let mut tracker = super::connect()?;
    let mut table = load_table(&mut tracker).await?;

    let row = match table.find(&args.name) {
        Some(row) => row.clone(),
        None => {
            msg_error!(Message::SubjectNotFound(args.name));
            return Ok(());
        }
    };

    msg_print!(Message::EditingSubject(row.name.clone()));

    let mut marks = row.marks;
    let mut priority = row.priority.clone();
    let mut category = row.category.clone();

    loop {
        marks = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptMarks.to_string())
            .default(marks)
            .interact_text()?;

        let default_priority = PRIORITIES.iter().position(|p| p.eq_ignore_ascii_case(&priority)).unwrap_or(0);
        let priority_index = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptPriority.to_string())
            .items(&PRIORITIES)
            .default(default_priority)
            .interact()?;
        priority = PRIORITIES[priority_index].to_string();

        category = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptCategory.to_string())
            .default(category)
            .interact_text()?;

        match tracker.update_subject(&row.name, marks, &priority, &category).await {
            Ok(()) => {
                table.patch(row.index, marks, &priority, &category);
                msg_success!(Message::SubjectUpdated(row.name.clone()));
                if let Some(updated) = table.find(&row.name) {
                    View::subject_row(updated);
                }
                break;
            }
            Err(err) => {
                msg_debug!(format!("update failed: {}", err));
                msg_error!(Message::SubjectUpdateFailed);
                let retry = Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::ConfirmRetryUpdate.to_string())
                    .default(true)
                    .interact()?;
                if !retry {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Two-phase delete: remember the target, confirm, then submit. Declining
/// the confirmation cancels without touching the server.
async fn delete(args: DeleteArgs) -> Result<()> {
    let mut tracker = super::connect()?;
    let mut table = load_table(&mut tracker).await?;

    let pending = match table.find(&args.name) {
        Some(row) => PendingDelete {
            subject: row.name.clone(),
            index: row.index,
        },
        None => {
            msg_error!(Message::SubjectNotFound(args.name));
            return Ok(());
        }
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteSubject(pending.subject.clone()).to_string())
        .default(false)
        .interact()?;
    if !confirmed {
        msg_print!(Message::DeleteCanceled);
        return Ok(());
    }

    match tracker.delete_subject(&pending.subject).await {
        Ok(()) => {
            table.remove(pending.index);
            msg_success!(Message::SubjectDeleted(pending.subject));
            View::subjects(&table);
        }
        Err(err) => {
            msg_debug!(format!("delete failed: {}", err));
            msg_error!(Message::SubjectDeleteFailed);
        }
    }

    Ok(())
}

async fn load_table(tracker: &mut Tracker) -> Result<DashboardTable> {
    let rows = tracker.dashboard().await?;
    Ok(DashboardTable::new(rows))
}
