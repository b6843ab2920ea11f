use crate::libs::dashboard::DashboardTable;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_error, msg_print};
use anyhow::Result;

/// Renders the dashboard the way the page loads it: the subject table
/// first, then the progress chart, then the todo list. A failed chart or
/// todo fetch degrades that section only; the rest of the page still
/// renders.
pub async fn cmd() -> Result<()> {
    let mut tracker = super::connect()?;

    let subjects = tracker.dashboard().await?;
    let table = DashboardTable::new(subjects);
    msg_print!(Message::SubjectsHeader, true);
    View::subjects(&table);

    println!();
    match tracker.todo_stats().await {
        Ok(stats) => View::stats(&stats),
        Err(err) => msg_error!(Message::StatsLoadError(err.to_string())),
    }

    msg_print!(Message::TodoPanelTitle, true);
    match tracker.todos().await {
        Ok(todos) => View::todos(&todos),
        Err(err) => msg_error!(Message::TodoLoadError(err.to_string())),
    }

    Ok(())
}
