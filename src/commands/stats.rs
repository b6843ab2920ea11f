use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::msg_error;
use anyhow::Result;

/// Fetches the goal stats snapshot and renders the three-ring progress
/// chart with its textual summary.
pub async fn cmd() -> Result<()> {
    let mut tracker = super::connect()?;

    match tracker.todo_stats().await {
        Ok(stats) => View::stats(&stats),
        Err(err) => msg_error!(Message::StatsLoadError(err.to_string())),
    }

    Ok(())
}
