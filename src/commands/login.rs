use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;

/// Forces a fresh session with the dashboard server, prompting for the
/// password if it is not cached yet.
pub async fn cmd() -> Result<()> {
    let mut tracker = super::connect()?;
    tracker.refresh_session().await?;
    msg_success!(Message::LoggedIn(tracker.email().to_string()));

    Ok(())
}
