use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;

/// Drops the cached session id and the stored password.
pub fn cmd() -> Result<()> {
    let tracker = super::connect()?;
    tracker.clear_session()?;
    msg_print!(Message::LoggedOut);

    Ok(())
}
