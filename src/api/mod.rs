//! API client for the dashboard server.
//!
//! The server is an external collaborator: it owns persistence,
//! authentication and all business rules, and this module only speaks its
//! HTTP surface. Failures are typed so callers can tell a transport error
//! from a non-success status from a payload the client could not read,
//! even though each of them ends up as a single user-facing alert.

use crate::libs::messages::Message;
use crate::libs::{data_storage::DataStorage, secret::Secret};
use crate::msg_error_anyhow;
use anyhow::Result;
use reqwest::StatusCode;
use std::fs;
use std::io::Write;
use thiserror::Error;

pub mod tracker;

pub use tracker::{Tracker, TrackerConfig};

/// Maximum number of authentication retry attempts before giving up.
pub const MAX_RETRY_COUNT: i32 = 3;

/// A failed call against the dashboard server.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (connection refused, DNS, timeout).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("server returned HTTP {0}")]
    Status(StatusCode),
    /// The response body could not be decoded into the expected shape.
    #[error("malformed response: {0}")]
    Payload(String),
    /// The server processed the request but rejected it (`success: false`).
    #[error("{0}")]
    Rejected(String),
    /// Establishing or refreshing the session failed.
    #[error("session error: {0}")]
    Session(String),
}

/// Session management for the dashboard server connection.
///
/// Handles the full session lifecycle: restoring a cached session id,
/// authenticating with stored or prompted credentials, and bounded retry
/// on failure. The session id is the value of the server's session cookie.
#[allow(async_fn_in_trait)]
pub trait Session {
    /// Performs authentication and returns a fresh session identifier.
    async fn login(&self) -> Result<String>;

    /// Stores the password to use for the next authentication attempt.
    fn set_credentials(&mut self, password: &str) -> Result<()>;

    /// File name used for caching the session id.
    fn session_id_file(&self) -> &str;

    /// Encrypted credential storage for this connection.
    fn secret(&self) -> Secret;

    /// Current retry attempt count.
    fn retry(&self) -> i32;

    /// Increments the retry counter after a failed attempt.
    fn inc_retry(&mut self);

    /// Retrieves a cached session id or establishes a new one.
    ///
    /// Prompts for the password (cached or interactive), authenticates,
    /// and caches the resulting session id. Gives up after
    /// [`MAX_RETRY_COUNT`] failed attempts.
    async fn get_session_id(&mut self) -> Result<String> {
        let session_id_file_path = DataStorage::new().get_path(self.session_id_file())?;
        let session_id_file_path_str = session_id_file_path.to_string_lossy().to_string();

        if let Ok(session_id) = Self::read_session_id(&session_id_file_path_str) {
            return Ok(session_id);
        }

        loop {
            let password: String = match self.retry() > 0 {
                true => self.secret().prompt()?,         // Force new prompt on retry
                false => self.secret().get_or_prompt()?, // Use cache if available
            };

            self.set_credentials(&password)?;

            match self.login().await {
                Ok(session_id) => {
                    let _ = Self::write_session_id(&session_id_file_path_str, &session_id);
                    return Ok(session_id);
                }
                Err(_) => {
                    if self.retry() < MAX_RETRY_COUNT {
                        self.inc_retry();
                        continue;
                    }
                    break Err(msg_error_anyhow!(Message::WrongPassword(MAX_RETRY_COUNT)));
                }
            }
        }
    }

    fn read_session_id(file_name: &str) -> Result<String> {
        Ok(fs::read_to_string(file_name)?)
    }

    fn write_session_id(file_name: &str, session_id: &str) -> Result<()> {
        let mut file = fs::OpenOptions::new().write(true).create(true).truncate(true).open(file_name)?;
        file.write_all(session_id.as_bytes())?;
        Ok(())
    }

    /// Deletes the cached session id, forcing re-authentication on the
    /// next call. A missing cache file is not an error.
    fn delete_session_id(&self) -> Result<()> {
        let session_id_file_path = DataStorage::new().get_path(self.session_id_file())?;
        if session_id_file_path.exists() {
            fs::remove_file(session_id_file_path)?;
        }
        Ok(())
    }
}
