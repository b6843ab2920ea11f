//! # Pathway - terminal companion for the study dashboard
//!
//! A command-line client for the Pathway study-tracking dashboard server.
//! The server owns every record; this crate only reads what the dashboard
//! displays and submits the same mutations the web page would.
//!
//! ## Features
//!
//! - **Subject Editor**: Inline-style editing of marks, priority and category
//! - **Todo Panel**: Goal lists grouped by period with deadline warnings
//! - **Progress Chart**: Three-ring goal completion chart and summary
//! - **Reminder Calendar**: Month view with date-anchored reminders
//! - **Session Handling**: Cookie sessions with encrypted credential cache
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pathway::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
