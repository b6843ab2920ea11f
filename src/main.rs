use anyhow::Result;
use pathway::commands::Cli;
use pathway::libs::messages::macros::is_debug_mode;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // In debug mode the message macros route through tracing, so a
    // subscriber has to be listening.
    if is_debug_mode() {
        fmt().with_env_filter(EnvFilter::from_default_env()).init();
    }

    Cli::menu().await
}
