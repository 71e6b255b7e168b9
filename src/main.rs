use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use quo_cli::cli::commands::{chat, configure};
use quo_cli::cli::{Args, Command};
use quo_cli::quote;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    match args.command {
        Some(Command::Modes) => {
            quote::print_modes();
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        None => {
            let options = chat::ChatOptions {
                mode: args.mode,
                endpoint: args.endpoint,
            };
            chat::run_chat(options).await?;
        }
    }

    Ok(())
}
